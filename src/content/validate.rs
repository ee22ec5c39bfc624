//! Authoring checks for content
//!
//! Content is trusted at render time; these checks exist so that a malformed
//! link or a duplicate title is caught by `folio check` (and refused by
//! `folio build`) instead of shipping silently.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use url::Url;

use super::{Content, LinkKind, Project, SkillGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// One validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Dotted path into the content, e.g. `projects[1].title`.
    pub location: String,
    pub message: String,
}

impl Finding {
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// What kind of destination a link field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Destination {
    Web,
    Mail,
    /// Web, mail, or a `#` placeholder.
    Any,
}

/// Run every content check. Order follows the page.
pub fn validate(content: &Content) -> Vec<Finding> {
    let mut findings = Vec::new();

    if content.profile.name.trim().is_empty() {
        findings.push(Finding::error("profile.name", "name is empty"));
    }
    if content.profile.headline.trim().is_empty() {
        findings.push(Finding::error("profile.headline", "headline is empty"));
    }

    for (kind, href) in content.links.iter() {
        let expected = match kind {
            LinkKind::Email => Destination::Mail,
            _ => Destination::Web,
        };
        check_href(&format!("links.{}", kind.key()), href, expected, &mut findings);
    }

    check_projects(&content.projects, &mut findings);
    check_skills(&content.skills, &mut findings);

    for (i, entry) in content.experience.iter().enumerate() {
        if entry.role.trim().is_empty() {
            findings.push(Finding::error(
                format!("experience[{}].role", i),
                "role is empty",
            ));
        }
    }
    for (i, entry) in content.education.iter().enumerate() {
        if entry.degree.trim().is_empty() {
            findings.push(Finding::error(
                format!("education[{}].degree", i),
                "degree is empty",
            ));
        }
    }

    findings
}

fn check_projects(projects: &[Project], findings: &mut Vec<Finding>) {
    let mut titles = HashSet::new();

    for (i, project) in projects.iter().enumerate() {
        let at = format!("projects[{}]", i);

        if project.title.trim().is_empty() {
            findings.push(Finding::error(format!("{}.title", at), "title is empty"));
        } else if !titles.insert(project.title.as_str()) {
            findings.push(Finding::error(
                format!("{}.title", at),
                format!("duplicate project title '{}'", project.title),
            ));
        }

        if project.highlights.is_empty() {
            findings.push(Finding::error(
                format!("{}.highlights", at),
                "highlights list is empty",
            ));
        }
        if project.stack.is_empty() {
            findings.push(Finding::error(format!("{}.stack", at), "stack list is empty"));
        }

        for (j, link) in project.links.iter().enumerate() {
            let link_at = format!("{}.links[{}]", at, j);
            if link.label.trim().is_empty() {
                findings.push(Finding::error(format!("{}.label", link_at), "label is empty"));
            }
            check_href(&format!("{}.href", link_at), &link.href, Destination::Any, findings);
        }
    }
}

fn check_skills(groups: &[SkillGroup], findings: &mut Vec<Finding>) {
    let mut categories = HashSet::new();

    for (i, group) in groups.iter().enumerate() {
        let at = format!("skills[{}]", i);

        if group.category.trim().is_empty() {
            findings.push(Finding::error(format!("{}.category", at), "category is empty"));
        } else if !categories.insert(group.category.as_str()) {
            findings.push(Finding::error(
                format!("{}.category", at),
                format!("duplicate skill category '{}'", group.category),
            ));
        }

        if group.tags.is_empty() {
            findings.push(Finding::error(format!("{}.tags", at), "tag list is empty"));
        }

        let mut seen = HashSet::new();
        for tag in &group.tags {
            if !seen.insert(tag.as_str()) {
                findings.push(Finding::error(
                    format!("{}.tags", at),
                    format!("duplicate tag '{}'", tag),
                ));
            }
        }
    }
}

fn check_href(location: &str, href: &str, expected: Destination, findings: &mut Vec<Finding>) {
    if expected == Destination::Any && href.starts_with('#') {
        findings.push(Finding::warning(
            location,
            "placeholder link renders as a non-functional anchor",
        ));
        return;
    }

    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(e) => {
            findings.push(Finding::error(
                location,
                format!("'{}' is not a valid URL ({})", href, e),
            ));
            return;
        }
    };

    let ok = match (expected, url.scheme()) {
        (Destination::Web | Destination::Any, "http" | "https") => url.host_str().is_some(),
        (Destination::Mail | Destination::Any, "mailto") => url.path().contains('@'),
        _ => false,
    };

    if !ok {
        let wanted = match expected {
            Destination::Web => "an http(s) URL",
            Destination::Mail => "a mailto: address",
            Destination::Any => "an http(s) URL, a mailto: address, or a # placeholder",
        };
        findings.push(Finding::error(
            location,
            format!("'{}' is not {}", href, wanted),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ProjectLink, SkillGroup};

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            period: "2025".to_string(),
            summary: "Summary".to_string(),
            highlights: vec!["one".to_string()],
            stack: vec!["Rust".to_string()],
            links: vec![ProjectLink::new("Code", "https://example.com/code")],
        }
    }

    fn locations(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.location.as_str()).collect()
    }

    #[test]
    fn duplicate_project_title_is_error() {
        let mut content = Content::builtin();
        content.projects = vec![project("A"), project("A")];

        let findings = validate(&content);
        assert!(locations(&findings).contains(&"projects[1].title"));
        assert!(findings.iter().any(|f| f.is_error()));
    }

    #[test]
    fn empty_title_highlights_and_stack_are_errors() {
        let mut content = Content::builtin();
        let mut bad = project("");
        bad.highlights.clear();
        bad.stack.clear();
        content.projects = vec![bad];

        let locs = locations(&validate(&content)).join(",");
        assert!(locs.contains("projects[0].title"));
        assert!(locs.contains("projects[0].highlights"));
        assert!(locs.contains("projects[0].stack"));
    }

    #[test]
    fn placeholder_link_is_only_a_warning() {
        let mut content = Content::builtin();
        let mut p = project("A");
        p.links = vec![ProjectLink::new("README", "#")];
        content.projects = vec![p];

        let findings = validate(&content);
        let link: Vec<_> = findings
            .iter()
            .filter(|f| f.location == "projects[0].links[0].href")
            .collect();
        assert_eq!(link.len(), 1);
        assert_eq!(link[0].severity, Severity::Warning);
    }

    #[test]
    fn blank_link_label_is_error() {
        let mut content = Content::builtin();
        let mut p = project("A");
        p.links = vec![ProjectLink::new("  ", "https://x.dev")];
        content.projects = vec![p];

        let findings = validate(&content);
        let label: Vec<_> = findings
            .iter()
            .filter(|f| f.location == "projects[0].links[0].label")
            .collect();
        assert_eq!(label.len(), 1);
        assert!(label[0].is_error());
        assert!(!locations(&findings).contains(&"projects[0].links[0].href"));
    }

    #[test]
    fn email_must_be_mailto() {
        let mut content = Content::builtin();
        content.links.email = "https://example.com/contact".to_string();

        let findings = validate(&content);
        assert!(findings
            .iter()
            .any(|f| f.location == "links.email" && f.is_error()));
    }

    #[test]
    fn malformed_web_link_is_error() {
        let mut content = Content::builtin();
        content.links.github = "github dot com".to_string();

        let findings = validate(&content);
        assert!(findings
            .iter()
            .any(|f| f.location == "links.github" && f.is_error()));
    }

    #[test]
    fn skill_group_checks() {
        let mut content = Content::builtin();
        content.skills = vec![
            SkillGroup::new("Languages", ["Rust", "Rust"]),
            SkillGroup::new("Languages", ["Go"]),
            SkillGroup::new("Empty", Vec::<String>::new()),
        ];

        let findings = validate(&content);
        let messages: Vec<_> = findings.iter().map(|f| f.to_string()).collect();
        assert!(messages.contains(&"skills[0].tags: duplicate tag 'Rust'".to_string()));
        assert!(messages
            .contains(&"skills[1].category: duplicate skill category 'Languages'".to_string()));
        assert!(messages.contains(&"skills[2].tags: tag list is empty".to_string()));
    }

    #[test]
    fn mailto_project_link_is_accepted() {
        let mut content = Content::builtin();
        let mut p = project("A");
        p.links = vec![ProjectLink::new("Mail", "mailto:a@example.com")];
        content.projects = vec![p];

        let findings = validate(&content);
        assert!(!findings
            .iter()
            .any(|f| f.location.starts_with("projects[0].links")));
    }
}
