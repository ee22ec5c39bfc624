//! Named external destinations

use serde::{Deserialize, Serialize};

/// The fixed set of destinations every page links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    GitHub,
    LinkedIn,
    Email,
    Resume,
}

impl LinkKind {
    pub const ALL: [LinkKind; 4] = [
        LinkKind::GitHub,
        LinkKind::LinkedIn,
        LinkKind::Email,
        LinkKind::Resume,
    ];

    /// Key used in the content file and in validation locations.
    pub fn key(self) -> &'static str {
        match self {
            LinkKind::GitHub => "github",
            LinkKind::LinkedIn => "linkedin",
            LinkKind::Email => "email",
            LinkKind::Resume => "resume",
        }
    }
}

/// Every key is required; a missing one is a parse error, not a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    pub github: String,
    pub linkedin: String,
    /// A `mailto:` address.
    pub email: String,
    pub resume: String,
}

impl LinkSet {
    pub fn get(&self, kind: LinkKind) -> &str {
        match kind {
            LinkKind::GitHub => &self.github,
            LinkKind::LinkedIn => &self.linkedin,
            LinkKind::Email => &self.email,
            LinkKind::Resume => &self.resume,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &str)> + '_ {
        LinkKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_matching_field() {
        let links = LinkSet {
            github: "https://github.com/X".to_string(),
            linkedin: "https://linkedin.com/in/Y".to_string(),
            email: "mailto:z@example.com".to_string(),
            resume: "https://example.com/r.pdf".to_string(),
        };

        assert_eq!(links.get(LinkKind::GitHub), "https://github.com/X");
        assert_eq!(links.get(LinkKind::Email), "mailto:z@example.com");

        let keys: Vec<_> = links.iter().map(|(k, _)| k.key()).collect();
        assert_eq!(keys, vec!["github", "linkedin", "email", "resume"]);
    }
}
