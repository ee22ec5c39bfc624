//! Page composer
//!
//! Lays out, top to bottom: sticky header with nav, hero, the five content
//! sections, footer. Nav entries and section anchors both come from
//! `SECTIONS`, so they cannot drift apart.
//!
//! Layout lives in `templates/`; this module only shapes `Content` into the
//! values those templates loop over.

use askama::Template;

use crate::content::{
    ContactBlurb, Content, EducationEntry, ExperienceEntry, LinkKind, LinkSet, Profile, Project,
};

use super::primitives::{Badge, ButtonLink, ButtonStyle, Section};
use super::style::STYLESHEET;
use super::Clock;

/// One entry in the nav bar and the section it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: &'static str,
    pub title: &'static str,
}

const PROJECTS: SectionSpec = SectionSpec {
    id: "projects",
    title: "Projects",
};
const SKILLS: SectionSpec = SectionSpec {
    id: "skills",
    title: "Skills",
};
const EXPERIENCE: SectionSpec = SectionSpec {
    id: "experience",
    title: "Experience",
};
const EDUCATION: SectionSpec = SectionSpec {
    id: "education",
    title: "Education",
};
const CONTACT: SectionSpec = SectionSpec {
    id: "contact",
    title: "Contact",
};

/// Sections in page order.
pub const SECTIONS: [SectionSpec; 5] = [PROJECTS, SKILLS, EXPERIENCE, EDUCATION, CONTACT];

/// Anchor on the hero; the header brand links here.
pub const TOP_ANCHOR: &str = "top";

const HERO_ACTIONS: [(&str, LinkKind, ButtonStyle); 4] = [
    ("Download Resume", LinkKind::Resume, ButtonStyle::Primary),
    ("GitHub", LinkKind::GitHub, ButtonStyle::Outline),
    ("LinkedIn", LinkKind::LinkedIn, ButtonStyle::Outline),
    ("Contact", LinkKind::Email, ButtonStyle::Outline),
];

const CONTACT_ACTIONS: [(&str, LinkKind, ButtonStyle); 3] = [
    ("Email", LinkKind::Email, ButtonStyle::Primary),
    ("GitHub", LinkKind::GitHub, ButtonStyle::Outline),
    ("LinkedIn", LinkKind::LinkedIn, ButtonStyle::Outline),
];

/// Deploy-level knobs; the layout itself ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Path the page is served from. Emitted as the canonical link only;
    /// in-page anchors stay bare `#id` fragments.
    pub base_path: String,
    /// Document title; defaults to the brand line.
    pub title: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            title: None,
        }
    }
}

/// The whole document.
///
/// The copyright year is read from the clock when the page is composed.
#[derive(Template)]
#[template(path = "page.html")]
pub struct Page<'a> {
    title: String,
    canonical: &'a str,
    stylesheet: &'static str,
    brand: String,
    top: &'static str,
    sections: Vec<SectionSpec>,
    profile: &'a Profile,
    hero_actions: Vec<ButtonLink<'a>>,
    projects: Section<'a, ProjectGrid<'a>>,
    skills: Section<'a, SkillGrid<'a>>,
    experience: Section<'a, ExperienceList<'a>>,
    education: Section<'a, EducationList<'a>>,
    contact: Section<'a, ContactCard<'a>>,
    year: i32,
}

impl<'a> Page<'a> {
    pub fn new(content: &'a Content, clock: &dyn Clock, options: &'a PageOptions) -> Self {
        let brand = format!("{} \u{2014} Portfolio", content.profile.name);
        let [projects, skills, experience, education, contact] = SECTIONS;

        Self {
            title: options.title.clone().unwrap_or_else(|| brand.clone()),
            canonical: &options.base_path,
            stylesheet: STYLESHEET,
            brand,
            top: TOP_ANCHOR,
            sections: SECTIONS.to_vec(),
            profile: &content.profile,
            hero_actions: actions(&content.links, &HERO_ACTIONS),
            projects: Section::new(
                projects.id,
                projects.title,
                ProjectGrid::new(&content.projects),
            ),
            skills: Section::new(skills.id, skills.title, SkillGrid::new(content)),
            experience: Section::new(
                experience.id,
                experience.title,
                ExperienceList::new(&content.experience),
            ),
            education: Section::new(
                education.id,
                education.title,
                EducationList::new(&content.education),
            ),
            contact: Section::new(
                contact.id,
                contact.title,
                ContactCard {
                    blurb: &content.contact,
                    actions: actions(&content.links, &CONTACT_ACTIONS),
                },
            ),
            year: clock.year(),
        }
    }
}

fn actions<'a>(
    links: &'a LinkSet,
    table: &[(&'static str, LinkKind, ButtonStyle)],
) -> Vec<ButtonLink<'a>> {
    table
        .iter()
        .map(|&(label, kind, style)| ButtonLink::new(label, links.get(kind), style))
        .collect()
}

struct ProjectCard<'a> {
    project: &'a Project,
    period: Badge<'a>,
    stack: Vec<Badge<'a>>,
}

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectGrid<'a> {
    cards: Vec<ProjectCard<'a>>,
}

impl<'a> ProjectGrid<'a> {
    fn new(projects: &'a [Project]) -> Self {
        let cards = projects
            .iter()
            .map(|project| ProjectCard {
                project,
                period: Badge::new(&project.period),
                stack: badges(&project.stack),
            })
            .collect();
        Self { cards }
    }
}

struct SkillCard<'a> {
    category: &'a str,
    badges: Vec<Badge<'a>>,
}

#[derive(Template)]
#[template(path = "skills.html")]
struct SkillGrid<'a> {
    groups: Vec<SkillCard<'a>>,
}

impl<'a> SkillGrid<'a> {
    fn new(content: &'a Content) -> Self {
        let groups = content
            .skills
            .iter()
            .map(|group| SkillCard {
                category: &group.category,
                badges: badges(&group.tags),
            })
            .collect();
        Self { groups }
    }
}

struct ExperienceCard<'a> {
    entry: &'a ExperienceEntry,
    period: Badge<'a>,
}

#[derive(Template)]
#[template(path = "experience.html")]
struct ExperienceList<'a> {
    entries: Vec<ExperienceCard<'a>>,
}

impl<'a> ExperienceList<'a> {
    fn new(entries: &'a [ExperienceEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|entry| ExperienceCard {
                entry,
                period: Badge::new(&entry.period),
            })
            .collect();
        Self { entries }
    }
}

struct EducationCard<'a> {
    entry: &'a EducationEntry,
    period: Option<Badge<'a>>,
}

#[derive(Template)]
#[template(path = "education.html")]
struct EducationList<'a> {
    entries: Vec<EducationCard<'a>>,
}

impl<'a> EducationList<'a> {
    fn new(entries: &'a [EducationEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|entry| EducationCard {
                entry,
                period: entry.period.as_deref().map(Badge::new),
            })
            .collect();
        Self { entries }
    }
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactCard<'a> {
    blurb: &'a ContactBlurb,
    actions: Vec<ButtonLink<'a>>,
}

fn badges(tags: &[String]) -> Vec<Badge<'_>> {
    tags.iter().map(|tag| Badge::new(tag)).collect()
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
