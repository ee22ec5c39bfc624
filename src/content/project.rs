//! Project cards

use serde::{Deserialize, Serialize};

/// A labelled outbound link on a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    /// URL, `mailto:` address, or a `#` placeholder.
    pub href: String,
}

impl ProjectLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Placeholders render as anchors that go nowhere.
    pub fn is_placeholder(&self) -> bool {
        self.href.starts_with('#')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique within the project list.
    pub title: String,
    /// Free-text date range, e.g. "2024–2025".
    pub period: String,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}
