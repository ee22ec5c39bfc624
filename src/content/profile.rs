//! Copy for the header, hero, experience, education and contact blocks

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Shown in the header brand and the footer.
    pub name: String,
    /// Hero title.
    pub headline: String,
    /// Hero paragraph.
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub detail: String,
}

/// Contact paragraph. `emphasis` is rendered in bold between `text` and
/// `closing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBlurb {
    pub text: String,
    #[serde(default)]
    pub emphasis: String,
    #[serde(default)]
    pub closing: String,
}
