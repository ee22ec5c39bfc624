//! Content model
//!
//! Everything the page says lives here as typed, read-only records. Layout
//! lives in `render`; nothing in this module knows about markup.
//!
//! Content comes from one of two places:
//! 1. A TOML content file (`site.content` in `folio.toml`, or `--content`)
//! 2. The built-in defaults compiled into the binary (`Content::builtin()`)

mod builtin;
mod links;
mod loader;
mod profile;
mod project;
mod skills;
pub mod validate;

pub use links::{LinkKind, LinkSet};
pub use loader::{load, load_with_warnings};
pub use profile::{ContactBlurb, EducationEntry, ExperienceEntry, Profile};
pub use project::{Project, ProjectLink};
pub use skills::SkillGroup;
pub use validate::{validate, Finding, Severity};

use serde::{Deserialize, Serialize};

/// All variable copy on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub links: LinkSet,
    /// Display order is declaration order.
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Presentation order, not necessarily chronological.
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    pub contact: ContactBlurb,
}

impl Content {
    /// The content compiled into the binary.
    pub fn builtin() -> Self {
        builtin::content()
    }

    /// Serialize to the TOML content-file format.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
