use serde::{Deserialize, Serialize};

/// One category of the skills grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SkillGroup {
    pub fn new<I, S>(category: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}
