//! Content file loading

use std::fs;
use std::path::Path;

use crate::config::{parse_toml_with_warnings, ConfigWarning};
use crate::error::{FolioError, FolioResult};

use super::Content;

const CONTENT_KEYS: &[&str] = &[
    "profile",
    "name",
    "headline",
    "intro",
    "links",
    "github",
    "linkedin",
    "email",
    "resume",
    "skills",
    "category",
    "tags",
    "projects",
    "title",
    "period",
    "summary",
    "highlights",
    "stack",
    "label",
    "href",
    "experience",
    "role",
    "bullets",
    "education",
    "degree",
    "detail",
    "contact",
    "text",
    "emphasis",
    "closing",
];

/// Load a content file, collecting unknown keys as warnings.
pub fn load_with_warnings(path: &Path) -> FolioResult<(Content, Vec<ConfigWarning>)> {
    let text = fs::read_to_string(path)?;
    parse_toml_with_warnings(&text, path, CONTENT_KEYS).map_err(|e| FolioError::InvalidContent {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a content file, discarding warnings.
pub fn load(path: &Path) -> FolioResult<Content> {
    let (content, _warnings) = load_with_warnings(path)?;
    Ok(content)
}
