//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;

use super::loader::{self, ConfigWarning};

/// Where and how the page is served
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path the built artifact is served from, e.g. "/portfolio/".
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Overrides the document `<title>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Content file; built-in content is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            title: None,
            content: None,
        }
    }
}

fn default_base_path() -> String {
    "/".to_string()
}

/// Build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Leave the output untouched when its hash already matches.
    #[serde(default = "default_true")]
    pub skip_unchanged: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            skip_unchanged: true,
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FolioResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `folio.toml` from the project root, or defaults
    pub fn load_or_default(project_root: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (FOLIO_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Content file resolved against the project root.
    pub fn content_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.site
            .content
            .as_ref()
            .map(|p| if p.is_absolute() { p.clone() } else { project_root.join(p) })
    }
}
