//! Configuration module for Folio
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FOLIO_*)
//! 3. Project config (./folio.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{normalize_base_path, parse_toml_with_warnings, ConfigWarning, CONFIG_FILE};
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, SiteConfig};
