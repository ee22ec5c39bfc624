//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{FolioError, FolioResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "folio.toml";

const CONFIG_KEYS: &[&str] = &[
    "site",
    "base_path",
    "title",
    "content",
    "build",
    "out_dir",
    "skip_unchanged",
    "output",
    "color",
];

/// Non-fatal warning surfaced to CLI users (unknown keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Deserialize TOML while recording keys the target type ignores.
///
/// `known_keys` feeds the "did you mean" suggestion.
pub fn parse_toml_with_warnings<T: DeserializeOwned>(
    text: &str,
    path: &Path,
    known_keys: &[&str],
) -> Result<(T, Vec<ConfigWarning>), toml::de::Error> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(text);

    let value: T = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(text, &key),
                suggestion: suggest_key(&key, known_keys),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((value, warnings))
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let text = fs::read_to_string(path)?;
    let (mut config, warnings): (Config, _) = parse_toml_with_warnings(&text, path, CONFIG_KEYS)
        .map_err(|e| FolioError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
    config.site.base_path = normalize_base_path(&config.site.base_path);
    Ok((config, warnings))
}

/// Load `folio.toml` from the project root if present, then apply env overrides.
///
/// A missing file is not an error; a malformed one is.
pub fn load_or_default(project_root: &Path) -> FolioResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE);
    let (config, warnings) = if path.exists() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((config.with_env_overrides(), warnings))
}

/// Apply environment variable overrides (FOLIO_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(base) = get_env("FOLIO_BASE_PATH") {
        config.site.base_path = normalize_base_path(&base);
    }

    if let Some(dir) = get_env("FOLIO_OUT_DIR") {
        if !dir.trim().is_empty() {
            config.build.out_dir = PathBuf::from(dir);
        }
    }

    if let Some(color) = get_env("FOLIO_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

/// Force a leading and trailing slash: "portfolio" -> "/portfolio/".
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
