//! Build pipeline: load → validate → render → write

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{Config, ConfigWarning};
use crate::content::{self, Content, Finding};
use crate::error::{FolioError, FolioResult};
use crate::output::{write_if_changed, OutputFile, WriteOutcome};
use crate::render::{check_anchors, Clock, Page, PageOptions, Template};

/// Name of the rendered document inside the output directory.
pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub out_dir: PathBuf,
    pub page: PageOptions,
    pub skip_unchanged: bool,
    pub dry_run: bool,
}

impl BuildOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            out_dir: config.build.out_dir.clone(),
            page: PageOptions {
                base_path: config.site.base_path.clone(),
                title: config.site.title.clone(),
            },
            skip_unchanged: config.build.skip_unchanged,
            dry_run: false,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(INDEX_FILE)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
    pub bytes: usize,
    pub hash: String,
    /// Warnings only; errors abort the build.
    pub findings: Vec<Finding>,
}

/// Load content from a file, or fall back to the built-in content.
pub fn load_content(path: Option<&Path>) -> FolioResult<(Content, Vec<ConfigWarning>)> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading content file");
            content::load_with_warnings(path)
        }
        None => {
            tracing::debug!("using built-in content");
            Ok((Content::builtin(), Vec::new()))
        }
    }
}

/// Render the document without touching disk.
pub fn render(
    content: &Content,
    clock: &dyn Clock,
    options: &BuildOptions,
) -> FolioResult<OutputFile> {
    let html = Page::new(content, clock, &options.page).render()?;
    Ok(OutputFile::new(options.output_path(), html))
}

/// Content checks plus anchor checks on the rendered page.
pub fn check(
    content: &Content,
    clock: &dyn Clock,
    page: &PageOptions,
) -> FolioResult<Vec<Finding>> {
    let mut findings = content::validate(content);
    let html = Page::new(content, clock, page).render()?;
    findings.extend(check_anchors(&html));
    Ok(findings)
}

/// Validate, render, and write `index.html`.
///
/// Refuses to write when validation reports errors.
pub fn build(
    content: &Content,
    clock: &dyn Clock,
    options: &BuildOptions,
) -> FolioResult<BuildReport> {
    let findings = check(content, clock, &options.page)?;
    let errors = findings.iter().filter(|f| f.is_error()).count();
    if errors > 0 {
        for finding in findings.iter().filter(|f| f.is_error()) {
            tracing::warn!(location = %finding.location, "{}", finding.message);
        }
        return Err(FolioError::ValidationFailed { errors });
    }

    let mut file = render(content, clock, options)?;
    let outcome = if options.dry_run {
        WriteOutcome::Skipped
    } else {
        write_if_changed(&mut file, options.skip_unchanged)?
    };

    Ok(BuildReport {
        path: file.path().clone(),
        bytes: file.len(),
        hash: file.hash().to_string(),
        outcome,
        findings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FixedClock;
    use std::fs;
    use tempfile::tempdir;

    fn options(dir: &Path) -> BuildOptions {
        BuildOptions {
            out_dir: dir.join("dist"),
            page: PageOptions::default(),
            skip_unchanged: true,
            dry_run: false,
        }
    }

    #[test]
    fn build_writes_index_then_skips_unchanged() {
        let dir = tempdir().unwrap();
        let opts = options(dir.path());
        let content = Content::builtin();
        let clock = FixedClock::new(2025);

        let first = build(&content, &clock, &opts).unwrap();
        assert_eq!(first.outcome, WriteOutcome::Written);
        assert_eq!(first.path, dir.path().join("dist/index.html"));
        let html = fs::read_to_string(&first.path).unwrap();
        assert!(html.contains("\u{a9} 2025"));

        let second = build(&content, &clock, &opts).unwrap();
        assert_eq!(second.outcome, WriteOutcome::Unchanged);
        assert_eq!(first.hash, second.hash);

        let third = build(&content, &FixedClock::new(2026), &opts).unwrap();
        assert_eq!(third.outcome, WriteOutcome::Written);
    }

    #[test]
    fn build_reports_placeholder_warnings() {
        let dir = tempdir().unwrap();
        let report =
            build(&Content::builtin(), &FixedClock::new(2025), &options(dir.path())).unwrap();
        assert!(!report.findings.is_empty());
        assert!(report.findings.iter().all(|f| !f.is_error()));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut opts = options(dir.path());
        opts.dry_run = true;

        let report = build(&Content::builtin(), &FixedClock::new(2025), &opts).unwrap();
        assert_eq!(report.outcome, WriteOutcome::Skipped);
        assert!(!report.path.exists());
    }

    #[test]
    fn build_refuses_invalid_content() {
        let dir = tempdir().unwrap();
        let mut content = Content::builtin();
        content.links.email = "not an address".to_string();

        let err = build(&content, &FixedClock::new(2025), &options(dir.path())).unwrap_err();
        assert!(matches!(err, FolioError::ValidationFailed { errors: 1 }));
        assert!(!dir.path().join("dist/index.html").exists());
    }

    #[test]
    fn options_from_config() {
        let mut config = Config::default();
        config.site.base_path = "/sub/".to_string();
        config.build.out_dir = PathBuf::from("public");

        let opts = BuildOptions::from_config(&config);
        assert_eq!(opts.output_path(), PathBuf::from("public/index.html"));
        assert_eq!(opts.page.base_path, "/sub/");
    }

    #[test]
    fn load_content_defaults_to_builtin() {
        let (content, warnings) = load_content(None).unwrap();
        assert_eq!(content, Content::builtin());
        assert!(warnings.is_empty());
    }
}
