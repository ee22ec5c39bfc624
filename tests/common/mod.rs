//! Shared helpers for folio CLI tests.
//!
//! `TestEnv` owns a temp project directory and runs the `folio` binary from it
//! with a clean environment.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// A small, valid content file with no placeholder links.
pub const VALID_CONTENT: &str = r##"
[profile]
name = "Ada Example"
headline = "Systems engineer"
intro = "Builds small, reliable tools."

[links]
github = "https://github.com/ada"
linkedin = "https://linkedin.com/in/ada"
email = "mailto:ada@example.com"
resume = "https://example.com/ada.pdf"

[[skills]]
category = "Languages"
tags = ["Rust", "Go"]

[[projects]]
title = "Alpha"
period = "2023"
summary = "First project."
highlights = ["Shipped it"]
stack = ["Rust"]
links = [{ label = "Source", href = "https://github.com/ada/alpha" }]

[[experience]]
role = "Engineer"
period = "2022 - Present"
bullets = ["Did things"]

[[education]]
degree = "BSc Computer Science"
detail = "Example University"

[contact]
text = "Reach out for"
emphasis = "interesting work"
closing = "."
"##;

/// Result of running the folio binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Temp project with `content.toml` holding `content`.
    pub fn with_content(content: &str) -> Self {
        let env = Self::new();
        env.write("content.toml", content);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_folio"))
            .current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("FOLIO_BASE_PATH")
            .env_remove("FOLIO_OUT_DIR")
            .env_remove("FOLIO_COLOR")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to execute folio");

        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Parse every non-empty stdout line as JSON.
pub fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad json {l:?}: {e}")))
        .collect()
}
