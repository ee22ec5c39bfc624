//! Command implementations for the `folio` binary

pub mod build;
pub mod check;
pub mod diff;
pub mod init;
pub mod watch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use folio::render::{Clock, FixedClock, SystemClock};
use folio::{BuildOptions, Config, Content};

use crate::cli::{ColorWhen, SourceArgs};
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Flags shared by every command
#[derive(Debug, Clone, Copy)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
}

/// Everything a command needs after config and content are resolved.
pub struct Workspace {
    pub ui: UiContext,
    /// `None` means built-in content.
    pub content_path: Option<PathBuf>,
    pub content: Content,
    pub build: BuildOptions,
}

impl Workspace {
    /// Load `folio.toml` from the working directory, apply CLI overrides,
    /// then load content.
    pub fn load(global: &GlobalArgs, source: &SourceArgs) -> Result<Self> {
        let root = std::env::current_dir().context("failed to read current directory")?;
        let (config, config_warnings) = Config::load_or_default(&root)?;
        let ui = UiContext::new(global.json, global.verbose, global.color, &config);
        print_config_warnings(&ui, &config_warnings);

        let content_path = source
            .content
            .clone()
            .or_else(|| config.content_path(&root));
        let (content, content_warnings) = folio::load_content(content_path.as_deref())
            .with_context(|| match &content_path {
                Some(p) => format!("failed to load content from {}", p.display()),
                None => "failed to load built-in content".to_string(),
            })?;
        print_config_warnings(&ui, &content_warnings);

        let mut build = BuildOptions::from_config(&config);
        if let Some(out) = &source.out {
            build.out_dir = out.clone();
        }

        let ws = Self {
            ui,
            content_path,
            content,
            build,
        };
        tracing::debug!(
            content = %ws.content_label(),
            out = %ws.build.out_dir.display(),
            "workspace loaded"
        );
        Ok(ws)
    }

    pub fn content_label(&self) -> String {
        match &self.content_path {
            Some(p) => p.display().to_string(),
            None => "built-in".to_string(),
        }
    }
}

/// `--year` pins the clock; otherwise read the system clock.
pub fn clock_for(year: Option<i32>) -> Box<dyn Clock> {
    match year {
        Some(year) => Box::new(FixedClock::new(year)),
        None => Box::new(SystemClock),
    }
}
