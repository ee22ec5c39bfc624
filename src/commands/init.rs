//! Init command - write a starter folio.toml and content.toml

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use folio::config::CONFIG_FILE;
use folio::Content;

use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::detect_capabilities;

use super::GlobalArgs;

const CONTENT_FILE: &str = "content.toml";

fn config_template() -> String {
    format!(
        r#"# Folio configuration

[site]
# Path the page is served from, e.g. "/portfolio/" for a project page.
base_path = "/"
content = "{}"

[build]
out_dir = "dist"
skip_unchanged = true

[output]
color = "auto"
"#,
        CONTENT_FILE
    )
}

pub fn cmd_init(global: &GlobalArgs, path: &Path, force: bool) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);
    let content_path = path.join(CONTENT_FILE);

    if !force {
        for existing in [&config_path, &content_path] {
            if existing.exists() {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    existing.display()
                );
            }
        }
    }

    fs::create_dir_all(path).with_context(|| format!("failed to create {}", path.display()))?;

    let content = Content::builtin()
        .to_toml()
        .context("failed to serialize built-in content")?;
    fs::write(&config_path, config_template())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    fs::write(&content_path, content)
        .with_context(|| format!("failed to write {}", content_path.display()))?;

    if global.json {
        println!(
            "{}",
            serde_json::json!({
                "command": "init",
                "config": config_path,
                "content": content_path,
            })
        );
        return Ok(());
    }

    let caps = detect_capabilities();
    let icon = Icon::Success.colored(caps.supports_color, caps.supports_unicode);
    println!("{} Created {}", icon, config_path.display());
    println!("{} Created {}", icon, content_path.display());
    println!("\nNext: edit {} and run 'folio build'", CONTENT_FILE);
    Ok(())
}
