use std::path::PathBuf;

use anyhow::Result;
use folio::render::SystemClock;

use crate::cli::SourceArgs;
use crate::ui::output::{print_findings, summarize};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::bold;

use super::{GlobalArgs, Workspace};

pub fn cmd_check(
    global: &GlobalArgs,
    content: Option<PathBuf>,
    strict_warnings: bool,
) -> Result<()> {
    let source = SourceArgs { content, out: None };
    let ws = Workspace::load(global, &source)?;
    let ui = ws.ui;

    let findings = folio::check(&ws.content, &SystemClock, &ws.build.page)?;
    let errors = findings.iter().filter(|f| f.is_error()).count();
    let warnings = findings.len() - errors;
    let failed = errors > 0 || (strict_warnings && warnings > 0);

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "command": "check",
                "content": ws.content_label(),
                "passed": !failed,
                "errors": errors,
                "warnings": warnings,
                "findings": findings,
            })
        );
    } else {
        println!(
            "{} {}",
            Icon::Check.colored(ui.color, ui.unicode),
            bold("Folio Check", ui.color)
        );
        print_findings(&ui, &findings);

        let icon = if failed {
            Icon::Error
        } else if warnings > 0 {
            Icon::Warning
        } else {
            Icon::Success
        };
        println!(
            "{} {}: {}",
            icon.colored(ui.color, ui.unicode),
            ws.content_label(),
            summarize(&findings)
        );
    }

    if failed {
        anyhow::bail!("check failed: {}", summarize(&findings));
    }
    Ok(())
}
