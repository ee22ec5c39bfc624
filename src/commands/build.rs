use anyhow::Result;
use folio::{FolioError, WriteOutcome};

use crate::cli::SourceArgs;
use crate::ui::output::{print_findings, summarize};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{bold, dim};

use super::{clock_for, GlobalArgs, Workspace};

pub fn cmd_build(
    global: &GlobalArgs,
    source: &SourceArgs,
    year: Option<i32>,
    force: bool,
    dry_run: bool,
) -> Result<()> {
    let mut ws = Workspace::load(global, source)?;
    ws.build.dry_run = dry_run;
    if force {
        ws.build.skip_unchanged = false;
    }
    let ui = ws.ui;
    let clock = clock_for(year);

    if !ui.json {
        println!(
            "{} {}",
            Icon::Build.colored(ui.color, ui.unicode),
            bold("Folio Build", ui.color)
        );
        println!("{}", dim(&format!("Content: {}", ws.content_label()), ui.color));
    }

    let report = match folio::build(&ws.content, clock.as_ref(), &ws.build) {
        Ok(report) => report,
        Err(FolioError::ValidationFailed { errors }) => {
            let findings = folio::check(&ws.content, clock.as_ref(), &ws.build.page)?;
            if ui.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "command": "build",
                        "status": "invalid",
                        "errors": errors,
                        "findings": findings,
                    })
                );
            } else {
                print_findings(&ui, &findings);
            }
            anyhow::bail!(FolioError::ValidationFailed { errors });
        }
        Err(e) => return Err(e.into()),
    };

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "command": "build",
                "status": report.outcome,
                "path": report.path,
                "bytes": report.bytes,
                "hash": report.hash,
                "warnings": report.findings.len(),
            })
        );
        return Ok(());
    }

    if !report.findings.is_empty() && ui.verbose > 0 {
        print_findings(&ui, &report.findings);
    }

    let (icon, verb) = match report.outcome {
        WriteOutcome::Written => (Icon::Success, "Wrote"),
        WriteOutcome::Unchanged => (Icon::Success, "Unchanged"),
        WriteOutcome::Skipped => (Icon::Arrow, "Would write"),
    };
    println!(
        "{} {} {} ({} bytes)",
        icon.colored(ui.color, ui.unicode),
        verb,
        report.path.display(),
        report.bytes
    );
    if !report.findings.is_empty() {
        println!("{}", dim(&summarize(&report.findings), ui.color));
    }

    Ok(())
}
