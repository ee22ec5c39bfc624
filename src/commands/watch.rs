use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use folio::render::SystemClock;
use folio::{watch, WatchEvent, WatchOptions, WriteOutcome};

use crate::cli::SourceArgs;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{bold, dim};

use super::{GlobalArgs, Workspace};

pub fn cmd_watch(global: &GlobalArgs, source: &SourceArgs) -> Result<()> {
    let ws = Workspace::load(global, source)?;
    let ui = ws.ui;

    let Some(content_path) = ws.content_path.clone() else {
        anyhow::bail!(
            "nothing to watch: using built-in content \
             (pass --content or set site.content in folio.toml)"
        );
    };

    let options = WatchOptions {
        content_path,
        build: ws.build.clone(),
    };

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    if !ui.json {
        println!(
            "{} {}",
            Icon::Watch.colored(ui.color, ui.unicode),
            bold("Folio Watch", ui.color)
        );
        println!(
            "{}",
            dim(
                &format!(
                    "Content: {}  Output: {}  (Ctrl+C to stop)",
                    ws.content_label(),
                    ws.build.output_path().display()
                ),
                ui.color
            )
        );
    }

    watch(options, &SystemClock, running, |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();
        match render_event(&ui, &event) {
            Some(line) if matches!(event, WatchEvent::Error { .. }) => {
                eprintln!("{} {}", dim(&timestamp, ui.color), line)
            }
            Some(line) => println!("{} {}", dim(&timestamp, ui.color), line),
            None => {}
        }
    })?;

    Ok(())
}

fn render_event(ui: &UiContext, event: &WatchEvent) -> Option<String> {
    let line = match event {
        WatchEvent::WatchStarted { source } => format!(
            "{} Watching {}",
            Icon::Watch.colored(ui.color, ui.unicode),
            source
        ),
        WatchEvent::FileChanged { path } => {
            format!("{} Changed {}", Icon::Arrow.colored(ui.color, ui.unicode), path)
        }
        WatchEvent::BuildStarted => return None,
        WatchEvent::BuildComplete { outcome, bytes } => {
            let verb = match outcome {
                WriteOutcome::Written => "Rebuilt",
                WriteOutcome::Unchanged => "Unchanged",
                WriteOutcome::Skipped => "Skipped",
            };
            format!(
                "{} {} ({} bytes)",
                Icon::Success.colored(ui.color, ui.unicode),
                verb,
                bytes
            )
        }
        WatchEvent::Error { message } => {
            format!("{} {}", Icon::Error.colored(ui.color, ui.unicode), message)
        }
        WatchEvent::Shutdown => format!("{} Stopped", Icon::Success.colored(ui.color, ui.unicode)),
    };
    Some(line)
}
