//! Watch loop

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::FolioResult;
use crate::output::hash_content;
use crate::pipeline;
use crate::render::Clock;

use super::event::{WatchEvent, WatchOptions, WatcherState};

/// Watch the content file and rebuild whenever its content changes.
///
/// Rebuild failures (a half-saved file, a validation error) are reported as
/// `WatchEvent::Error` and the loop keeps going. Only watcher setup errors
/// are returned.
pub fn watch(
    options: WatchOptions,
    clock: &dyn Clock,
    running: Arc<AtomicBool>,
    event_callback: impl Fn(WatchEvent),
) -> FolioResult<()> {
    let target = options
        .content_path
        .canonicalize()
        .unwrap_or_else(|_| options.content_path.clone());

    event_callback(WatchEvent::WatchStarted {
        source: options.content_path.display().to_string(),
    });

    rebuild(&options, clock, &event_callback);
    let mut last_hash = std::fs::read_to_string(&target)
        .map(|c| hash_content(&c))
        .ok();

    let (tx, rx) = channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                for path in event.paths {
                    let _ = tx.send(path);
                }
            }
        },
        Config::default(),
    )?;

    // Watch the directory, not the file: editors often replace on save.
    let dir = watch_dir(&target);
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    tracing::debug!(dir = %dir.display(), "watching");

    // notify sometimes replays events for existing files on registration
    let cooldown_end = Instant::now() + Duration::from_millis(200);
    while Instant::now() < cooldown_end {
        let _ = rx.recv_timeout(Duration::from_millis(50));
    }

    let mut state = WatcherState::new();

    while running.load(Ordering::SeqCst) {
        if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
            let path = path.canonicalize().unwrap_or(path);
            if path != target {
                continue;
            }

            if let Ok(content) = std::fs::read_to_string(&path) {
                let new_hash = hash_content(&content);
                if last_hash.as_deref() == Some(new_hash.as_str()) {
                    continue;
                }
                last_hash = Some(new_hash);
                state.add_change(path);
            }
        }

        if state.should_rebuild() {
            for path in state.take_changes() {
                event_callback(WatchEvent::FileChanged {
                    path: path.display().to_string(),
                });
            }
            rebuild(&options, clock, &event_callback);
        }
    }

    event_callback(WatchEvent::Shutdown);
    Ok(())
}

fn watch_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn rebuild(options: &WatchOptions, clock: &dyn Clock, callback: &impl Fn(WatchEvent)) {
    callback(WatchEvent::BuildStarted);

    let result = pipeline::load_content(Some(&options.content_path))
        .and_then(|(content, _warnings)| pipeline::build(&content, clock, &options.build));

    match result {
        Ok(report) => callback(WatchEvent::BuildComplete {
            outcome: report.outcome,
            bytes: report.bytes,
        }),
        Err(e) => {
            tracing::warn!("rebuild failed: {}", e);
            callback(WatchEvent::Error {
                message: e.to_string(),
            })
        }
    }
}
