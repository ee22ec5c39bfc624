use std::fs;

use anyhow::{Context, Result};
use similar::{ChangeTag, TextDiff};

use crate::cli::SourceArgs;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{bold, dim};
use crate::ui::theme;

use super::{clock_for, GlobalArgs, Workspace};

pub fn cmd_diff(global: &GlobalArgs, source: &SourceArgs, year: Option<i32>) -> Result<()> {
    let ws = Workspace::load(global, source)?;
    let ui = ws.ui;
    let clock = clock_for(year);

    let fresh = folio::pipeline::render(&ws.content, clock.as_ref(), &ws.build)?;
    let path = fresh.path().clone();
    let existing = if path.exists() {
        Some(
            fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?,
        )
    } else {
        None
    };

    let old = existing.as_deref().unwrap_or("");
    let diff = TextDiff::from_lines(old, fresh.content());
    let changed = diff.ratio() < 1.0 || existing.is_none();

    if ui.json {
        let (added, removed) = diff
            .iter_all_changes()
            .fold((0usize, 0usize), |(a, r), c| match c.tag() {
                ChangeTag::Insert => (a + 1, r),
                ChangeTag::Delete => (a, r + 1),
                ChangeTag::Equal => (a, r),
            });
        println!(
            "{}",
            serde_json::json!({
                "command": "diff",
                "path": path,
                "exists": existing.is_some(),
                "changed": changed,
                "added": added,
                "removed": removed,
            })
        );
        return Ok(());
    }

    println!(
        "{} {}",
        Icon::Diff.colored(ui.color, ui.unicode),
        bold("Folio Diff", ui.color)
    );

    if existing.is_none() {
        println!("{} {} (new file)", Icon::Arrow.colored(ui.color, ui.unicode), path.display());
        return Ok(());
    }
    if !changed {
        println!(
            "{} {} is up to date",
            Icon::Success.colored(ui.color, ui.unicode),
            path.display()
        );
        return Ok(());
    }

    let old_label = format!("a/{}", path.display());
    let new_label = format!("b/{}", path.display());
    let unified = diff.unified_diff().context_radius(2).header(&old_label, &new_label).to_string();
    for line in unified.lines() {
        println!("{}", paint(line, ui.color));
    }
    Ok(())
}

fn paint(line: &str, color: bool) -> String {
    use crossterm::style::Stylize;

    if !color {
        return line.to_string();
    }
    if line.starts_with("+++") || line.starts_with("---") {
        bold(line, true)
    } else if line.starts_with('+') {
        format!("{}", line.with(theme::colors::SUCCESS))
    } else if line.starts_with('-') {
        format!("{}", line.with(theme::colors::ERROR))
    } else if line.starts_with("@@") {
        format!("{}", line.with(theme::colors::INFO))
    } else {
        dim(line, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_is_identity_without_color() {
        assert_eq!(paint("+added", false), "+added");
        assert_eq!(paint("@@ -1 +1 @@", false), "@@ -1 +1 @@");
    }
}
