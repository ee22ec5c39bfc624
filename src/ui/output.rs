use folio::{ConfigWarning, Finding, Severity};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::dim;

pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    if ui.json {
        return;
    }

    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{} Unknown key '{}' in {}:{}", icon, w.key, w.file.display(), line);
        } else {
            eprintln!("{} Unknown key '{}' in {}", icon, w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// One line per finding, errors first.
pub fn print_findings(ui: &UiContext, findings: &[Finding]) {
    let errors = findings.iter().filter(|f| f.severity == Severity::Error);
    let warnings = findings.iter().filter(|f| f.severity == Severity::Warning);

    for finding in errors.chain(warnings) {
        let icon = match finding.severity {
            Severity::Error => Icon::Error,
            Severity::Warning => Icon::Warning,
        };
        println!(
            "  {} {} {}",
            icon.colored(ui.color, ui.unicode),
            dim(&finding.location, ui.color),
            finding.message
        );
    }
}

/// "2 errors, 1 warning"
pub fn summarize(findings: &[Finding]) -> String {
    let errors = findings.iter().filter(|f| f.is_error()).count();
    let warnings = findings.len() - errors;
    format!(
        "{} error{}, {} warning{}",
        errors,
        if errors == 1 { "" } else { "s" },
        warnings,
        if warnings == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_pluralizes() {
        let findings = vec![
            Finding::error("a", "x"),
            Finding::warning("b", "y"),
            Finding::warning("c", "z"),
        ];
        assert_eq!(summarize(&findings), "1 error, 2 warnings");
        assert_eq!(summarize(&[]), "0 errors, 0 warnings");
    }
}
