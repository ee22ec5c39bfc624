use crossterm::style::Stylize;

use crate::ui::theme;

/// Dim or plain text depending on color support.
pub fn dim(text: &str, color: bool) -> String {
    if color {
        format!("{}", text.with(theme::colors::DIM))
    } else {
        text.to_string()
    }
}

/// Bold or plain text depending on color support.
pub fn bold(text: &str, color: bool) -> String {
    if color {
        format!("{}", text.bold())
    } else {
        text.to_string()
    }
}
