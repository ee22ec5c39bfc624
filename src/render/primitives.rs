//! Reusable layout primitives

use std::fmt::Display;

use askama::Template;

/// A titled, anchorable page region.
///
/// The content is opaque: anything that implements `Display` and yields
/// markup, usually another template. The `id` must be unique on the page
/// since nav links target it.
#[derive(Template)]
#[template(
    source = r#"<section id="{{ id }}" class="section"><div class="container"><h2>{{ title }}</h2><div class="section-body">{{ content|safe }}</div></div></section>"#,
    ext = "html"
)]
pub struct Section<'a, C: Display> {
    id: &'a str,
    title: &'a str,
    content: C,
}

impl<'a, C: Display> Section<'a, C> {
    pub fn new(id: &'a str, title: &'a str, content: C) -> Self {
        Self { id, title, content }
    }

    pub fn id(&self) -> &str {
        self.id
    }
}

/// Short inline pill label (skills, dates).
#[derive(Template)]
#[template(source = r#"<span class="badge">{{ text }}</span>"#, ext = "html")]
pub struct Badge<'a> {
    text: &'a str,
}

impl<'a> Badge<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled, dark
    Primary,
    /// Bordered, light
    Outline,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn btn-primary",
            ButtonStyle::Outline => "btn btn-outline",
        }
    }
}

/// Call-to-action link styled as a button.
#[derive(Template)]
#[template(
    source = r#"<a href="{{ href }}" class="{{ class }}">{{ label }}</a>"#,
    ext = "html"
)]
pub struct ButtonLink<'a> {
    label: &'a str,
    href: &'a str,
    class: &'static str,
}

impl<'a> ButtonLink<'a> {
    pub fn new(label: &'a str, href: &'a str, style: ButtonStyle) -> Self {
        Self {
            label,
            href,
            class: style.class(),
        }
    }
}
