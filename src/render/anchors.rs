//! Anchor checks on rendered output
//!
//! Works on the final HTML rather than on `SECTIONS` so that a layout change
//! which forgets a section (or adds one without a nav entry) is caught.

use crate::content::Finding;

use super::page::TOP_ANCHOR;

/// Fragment targets of the links inside `<nav>`, in order.
pub fn nav_targets(html: &str) -> Vec<String> {
    let Some(start) = html.find("<nav") else {
        return Vec::new();
    };
    let nav = &html[start..];
    let nav = match nav.find("</nav>") {
        Some(end) => &nav[..end],
        None => nav,
    };

    attribute_values(nav, "href=\"#")
}

/// Ids of every `<section>`, in order.
pub fn section_ids(html: &str) -> Vec<String> {
    attribute_values(html, "<section id=\"")
}

fn attribute_values(haystack: &str, prefix: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut rest = haystack;
    while let Some(pos) = rest.find(prefix) {
        rest = &rest[pos + prefix.len()..];
        let end = rest.find('"').unwrap_or(rest.len());
        values.push(rest[..end].to_string());
        rest = &rest[end..];
    }
    values
}

/// Nav targets and section ids must match one-to-one; the top anchor must exist.
pub fn check_anchors(html: &str) -> Vec<Finding> {
    let nav = nav_targets(html);
    let sections = section_ids(html);
    let mut findings = Vec::new();

    for target in &nav {
        let matches = sections.iter().filter(|id| *id == target).count();
        if matches != 1 {
            findings.push(Finding::error(
                "page.nav",
                format!("nav target '#{}' matches {} sections", target, matches),
            ));
        }
    }

    for id in &sections {
        let linked = nav.iter().filter(|t| *t == id).count();
        if linked != 1 {
            findings.push(Finding::error(
                "page.sections",
                format!("section '{}' is linked {} times from the nav", id, linked),
            ));
        }
    }

    if !html.contains(&format!("id=\"{}\"", TOP_ANCHOR)) {
        findings.push(Finding::error(
            "page.top",
            format!("missing '#{}' anchor", TOP_ANCHOR),
        ));
    }

    findings
}
