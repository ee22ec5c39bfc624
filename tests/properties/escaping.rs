//! Property tests for output escaping.

use proptest::prelude::*;

use folio::render::{ButtonLink, ButtonStyle};
use folio::{Badge, Section, Template};

const BADGE_OPEN: &str = r#"<span class="badge">"#;

fn inner<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
    let start = html.find(open).unwrap() + open.len();
    let end = html.rfind(close).unwrap();
    &html[start..end]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: badge text never leaks raw angle brackets.
    #[test]
    fn property_badge_text_never_leaks_tags(s in ".*") {
        let html = Badge::new(&s).render().unwrap();
        let text = inner(&html, BADGE_OPEN, "</span>");
        prop_assert!(!text.contains('<'));
        prop_assert!(!text.contains('>'));
    }

    /// PROPERTY: an href can't close its attribute quotes.
    #[test]
    fn property_href_never_leaks_quotes(s in ".*") {
        let html = ButtonLink::new("x", &s, ButtonStyle::Outline).render().unwrap();
        let href = inner(&html, "<a href=\"", "\" class=");
        prop_assert!(!href.contains('"'));
        prop_assert!(!href.contains('<'));
    }

    /// PROPERTY: text without special characters is passed through unchanged.
    #[test]
    fn property_plain_text_is_identity(s in "[A-Za-z0-9 .,:-]{0,40}") {
        let html = Badge::new(&s).render().unwrap();
        prop_assert_eq!(inner(&html, BADGE_OPEN, "</span>"), s.as_str());
    }

    /// PROPERTY: a section heading is one `<h2>` whatever its text.
    #[test]
    fn property_section_heading_is_one_element(title in ".{0,40}") {
        let html = Section::new("s", &title, "").render().unwrap();
        prop_assert_eq!(html.matches("<h2>").count(), 1);
        prop_assert_eq!(html.matches("</h2>").count(), 1);
    }

    /// PROPERTY: a badge is exactly one span whatever its text.
    #[test]
    fn property_badge_is_one_span(s in ".{0,40}") {
        let html = Badge::new(&s).render().unwrap();
        prop_assert!(html.starts_with(BADGE_OPEN));
        prop_assert!(html.ends_with("</span>"));
        prop_assert_eq!(html.matches("<span").count(), 1);
    }
}
