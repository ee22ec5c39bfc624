//! Property tests for page layout.

use proptest::prelude::*;

use folio::{Content, FixedClock, Page, PageOptions, SkillGroup, Template};

fn skill_groups() -> impl Strategy<Value = Vec<SkillGroup>> {
    proptest::collection::vec(
        (
            ".{0,20}",
            proptest::collection::vec(".{0,12}", 0..=6),
        )
            .prop_map(|(category, tags)| SkillGroup::new(category, tags)),
        0..=5,
    )
}

fn skills_section(html: &str) -> &str {
    let start = html
        .find(r#"<section id="skills""#)
        .expect("skills section");
    let end = start + html[start..].find("</section>").expect("section end");
    &html[start..end]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the skills section holds exactly one badge per tag.
    #[test]
    fn property_badge_count_equals_tag_count(groups in skill_groups()) {
        let mut content = Content::builtin();
        let expected: usize = groups.iter().map(|g| g.tags.len()).sum();
        content.skills = groups;

        let clock = FixedClock::new(2024);
        let options = PageOptions::default();
        let html = Page::new(&content, &clock, &options).render().unwrap();

        let section = skills_section(&html);
        prop_assert_eq!(section.matches(r#"<span class="badge">"#).count(), expected);
    }

    /// PROPERTY: the footer year always comes from the clock.
    #[test]
    fn property_footer_year_matches_clock(year in 1970i32..3000) {
        let content = Content::builtin();
        let clock = FixedClock::new(year);
        let options = PageOptions::default();
        let html = Page::new(&content, &clock, &options).render().unwrap();

        let expected = format!("\u{a9} {} ", year);
        prop_assert!(html.contains(&expected));
    }
}
