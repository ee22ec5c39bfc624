//! Property tests for content validation.

use proptest::prelude::*;

use folio::content::ProjectLink;
use folio::{validate, Content, Project};

fn project() -> impl Strategy<Value = Project> {
    (
        ".{0,16}",
        proptest::collection::vec(".{0,8}", 0..3),
        proptest::collection::vec(".{0,8}", 0..3),
        proptest::collection::vec((".{0,8}", ".{0,24}"), 0..3),
    )
        .prop_map(|(title, highlights, stack, links)| Project {
            title,
            period: "2024".to_string(),
            summary: "summary".to_string(),
            highlights,
            stack,
            links: links
                .into_iter()
                .map(|(label, href)| ProjectLink::new(label, href))
                .collect(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics, whatever the links hold.
    #[test]
    fn property_validate_never_panics(
        github in ".{0,40}",
        email in ".{0,40}",
        projects in proptest::collection::vec(project(), 0..4),
    ) {
        let mut content = Content::builtin();
        content.links.github = github;
        content.links.email = email;
        content.projects = projects;

        let _ = validate(&content);
    }

    /// PROPERTY: duplicate project titles are always reported.
    #[test]
    fn property_duplicate_titles_flagged(title in "[A-Za-z][A-Za-z ]{0,15}") {
        let mut content = Content::builtin();
        let mut first = content.projects[0].clone();
        first.title = title.clone();
        let mut second = first.clone();
        second.summary = "another".to_string();
        content.projects = vec![first, second];

        let findings = validate(&content);
        prop_assert!(findings
            .iter()
            .any(|f| f.is_error() && f.location == "projects[1].title"));
    }
}
