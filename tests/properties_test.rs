//! Property tests for detection, substitution, serialization and packing

use kodegen_tools_rebrand::{Detection, DetectionResult, Document, RewriteRequest, pack, unpack};
use proptest::prelude::*;

mod common;

fn paragraph() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 0..6).prop_map(|words| words.join(" "))
}

fn simple_body() -> impl Strategy<Value = String> {
    let element = (
        prop::sample::select(vec!["p", "div", "span", "h1", "h2", "li"]),
        prop::sample::select(vec!["", " class=\"brand\"", " class=\"tagline\"", " class=\"logo\""]),
        "[A-Za-z0-9 ]{0,24}",
    )
        .prop_map(|(tag, class, text)| format!("<{tag}{class}>{text}</{tag}>"));
    prop::collection::vec(element, 0..8).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn detection_is_deterministic(body in simple_body(), title in "[A-Za-z |-]{0,20}") {
        let html = common::create_test_html(&title, &body);
        let first = kodegen_tools_rebrand::detect(&html);
        let second = kodegen_tools_rebrand::detect(&html);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn exact_substitution_reaches_every_rendered_occurrence(
        paragraphs in prop::collection::vec((paragraph(), paragraph()), 1..6)
    ) {
        let body: String = paragraphs
            .iter()
            .map(|(before, after)| format!("<p>{before} Acme {after}</p>"))
            .collect();
        let html = common::create_test_html("Home", &format!("{body}<pre>Acme</pre>"));

        let request = RewriteRequest::new(html)
            .detected(DetectionResult {
                brand: Detection::found("Acme"),
                ..DetectionResult::default()
            })
            .brand("Zed");
        let out = kodegen_tools_rebrand::rewrite(&request).unwrap();
        let doc = Document::parse(&out);

        prop_assert!(!doc.body_text().contains("Acme"));
        prop_assert_eq!(doc.body_text().matches("Zed").count(), paragraphs.len());
        prop_assert!(out.contains("<pre>Acme</pre>"));
    }

    #[test]
    fn serialization_keeps_rendered_text(body in simple_body()) {
        let doc = Document::parse(&common::create_test_html("T", &body));
        let reparsed = Document::parse(&doc.serialize());
        prop_assert_eq!(doc.body_text(), reparsed.body_text());
    }

    #[test]
    fn unpack_inverts_pack(markup in "\\PC{0,200}") {
        prop_assert_eq!(unpack(&pack(&markup)), markup);
    }
}
