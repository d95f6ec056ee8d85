//! Markup model: parsing, queries, text walks, mutation and serialization

use kodegen_tools_rebrand::markup::document::DOCTYPE;
use kodegen_tools_rebrand::{Document, RebrandError};

mod common;

#[test]
fn test_serialize_untouched_keeps_content() {
    let html = common::create_test_html(
        "Acme & Co",
        r#"<div class="brand" data-x="1">Acme</div><p>Hello <b>world</b></p><!-- note -->"#,
    );
    let out = Document::parse(&html).serialize();

    assert!(out.starts_with(DOCTYPE));
    assert!(out.contains("<title>Acme &amp; Co</title>"));
    assert!(out.contains("Acme</div>"));
    assert!(out.contains("class=\"brand\""));
    assert!(out.contains("data-x=\"1\""));
    assert!(out.contains("<p>Hello <b>world</b></p>"));
    assert!(out.contains("<!-- note -->"));
}

#[test]
fn test_doctype_added_when_missing() {
    let out = Document::parse("<p>no doctype</p>").serialize();
    assert!(out.starts_with("<!DOCTYPE html>\n<html>"));
    assert!(out.contains("<p>no doctype</p>"));
}

#[test]
fn test_reserialization_is_stable() {
    let first = Document::parse(&common::create_dashboard_html()).serialize();
    let second = Document::parse(&first).serialize();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_selector_is_an_error() {
    let doc = Document::parse("<p>x</p>");
    match doc.query_all("p[") {
        Err(RebrandError::InvalidSelector { selector, .. }) => assert_eq!(selector, "p["),
        other => panic!("expected InvalidSelector, got {other:?}"),
    }
}

#[test]
fn test_text_nodes_restartable_and_ordered() {
    let doc = Document::parse(&common::create_dashboard_html());
    let body = doc.body().unwrap();

    let walk = doc.text_nodes(body);
    let first: Vec<String> = walk
        .clone()
        .filter_map(|id| doc.text_value(id))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    let second: Vec<String> = walk
        .filter_map(|id| doc.text_value(id))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    assert_eq!(first, second);
    let pos = |needle: &str| first.iter().position(|t| t == needle).unwrap();
    assert!(pos("Acme Cloud") < pos("Settings"));
    assert!(!first.iter().any(|t| t.contains("productName")));
    // <pre> content is not rendered copy
    assert_eq!(first.iter().filter(|t| *t == "Acme Cloud").count(), 1);
}

#[test]
fn test_set_text_first_label_only() {
    let mut doc = Document::parse(
        "<a id=x><i class=icon></i> Reports <span class=badge>New</span></a>",
    );
    let link = doc.query_first("#x").unwrap().unwrap();
    doc.set_text(link, "Analytics");
    let out = doc.serialize();
    assert!(out.contains("<i class=\"icon\"></i>Analytics<span class=\"badge\">New</span>"));
}

#[test]
fn test_set_text_on_empty_wrapper_appends() {
    let mut doc = Document::parse("<div id=d><img src=a.png></div>");
    let div = doc.query_first("#d").unwrap().unwrap();
    doc.set_text(div, "Nova");
    assert!(doc.serialize().contains("<img src=\"a.png\">Nova</div>"));
}
