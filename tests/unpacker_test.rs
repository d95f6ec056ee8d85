//! Obfuscation unpacking and packing

use kodegen_tools_rebrand::unpacker::{UnpackOutcome, pack, unpack, unpack_with_outcome};

mod common;

#[test]
fn test_garbled_literal_returns_input() {
    let cases = [
        "<script>document.write(unescape('%uD83D'))</script>",
        "<script>document.write(decodeURIComponent('%ZZ'))</script>",
        "<script>document.write(decodeURIComponent('%C3'))</script>",
        r"<script>document.write(unescape('\u12G4'))</script>",
    ];
    for raw in cases {
        assert_eq!(unpack_with_outcome(raw), (raw.to_string(), UnpackOutcome::Unchanged), "{raw}");
    }
}

#[test]
fn test_unescape_with_unicode_escapes() {
    let raw = "<script>document.write(unescape('%3Cb%3E%u00A9 Acme%3C/b%3E'))</script>";
    assert_eq!(unpack(raw), "<b>© Acme</b>");
}

#[test]
fn test_js_escapes_inside_literal() {
    let raw = r#"<script>document.write(unescape("<p class=\"x\">it\'s<\/p>"))</script>"#;
    assert_eq!(unpack(raw), "<p class=\"x\">it's</p>");
}

#[test]
fn test_packed_dashboard_round_trip() {
    let html = common::create_dashboard_html();
    let packed = pack(&html);
    assert!(!packed.contains("Acme"));
    let (out, outcome) = unpack_with_outcome(&packed);
    assert_eq!(outcome, UnpackOutcome::UriComponent);
    assert_eq!(out, html);
}

#[test]
fn test_plain_document_untouched() {
    let html = common::create_dashboard_html();
    assert_eq!(unpack(&html), html);
}
