//! Branding detection waterfalls

use kodegen_tools_rebrand::utils::{FOUND_IMAGE, NOT_DETECTED};
use kodegen_tools_rebrand::{BrandingDetector, Detection, Document, RebrandConfig};

mod common;

use common::detect_html;

#[test]
fn test_dashboard_detection() {
    let result = detect_html(&common::create_dashboard_html());
    assert_eq!(result.brand, Detection::found("Acme Cloud"));
    assert_eq!(result.slogan, Detection::found("Ship it faster"));
    assert_eq!(
        result.logo,
        Detection::found_with_source(FOUND_IMAGE, "https://cdn.example.com/acme.png")
    );
    assert_eq!(result.company, Detection::found("Acme Cloud Ltd"));
    assert_eq!(result.found_count(), 4);
}

#[test]
fn test_brand_selector_length_boundary() {
    let forty = "A".repeat(40);
    let html = format!("<div class=\"brand\">{forty}</div><h1>Fallback</h1>");
    assert_eq!(detect_html(&html).brand, Detection::found("Fallback"));

    let thirty_nine = "A".repeat(39);
    let html = format!("<div class=\"brand\">{thirty_nine}</div><h1>Fallback</h1>");
    assert_eq!(detect_html(&html).brand, Detection::found(thirty_nine));
}

#[test]
fn test_heading_scan_bounds() {
    // (2, 30) exclusive: "Ab" is too short, the 30-char heading too long
    let html = format!("<h1>Ab</h1><h2>{}</h2><h2>Good Brand</h2>", "x".repeat(30));
    assert_eq!(detect_html(&html).brand, Detection::found("Good Brand"));
}

#[test]
fn test_title_fallback_strips_suffix() {
    let html = "<html><head><title>Globex | Sign in</title></head><body><p>hi</p></body></html>";
    assert_eq!(detect_html(html).brand, Detection::found("Globex"));

    let html = "<html><head><title>Acme - Pro Tools | Home</title></head><body></body></html>";
    assert_eq!(detect_html(html).brand, Detection::found("Acme - Pro Tools"));

    let html = "<html><head><title>   </title></head><body></body></html>";
    assert_eq!(detect_html(html).brand, Detection::NotFound);
}

#[test]
fn test_slogan_rejects_ui_chrome() {
    let html = "<p class=slogan>Main Menu</p><p class=subtitle>Copyright notice</p>\
                <p class=tagline>Dashboards for everyone</p>";
    assert_eq!(detect_html(html).slogan, Detection::found("Dashboards for everyone"));

    let html = format!("<p class=slogan>{}</p>", "y".repeat(80));
    assert_eq!(detect_html(&html).slogan, Detection::NotFound);
}

#[test]
fn test_logo_requires_src() {
    let html = "<div class=logo><img src=\"  \"></div><header><img src=\"/h.png\"></header>";
    assert_eq!(detect_html(html).logo.source(), Some("/h.png"));
    assert_eq!(detect_html("<img class=logo>").logo, Detection::NotFound);
}

#[test]
fn test_copyright_wins_over_byline() {
    let html = "<footer><span>by Jane Doe</span><p>© 2024 Initech. All rights reserved.</p></footer>";
    assert_eq!(detect_html(html).company, Detection::found("Initech"));
}

#[test]
fn test_copyright_without_year_is_truncated_line() {
    let line = format!("Copyright {}", "z".repeat(60));
    let html = format!("<footer><p>{line}</p></footer>");
    let company = detect_html(&html).company;
    let value = company.value().unwrap();
    assert_eq!(value.chars().count(), 50);
    assert!(value.starts_with("Copyright zzz"));
    assert!(value.ends_with("..."));
}

#[test]
fn test_byline_and_literal_token() {
    let html = "<aside><ul><li>by Jane Doe</li></ul></aside>";
    assert_eq!(detect_html(html).company, Detection::found("Jane Doe"));

    let html = "<main><p>Welcome to Your Company portal</p></main>";
    assert_eq!(detect_html(html).company, Detection::found("Your Company"));

    assert_eq!(detect_html("<p>nothing here</p>").company.to_string(), NOT_DETECTED);
}

#[test]
fn test_detection_is_deterministic() {
    let doc = Document::parse(&common::create_dashboard_html());
    let detector = BrandingDetector::with_defaults();
    assert_eq!(detector.detect(&doc), detector.detect(&doc));
}

#[test]
fn test_configured_brand_selectors() {
    let config = RebrandConfig::builder()
        .brand_selectors([".product"])
        .build()
        .unwrap();
    let detector = BrandingDetector::new(&config).unwrap();
    let doc = Document::parse("<span class=brand>Ignored</span><span class=product>Widget</span>");
    assert_eq!(detector.detect(&doc).brand, Detection::found("Widget"));
}

#[test]
fn test_detection_serializes_with_status() {
    let json = serde_json::to_value(detect_html(&common::create_dashboard_html())).unwrap();
    assert_eq!(json["brand"]["status"], "found");
    assert_eq!(json["brand"]["value"], "Acme Cloud");
    assert_eq!(json["logo"]["source"], "https://cdn.example.com/acme.png");
}
