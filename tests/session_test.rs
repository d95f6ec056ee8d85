//! Editing session: loading, field edits, preview and export

use anyhow::Result;
use kodegen_tools_rebrand::utils::NOT_DETECTED;
use kodegen_tools_rebrand::{ExportFormat, Field, Session, pack, unpack};

mod common;

#[tokio::test]
async fn test_packed_file_is_unpacked_and_detected() -> Result<()> {
    let dir = common::create_test_dir()?;
    let path = dir.path().join("packed.html");
    let html = common::create_dashboard_html();
    tokio::fs::write(&path, pack(&html)).await?;

    let mut session = Session::default();
    session.load_path(&path).await?;

    assert_eq!(session.original(), html);
    assert_eq!(session.fields().get(Field::DetectedBrand), "Acme Cloud");
    assert_eq!(session.fields().get(Field::CompanyReplacement), "Acme Cloud Ltd");
    assert_eq!(session.navigation().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let mut session = Session::default();
    assert!(session.load_path("/nonexistent/rebrand/input.html").await.is_err());
}

#[tokio::test]
async fn test_packed_export_unpacks_to_plain_export() -> Result<()> {
    let dir = common::create_test_dir()?;
    let mut session = Session::default();
    session.load_file(&common::create_dashboard_html());
    session.set_field(Field::BrandReplacement, "Nova Cloud");
    session.set_field(Field::ThemeName, "emerald");

    let plain = session.export(ExportFormat::Plain)?;
    let path = dir.path().join("out.html");
    session.export_to(&path, ExportFormat::Packed).await?;
    let packed = tokio::fs::read_to_string(&path).await?;

    assert_ne!(packed, plain);
    assert_eq!(unpack(&packed), plain);
    assert!(plain.contains("<h2>Nova Cloud</h2>"));
    assert!(plain.contains("id=\"rebrand-theme\""));
    Ok(())
}

#[test]
fn test_user_edits_flow_into_preview() {
    let mut session = Session::default();
    session.load_file(&common::create_dashboard_html());
    session.set_field(Field::BrandReplacement, "Nova Cloud");
    assert!(session.set_nav_override(1, "Analytics"));
    assert!(!session.set_nav_override(9, "Nowhere"));

    let preview = session.preview();
    assert!(!preview.is_error());
    assert!(preview.html().contains("<h2>Nova Cloud</h2>"));
    assert!(preview.html().contains("Analytics <span class=\"badge\">New</span>"));
}

#[test]
fn test_edited_detected_value_becomes_search_key() {
    let mut session = Session::default();
    session.load_file(&common::create_dashboard_html());
    session.set_field(Field::DetectedBrand, "Acme");
    session.set_field(Field::BrandReplacement, "Zed");

    let html = session.export(ExportFormat::Plain).unwrap();
    assert!(html.contains("<h2>Zed Cloud</h2>"));
    assert!(html.contains("© 2021-2024 Zed Cloud Ltd."));
}

#[test]
fn test_load_file_starts_over() {
    let mut session = Session::default();
    session.load_file(&common::create_dashboard_html());
    session.set_field(Field::SloganReplacement, "Mine");
    assert!(session.set_nav_override(0, "Home"));

    session.load_file("<html><body><p>plain text only here</p></body></html>");
    assert_eq!(session.fields().get(Field::DetectedBrand), NOT_DETECTED);
    assert_eq!(session.fields().get(Field::BrandReplacement), "");
    assert_eq!(session.fields().get(Field::SloganReplacement), "");
    assert!(session.navigation().is_empty());
    assert!(session.nav_overrides().to_overrides().is_empty());
}
