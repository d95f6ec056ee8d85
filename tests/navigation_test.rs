//! Navigation extraction and override bookkeeping

use kodegen_tools_rebrand::{
    Document, NavOverrideStore, NavigationExtractor, NavigationItem, RebrandConfig,
    extract_navigation,
};

mod common;

fn labels(items: &[NavigationItem]) -> Vec<String> {
    items.iter().map(|i| i.original_label.clone()).collect()
}

#[test]
fn test_duplicate_label_dropped() {
    let items = extract_navigation("<nav><a>Home</a><a>Home</a><a>About</a></nav>");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].original_label, "Home");
    assert_eq!(items[0].ordinal_index, 0);
    assert_eq!(items[1].original_label, "About");
    assert_eq!(items[1].ordinal_index, 1);
}

#[test]
fn test_dashboard_navigation() {
    let items = extract_navigation(&common::create_dashboard_html());
    assert_eq!(labels(&items), vec!["Overview", "Reports", "Settings"]);
    let ordinals: Vec<usize> = items.iter().map(|i| i.ordinal_index).collect();
    assert_eq!(ordinals, vec![0, 1, 2]);
}

#[test]
fn test_labels_across_markup_and_line_breaks() {
    let html = "<nav><a href=\"/\">\n   Home\n   Page\n</a><a><b>Team</b> Space</a></nav>";
    assert_eq!(labels(&extract_navigation(html)), vec!["Home Page", "Team Space"]);
}

#[test]
fn test_relabel_located_candidate() {
    let mut doc = Document::parse("<nav><a>Home</a><a><b>Team</b> Space <span class=badge>Beta</span></a></nav>");
    let extractor = NavigationExtractor::with_defaults();
    let located = extractor.locate(&doc);
    assert_eq!(located.len(), 2);

    let (id, item) = &located[1];
    assert_eq!(item.original_label, "Team Space");
    assert!(extractor.relabel(&mut doc, *id, "Crew"));
    assert!(doc.serialize().contains("<b>Crew</b> <span class=\"badge\">Beta</span>"));

    let items = extractor.extract(&doc);
    assert_eq!(labels(&items), vec!["Home", "Crew"]);
}

#[test]
fn test_custom_badge_words() {
    let config = RebrandConfig::builder()
        .nav_badge_words(["Soon"])
        .build()
        .unwrap();
    let extractor = NavigationExtractor::new(&config).unwrap();
    let doc = Document::parse("<nav><a>Billing Soon</a><a>Teams New</a></nav>");
    assert_eq!(labels(&extractor.extract(&doc)), vec!["Billing", "Teams New"]);
}

#[test]
fn test_override_store_follows_extraction() {
    let mut store = NavOverrideStore::new(extract_navigation(&common::create_dashboard_html()));
    assert!(store.set(1, "Analytics"));
    assert!(!store.set(3, "Nowhere"));
    assert_eq!(store.get(1), Some("Analytics"));

    let overrides = store.to_overrides();
    assert_eq!(overrides.len(), 3);
    assert_eq!(overrides[1].original_label, "Reports");
    assert!(overrides[1].is_change());
    assert!(!overrides[0].is_change());

    store.rebuild(extract_navigation("<nav><a>Home</a></nav>"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(1), None);
}
