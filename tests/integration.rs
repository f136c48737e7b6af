use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use pretty_assertions::assert_eq;
use url::Url;

use cardcircle::card::{CardClassifier, SimpleCardClassifier};
use cardcircle::core::geometry::Point;
use cardcircle::core::model::ContactDraft;
use cardcircle::export::{Exporter, JsonExporter};
use cardcircle::layout::{CircleLayout, LayoutConfig, LayoutEngine, PaginationState};
use cardcircle::{classify, paginate, place_items};

/// A full card as a recognizer would return it, top to bottom.
#[test]
fn test_classify_realistic_card() -> Result<()> {
    let lines: Vec<String> = [
        "Jane Appleseed",
        "Senior iOS Engineer",
        "Acme Apps Ltd.",
        "1 Infinite Loop",
        "Cupertino, CA 95014",
        "Tel +1 (408) 996-1010",
        "Fax +1 (408) 996-1011",
        "jane@acmeapps.com",
        "www.acmeapps.com",
        "https://github.com/janeappleseed",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let card = SimpleCardClassifier::new().classify(&lines);

    assert_eq!(card.name.as_deref(), Some("Jane Appleseed"));
    assert_eq!(card.email.as_deref(), Some("jane@acmeapps.com"));
    assert_eq!(card.phone.as_deref(), Some("+1 (408) 996-1010"));
    assert_eq!(
        card.address.as_deref(),
        Some("1 Infinite Loop\nCupertino, CA 95014")
    );
    assert_eq!(
        card.urls,
        vec![
            Url::parse("http://www.acmeapps.com")?,
            Url::parse("https://github.com/janeappleseed")?,
        ]
    );

    let draft = ContactDraft::from_card(card);
    assert!(draft.is_submittable());
    Ok(())
}

/// Classified card survives the JSON export as a contact draft.
#[test]
fn test_export_contact_draft() -> Result<()> {
    let card = classify(&["John Doe", "john@example.com", "555-123-4567"]);

    let mut out = std::env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    out.push(format!("cardcircle-test-{}-{}", std::process::id(), now));
    JsonExporter::new(out.clone()).export(&card)?;

    let contents = fs::read_to_string(out.join("card.json"))?;
    let draft: ContactDraft = serde_json::from_str(&contents)?;
    assert_eq!(draft.name, "John Doe");
    assert_eq!(draft.email.as_deref(), Some("john@example.com"));
    assert_eq!(draft.card, card);

    let _ = fs::remove_dir_all(&out);
    Ok(())
}

/// Paging through a full attendee list visits every item exactly once.
#[test]
fn test_layout_and_navigation() -> Result<()> {
    let pages = paginate(16, 7)?;
    assert_eq!(pages.len(), 3);

    let center = Point::new(200.0, 300.0);
    let mut state = PaginationState::default();
    let mut seen = Vec::new();
    for _ in 0..pages.len() {
        let page = &pages[state.page_index];
        for placement in place_items(page, center, 200.0)? {
            assert!((placement.position.distance(&center) - 200.0).abs() < 1e-9);
            seen.push(placement.index);
        }
        state = state.next(pages.len());
    }
    assert_eq!(state, PaginationState::default());
    assert_eq!(seen, (0..16).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn test_frame_matches_free_functions() -> Result<()> {
    let config = LayoutConfig {
        center: Point::new(10.0, 10.0),
        radius: 50.0,
        ..Default::default()
    };
    let frame = CircleLayout::new(config).compute(9)?;
    let pages = paginate(9, config.page_capacity)?;
    assert_eq!(frame.page_count(), pages.len());
    for (frame_page, page) in frame.pages.iter().zip(&pages) {
        assert_eq!(&frame_page.page, page);
        assert_eq!(frame_page.placements, place_items(page, config.center, 50.0)?);
    }
    Ok(())
}
