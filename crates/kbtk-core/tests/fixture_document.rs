mod common;

use common::util_fs::read_fixture_document_json;
use kbtk_core::{Document, DocumentBody, ElementKind, GlyphType, ParagraphHeading, TextLocator};

fn fixture() -> Document {
    serde_json::from_str(&read_fixture_document_json()).expect("fixture must parse")
}

#[test]
fn fixture_parses_with_style_defaults() {
    let doc = fixture();

    assert_eq!(doc.num_children(), 13);
    assert_eq!(doc.elements[0].heading, ParagraphHeading::Heading3);
    assert_eq!(doc.elements[1].heading, ParagraphHeading::Normal);
    assert!(doc.elements[1].attributes.is_empty());

    let item = &doc.elements[11];
    assert_eq!(item.kind, ElementKind::ListItem);
    assert_eq!(item.glyph, Some(GlyphType::Bullet));
    assert_eq!(item.nesting_level, Some(0));
}

#[test]
fn markers_resolve_to_whole_elements() {
    let doc = fixture();

    assert_eq!(doc.locate_marker("<input_RPPH>"), Some(0));
    assert_eq!(doc.locate_marker("</input_RPPH>"), Some(3));
    assert_eq!(doc.locate_marker("<story>"), Some(9));
    assert_eq!(doc.locate_marker("</story>"), Some(12));
    assert_eq!(doc.locate_marker("<rpph>"), None);
}

#[test]
fn find_text_matches_inside_elements() {
    let doc = fixture();

    assert_eq!(
        doc.find_text("Peliharaan"),
        Some(TextLocator { index: 1, start: 15, end: 24 })
    );
    assert_eq!(doc.find_text("tidak ada"), None);
}

#[test]
fn serialization_omits_unset_styles() {
    let doc = fixture();
    let json = serde_json::to_value(&doc).unwrap();

    let plain = &json["elements"][1];
    assert_eq!(plain["kind"], "paragraph");
    assert!(plain.get("glyph").is_none());
    assert!(plain.get("attributes").is_none());

    let reparsed: Document = serde_json::from_value(json).unwrap();
    assert_eq!(reparsed, doc);
}
