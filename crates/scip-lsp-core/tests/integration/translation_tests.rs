//! SCIP document translation end to end.

#![allow(clippy::unwrap_used)]

use lsp_types::{Position, Range, SymbolKind, Uri};
use scip_lsp_core::mapper::{
    SymbolMapper, document_symbols, occurrence_to_location, occurrence_to_location_link,
};
use scip_lsp_core::scip::SymbolRole;

use crate::common::test_utils::load_scip_document;

const APP_URI: &str = "file:///ws/src/main/java/com/example/app/App.java";

fn app_uri() -> Uri {
    APP_URI.parse().unwrap()
}

#[test]
fn test_outline_of_fixture_document() {
    let doc = load_scip_document("App.json");
    let symbols = document_symbols(&doc);

    let summary: Vec<(&str, SymbolKind)> =
        symbols.iter().map(|s| (s.name.as_str(), s.kind)).collect();
    assert_eq!(
        summary,
        vec![
            ("App", SymbolKind::CLASS),
            ("main", SymbolKind::METHOD),
            ("args", SymbolKind::VARIABLE),
        ]
    );

    let app = &symbols[0];
    assert_eq!(app.detail.as_deref(), Some("[uLSP]App"));
    assert_eq!(
        app.range,
        Range::new(Position::new(4, 13), Position::new(4, 16))
    );
    assert_eq!(app.selection_range, app.range);
}

#[test]
fn test_outline_with_configured_prefix() {
    let doc = load_scip_document("App.json");
    let symbols = SymbolMapper::new("[scip] ").document_symbols(&doc);
    assert_eq!(symbols[1].detail.as_deref(), Some("[scip] main"));
}

#[test]
fn test_references_keep_going_past_malformed_range() {
    let doc = load_scip_document("App.json");
    let uri = app_uri();

    let args_symbol = "semanticdb maven . . com/example/app/App#main().(args)";
    let locations: Vec<_> = doc
        .occurrences
        .iter()
        .filter(|occ| occ.symbol == args_symbol)
        .map(|occ| occurrence_to_location(&uri, occ))
        .collect();

    assert_eq!(locations.len(), 2);
    assert_eq!(
        locations[0].range,
        Range::new(Position::new(5, 37), Position::new(5, 41))
    );
    // The second occurrence carries a negative column and degrades to the zero range.
    assert_eq!(locations[1].range, Range::default());
    assert!(locations.iter().all(|loc| loc.uri == uri));
}

#[test]
fn test_definition_link_from_reference() {
    let doc = load_scip_document("App.json");
    let uri = app_uri();

    let reference_origin = Range::new(Position::new(6, 12), Position::new(6, 17));
    let definition = doc
        .occurrences
        .iter()
        .find(|occ| occ.symbol.ends_with("App#main().") && occ.has_role(SymbolRole::DEFINITION))
        .unwrap();

    let link = occurrence_to_location_link(&uri, definition, Some(reference_origin));
    assert_eq!(link.origin_selection_range, Some(reference_origin));
    assert_eq!(
        link.target_range,
        Range::new(Position::new(5, 23), Position::new(5, 27))
    );
    assert_eq!(link.target_selection_range, link.target_range);
    assert_eq!(link.target_uri, uri);
}

#[test]
fn test_document_symbols_serialize_as_lsp() {
    let doc = load_scip_document("App.json");
    let symbols = document_symbols(&doc);
    let json = serde_json::to_value(&symbols[0]).unwrap();

    assert_eq!(json["name"], "App");
    assert_eq!(json["kind"], 5);
    assert_eq!(json["range"]["start"]["line"], 4);
    assert_eq!(json["selectionRange"]["end"]["character"], 16);
}
