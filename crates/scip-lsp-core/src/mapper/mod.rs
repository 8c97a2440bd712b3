//! Translation from SCIP entities to LSP structures.
//!
//! Everything here is pure. Malformed geometry degrades to the zero range
//! and unknown symbol kinds degrade to [`lsp_types::SymbolKind::NULL`];
//! neither ever fails the caller.

mod geometry;
mod symbol;

pub use geometry::{
    ParsedRange, occurrence_to_location, occurrence_to_location_link, parse_range,
    scip_to_lsp_position, scip_to_lsp_range,
};
pub use symbol::{
    DEFAULT_DETAIL_PREFIX, SymbolMapper, classify_kind, classify_raw_kind, document_symbols,
    symbol_information_to_document_symbol,
};
