//! SCIP to LSP geometry conversion.

use lsp_types::{Location, LocationLink, Position, Range, Uri};

use crate::scip::{Occurrence, ScipPosition, ScipRange};

/// Outcome of decoding a raw SCIP range into LSP geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedRange {
    /// The raw range was well formed.
    Valid(Range),
    /// The raw range was malformed; callers should treat the location as unknown.
    Sentinel,
}

impl ParsedRange {
    /// The LSP range, using the zero range for [`ParsedRange::Sentinel`].
    #[must_use]
    pub fn into_range(self) -> Range {
        match self {
            Self::Valid(range) => range,
            Self::Sentinel => Range::default(),
        }
    }

    /// Whether the raw range was well formed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Decode a raw SCIP range, keeping track of whether it was well formed.
#[must_use]
pub fn parse_range(raw: &[i32]) -> ParsedRange {
    match ScipRange::parse(raw) {
        Ok(parsed) => ParsedRange::Valid(Range {
            start: scip_to_lsp_position(parsed.start),
            end: scip_to_lsp_position(parsed.end),
        }),
        Err(e) => {
            tracing::debug!(?raw, error = %e, "malformed SCIP range, using zero range");
            ParsedRange::Sentinel
        }
    }
}

/// Map a raw SCIP range to an LSP range.
///
/// Malformed input yields the zero range `{0,0}-{0,0}` so that one bad
/// occurrence never aborts a response.
#[must_use]
pub fn scip_to_lsp_range(raw: &[i32]) -> Range {
    parse_range(raw).into_range()
}

/// Map a SCIP position to an LSP position.
#[must_use]
pub const fn scip_to_lsp_position(pos: ScipPosition) -> Position {
    Position {
        line: pos.line,
        character: pos.character,
    }
}

/// Build an LSP location for an occurrence in the document `uri`.
#[must_use]
pub fn occurrence_to_location(uri: &Uri, occ: &Occurrence) -> Location {
    Location {
        uri: uri.clone(),
        range: scip_to_lsp_range(&occ.range),
    }
}

/// Build an LSP location link for an occurrence in the document `uri`.
///
/// SCIP does not distinguish a symbol's full extent from its name, so the
/// target range and target selection range are identical. `origin_selection`
/// is passed through unchanged.
#[must_use]
pub fn occurrence_to_location_link(
    uri: &Uri,
    occ: &Occurrence,
    origin_selection: Option<Range>,
) -> LocationLink {
    let target = scip_to_lsp_range(&occ.range);
    LocationLink {
        origin_selection_range: origin_selection,
        target_uri: uri.clone(),
        target_range: target,
        target_selection_range: target,
    }
}
