//! SCIP range decoding.
//!
//! SCIP stores a range as a flat integer array in one of two shapes:
//!
//! - `[start_line, start_character, end_line, end_character]`
//! - `[line, start_character, end_character]` for ranges on a single line
//!
//! All values are zero-based.

use std::cmp::Ordering;

/// A zero-based position in a SCIP document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScipPosition {
    /// Line number.
    pub line: u32,
    /// Character offset within the line.
    pub character: u32,
}

impl ScipPosition {
    /// Create a new position.
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl PartialOrd for ScipPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScipPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.character.cmp(&other.character))
    }
}

/// A validated SCIP range. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScipRange {
    /// Inclusive start.
    pub start: ScipPosition,
    /// Exclusive end.
    pub end: ScipPosition,
}

/// Reasons a raw SCIP range is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// The array has neither three nor four elements.
    #[error("range must have 3 or 4 elements, got {0}")]
    InvalidLength(usize),

    /// One of the elements is negative.
    #[error("range element {index} is negative: {value}")]
    Negative {
        /// Index of the offending element.
        index: usize,
        /// The offending value.
        value: i32,
    },

    /// The end position precedes the start position.
    #[error("range end {end:?} precedes start {start:?}")]
    EndBeforeStart {
        /// Decoded start.
        start: ScipPosition,
        /// Decoded end.
        end: ScipPosition,
    },
}

impl ScipRange {
    /// Decode a raw SCIP range.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the array has the wrong length, contains a
    /// negative value, or ends before it starts.
    pub fn parse(raw: &[i32]) -> Result<Self, RangeError> {
        let values = raw
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u32::try_from(value).map_err(|_| RangeError::Negative { index, value })
            })
            .collect::<Result<Vec<u32>, _>>();

        let (start, end) = match (raw.len(), values) {
            (3 | 4, Err(e)) => return Err(e),
            (3, Ok(v)) => (ScipPosition::new(v[0], v[1]), ScipPosition::new(v[0], v[2])),
            (4, Ok(v)) => (ScipPosition::new(v[0], v[1]), ScipPosition::new(v[2], v[3])),
            (len, _) => return Err(RangeError::InvalidLength(len)),
        };

        if end < start {
            return Err(RangeError::EndBeforeStart { start, end });
        }

        Ok(Self { start, end })
    }

    /// Whether the range starts and ends on the same line.
    #[must_use]
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

impl TryFrom<&[i32]> for ScipRange {
    type Error = RangeError;

    fn try_from(raw: &[i32]) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}
