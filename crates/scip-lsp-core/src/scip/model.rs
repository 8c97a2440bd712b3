//! SCIP document entities consumed by the mapper.
//!
//! Field names follow the protobuf JSON mapping, so documents dumped with
//! `scip print --json` deserialize directly.

use serde::{Deserialize, Serialize};

use super::kind::ScipSymbolKind;

/// Bit flags describing the role a symbol plays at an occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolRole(i32);

impl SymbolRole {
    /// The occurrence defines the symbol.
    pub const DEFINITION: Self = Self(0x1);
    /// The occurrence imports the symbol.
    pub const IMPORT: Self = Self(0x2);
    /// The symbol is written to.
    pub const WRITE_ACCESS: Self = Self(0x4);
    /// The symbol is read from.
    pub const READ_ACCESS: Self = Self(0x8);
    /// The occurrence is in generated code.
    pub const GENERATED: Self = Self(0x10);
    /// The occurrence is in test code.
    pub const TEST: Self = Self(0x20);
    /// The occurrence is a forward declaration.
    pub const FORWARD_DEFINITION: Self = Self(0x40);

    /// Raw bit value.
    #[must_use]
    pub const fn bits(self) -> i32 {
        self.0
    }
}

/// A located reference to a symbol within a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Raw SCIP range, see [`super::ScipRange`].
    #[serde(default)]
    pub range: Vec<i32>,
    /// Symbol identifier.
    #[serde(default)]
    pub symbol: String,
    /// Bitset of [`SymbolRole`] values.
    #[serde(default)]
    pub symbol_roles: i32,
    /// Range of the syntax node enclosing this occurrence, if the indexer emits it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enclosing_range: Vec<i32>,
}

impl Occurrence {
    /// Create an occurrence with no roles.
    #[must_use]
    pub fn new(symbol: impl Into<String>, range: Vec<i32>) -> Self {
        Self {
            range,
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Add a role to this occurrence.
    #[must_use]
    pub const fn with_role(mut self, role: SymbolRole) -> Self {
        self.symbol_roles |= role.bits();
        self
    }

    /// Whether the occurrence carries the given role.
    #[must_use]
    pub const fn has_role(&self, role: SymbolRole) -> bool {
        self.symbol_roles & role.bits() != 0
    }

    /// Whether this occurrence is the definition site of its symbol.
    #[must_use]
    pub const fn is_definition(&self) -> bool {
        self.has_role(SymbolRole::DEFINITION)
    }
}

/// Metadata about a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInformation {
    /// Symbol identifier.
    #[serde(default)]
    pub symbol: String,
    /// Human readable name.
    #[serde(default)]
    pub display_name: String,
    /// Raw `SymbolInformation.Kind` tag. Kept raw so tags newer than this
    /// crate survive deserialization.
    #[serde(default)]
    pub kind: i32,
    /// Markdown documentation lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documentation: Vec<String>,
}

impl SymbolInformation {
    /// Create symbol metadata with a known kind.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        display_name: impl Into<String>,
        kind: ScipSymbolKind,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
            kind: kind.as_i32(),
            documentation: Vec::new(),
        }
    }

    /// Decoded kind, or `None` if the tag is unknown to this crate.
    #[must_use]
    pub const fn kind(&self) -> Option<ScipSymbolKind> {
        ScipSymbolKind::from_i32(self.kind)
    }
}

/// A single indexed source file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Path relative to the project root.
    #[serde(default)]
    pub relative_path: String,
    /// Occurrences in source order.
    #[serde(default)]
    pub occurrences: Vec<Occurrence>,
    /// Symbols defined in this document.
    #[serde(default)]
    pub symbols: Vec<SymbolInformation>,
}

impl Document {
    /// Look up metadata for a symbol defined in this document.
    #[must_use]
    pub fn symbol_information(&self, symbol: &str) -> Option<&SymbolInformation> {
        self.symbols.iter().find(|info| info.symbol == symbol)
    }
}
