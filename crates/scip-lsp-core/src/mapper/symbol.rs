//! SCIP symbol metadata to LSP document symbols.

use lsp_types::{DocumentSymbol, SymbolKind};

use super::geometry::scip_to_lsp_range;
use crate::scip::{Document, Occurrence, ScipSymbolKind, SymbolInformation};

/// Prefix prepended to a symbol's display name in `DocumentSymbol.detail`.
pub const DEFAULT_DETAIL_PREFIX: &str = "[uLSP]";

/// Classify a SCIP symbol kind into the LSP symbol kind vocabulary.
///
/// Kinds without a close LSP counterpart map to [`SymbolKind::NULL`].
#[must_use]
#[allow(clippy::match_same_arms)]
pub const fn classify_kind(kind: ScipSymbolKind) -> SymbolKind {
    use ScipSymbolKind as K;

    match kind {
        K::Function | K::Delegate | K::Macro => SymbolKind::FUNCTION,
        K::File => SymbolKind::FILE,
        K::Module | K::Library => SymbolKind::MODULE,
        K::Namespace => SymbolKind::NAMESPACE,
        K::Package | K::PackageObject => SymbolKind::PACKAGE,
        K::Class | K::TypeClass | K::Mixin | K::SingletonClass | K::Contract => SymbolKind::CLASS,
        K::Method
        | K::MethodReceiver
        | K::AbstractMethod
        | K::StaticMethod
        | K::SingletonMethod
        | K::MethodSpecification
        | K::MethodAlias
        | K::TraitMethod
        | K::ProtocolMethod
        | K::PureVirtualMethod
        | K::TypeClassMethod => SymbolKind::METHOD,
        K::Property
        | K::Getter
        | K::Setter
        | K::Accessor
        | K::StaticProperty
        | K::Subscript
        | K::Attribute => SymbolKind::PROPERTY,
        K::Field | K::StaticField | K::StaticDataMember => SymbolKind::FIELD,
        K::Constructor => SymbolKind::CONSTRUCTOR,
        K::Enum => SymbolKind::ENUM,
        K::EnumMember => SymbolKind::ENUM_MEMBER,
        K::Interface | K::Trait | K::Protocol => SymbolKind::INTERFACE,
        K::Variable
        | K::Parameter
        | K::ParameterLabel
        | K::SelfParameter
        | K::ThisParameter
        | K::StaticVariable
        | K::Value => SymbolKind::VARIABLE,
        K::Constant => SymbolKind::CONSTANT,
        K::String => SymbolKind::STRING,
        K::Number => SymbolKind::NUMBER,
        K::Boolean => SymbolKind::BOOLEAN,
        K::Array => SymbolKind::ARRAY,
        K::Object => SymbolKind::OBJECT,
        K::Key => SymbolKind::KEY,
        K::Null => SymbolKind::NULL,
        K::Struct | K::Union | K::Message => SymbolKind::STRUCT,
        K::Event | K::StaticEvent => SymbolKind::EVENT,
        K::Operator => SymbolKind::OPERATOR,
        K::Type | K::TypeAlias | K::TypeParameter | K::AssociatedType | K::TypeFamily => {
            SymbolKind::TYPE_PARAMETER
        }
        K::UnspecifiedKind
        | K::Assertion
        | K::Axiom
        | K::Concept
        | K::DataFamily
        | K::Error
        | K::Extension
        | K::Fact
        | K::Grammar
        | K::Instance
        | K::Lang
        | K::Lemma
        | K::Modifier
        | K::Pattern
        | K::Predicate
        | K::Quasiquoter
        | K::Signature
        | K::Tactic
        | K::Theorem => SymbolKind::NULL,
    }
}

/// Classify a raw `SymbolInformation.Kind` tag.
///
/// Total over every `i32`: tags unknown to this crate map to [`SymbolKind::NULL`].
#[must_use]
pub const fn classify_raw_kind(tag: i32) -> SymbolKind {
    match ScipSymbolKind::from_i32(tag) {
        Some(kind) => classify_kind(kind),
        None => SymbolKind::NULL,
    }
}

/// Builds LSP document symbols from SCIP symbol metadata.
#[derive(Debug, Clone)]
pub struct SymbolMapper {
    detail_prefix: String,
}

impl SymbolMapper {
    /// Create a mapper that prefixes details with `detail_prefix`.
    #[must_use]
    pub fn new(detail_prefix: impl Into<String>) -> Self {
        Self {
            detail_prefix: detail_prefix.into(),
        }
    }

    /// The prefix used for `DocumentSymbol.detail`.
    #[must_use]
    pub fn detail_prefix(&self) -> &str {
        &self.detail_prefix
    }

    /// Convert one symbol and its occurrence into a document symbol.
    ///
    /// The occurrence range is used for both `range` and `selection_range`.
    #[must_use]
    #[allow(deprecated)]
    pub fn document_symbol(&self, info: &SymbolInformation, occ: &Occurrence) -> DocumentSymbol {
        let range = scip_to_lsp_range(&occ.range);
        DocumentSymbol {
            name: info.display_name.clone(),
            detail: Some(format!("{}{}", self.detail_prefix, info.display_name)),
            kind: classify_raw_kind(info.kind),
            tags: None,
            deprecated: None,
            range,
            selection_range: range,
            children: None,
        }
    }

    /// Outline of a document: one symbol per definition occurrence that has
    /// metadata in the same document, in occurrence order.
    #[must_use]
    pub fn document_symbols(&self, doc: &Document) -> Vec<DocumentSymbol> {
        doc.occurrences
            .iter()
            .filter(|occ| occ.is_definition())
            .filter_map(|occ| {
                let info = doc.symbol_information(&occ.symbol);
                if info.is_none() {
                    tracing::trace!(
                        symbol = %occ.symbol,
                        document = %doc.relative_path,
                        "definition without symbol information"
                    );
                }
                info.map(|info| self.document_symbol(info, occ))
            })
            .collect()
    }
}

impl Default for SymbolMapper {
    fn default() -> Self {
        Self::new(DEFAULT_DETAIL_PREFIX)
    }
}

/// Convert one symbol and its occurrence into a document symbol using the
/// default detail prefix.
#[must_use]
pub fn symbol_information_to_document_symbol(
    info: &SymbolInformation,
    occ: &Occurrence,
) -> DocumentSymbol {
    SymbolMapper::default().document_symbol(info, occ)
}

/// Outline of a document using the default detail prefix.
#[must_use]
pub fn document_symbols(doc: &Document) -> Vec<DocumentSymbol> {
    SymbolMapper::default().document_symbols(doc)
}
