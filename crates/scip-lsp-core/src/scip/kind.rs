//! SCIP symbol kinds.
//!
//! Mirrors `SymbolInformation.Kind` from the SCIP protobuf schema, including
//! the numeric tag each kind carries on the wire.

use std::fmt;
use std::str::FromStr;

macro_rules! scip_symbol_kinds {
    ($($(#[$doc:meta])* $name:ident = $tag:literal,)+) => {
        /// Kind of a SCIP symbol, as reported by an indexer.
        ///
        /// Undocumented variants mean exactly what the same-named SCIP kind means.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum ScipSymbolKind {
            $($(#[$doc])* $name,)+
        }

        impl ScipSymbolKind {
            /// Every kind known to this crate, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$name,)+];

            /// Decode a protobuf tag. Returns `None` for tags this crate does not know.
            #[must_use]
            pub const fn from_i32(tag: i32) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$name),)+
                    _ => None,
                }
            }

            /// The protobuf tag of this kind.
            #[must_use]
            pub const fn as_i32(self) -> i32 {
                match self {
                    $(Self::$name => $tag,)+
                }
            }

            /// The protobuf name of this kind.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)+
                }
            }
        }

        impl FromStr for ScipSymbolKind {
            type Err = UnknownSymbolKind;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($name) => Ok(Self::$name),)+
                    _ => Err(UnknownSymbolKind(s.to_string())),
                }
            }
        }
    };
}

scip_symbol_kinds! {
    /// Kind was not set by the indexer.
    #[default]
    UnspecifiedKind = 0,
    AbstractMethod = 66,
    Accessor = 72,
    Array = 1,
    Assertion = 2,
    AssociatedType = 3,
    Attribute = 4,
    Axiom = 5,
    Boolean = 6,
    Class = 7,
    Concept = 86,
    Constant = 8,
    Constructor = 9,
    /// Solidity contract.
    Contract = 62,
    DataFamily = 10,
    /// C# delegate.
    Delegate = 73,
    Enum = 11,
    EnumMember = 12,
    Error = 63,
    Event = 13,
    Extension = 84,
    Fact = 14,
    Field = 15,
    File = 16,
    Function = 17,
    Getter = 18,
    Grammar = 19,
    Instance = 20,
    Interface = 21,
    Key = 22,
    Lang = 23,
    Lemma = 24,
    Library = 64,
    Macro = 25,
    Method = 26,
    MethodAlias = 74,
    /// Go method with an explicit receiver.
    MethodReceiver = 27,
    MethodSpecification = 67,
    /// Protocol Buffers message.
    Message = 28,
    Mixin = 85,
    Modifier = 65,
    Module = 29,
    Namespace = 30,
    Null = 31,
    Number = 32,
    Object = 33,
    Operator = 34,
    Package = 35,
    PackageObject = 36,
    Parameter = 37,
    ParameterLabel = 38,
    Pattern = 39,
    Predicate = 40,
    Property = 41,
    Protocol = 42,
    ProtocolMethod = 68,
    PureVirtualMethod = 69,
    Quasiquoter = 43,
    SelfParameter = 44,
    Setter = 45,
    Signature = 46,
    /// Ruby singleton class.
    SingletonClass = 75,
    /// Ruby singleton method.
    SingletonMethod = 76,
    StaticDataMember = 77,
    StaticEvent = 78,
    StaticField = 79,
    StaticMethod = 80,
    StaticProperty = 81,
    StaticVariable = 82,
    String = 48,
    Struct = 49,
    Subscript = 47,
    Tactic = 50,
    Theorem = 51,
    ThisParameter = 52,
    Trait = 53,
    TraitMethod = 70,
    Type = 54,
    TypeAlias = 55,
    /// Haskell type class.
    TypeClass = 56,
    TypeClassMethod = 71,
    TypeFamily = 57,
    TypeParameter = 58,
    Union = 59,
    Value = 60,
    Variable = 61,
}

impl fmt::Display for ScipSymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kind name that is not part of the SCIP schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown SCIP symbol kind: {0}")]
pub struct UnknownSymbolKind(pub String);
