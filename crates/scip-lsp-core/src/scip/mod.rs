//! SCIP (code indexing protocol) entities.
//!
//! Only the subset of the protocol the mapper reads is modelled here.
//! Values are owned by the indexing backend and treated as read-only.

mod kind;
mod model;
mod range;

pub use kind::{ScipSymbolKind, UnknownSymbolKind};
pub use model::{Document, Occurrence, SymbolInformation, SymbolRole};
pub use range::{RangeError, ScipPosition, ScipRange};
