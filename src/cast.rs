//! The casting layer: typed AST in, generic value tree out.
//!
//! One conversion rule exists per AST type, expressed as a [`ToValue`]
//! impl; rules recurse into nested entities through the trait. Dispatch is
//! static and keyed by the input type, and the tagged variants are matched
//! exhaustively, so an AST variant without a rule is a compile error, not
//! a runtime fallback.
//!
//! The whole transduction is a pure function of its input: no I/O, no
//! shared state, no suspension points. Casting the same document twice
//! yields structurally identical trees, key order included.

pub mod collection;
pub mod document;
pub mod keys;
pub mod schema;
pub mod tokens;

pub use document::{cast_document, SERIALIZATION_VERSION};

use crate::value::Value;

/// Conversion of one AST type into its canonical tree node.
pub trait ToValue {
    fn to_value(&self) -> Value;
}
