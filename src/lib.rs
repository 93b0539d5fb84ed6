//! Treecast: casts typed API description documents into a canonical,
//! format-agnostic value tree.
//!
//! The pipeline is parser -> typed AST -> [`cast_document`] -> generic
//! value tree -> renderer. This crate owns the middle step: a pure,
//! type-directed transduction from the document AST ([`ast`]) to a tree of
//! five node kinds ([`value`]) that `serde_json`/`serde_yaml` can emit
//! without knowing the source grammar.

pub use crate::cast::{cast_document, ToValue, SERIALIZATION_VERSION};
pub use crate::error::CastError;
pub use crate::value::{Object, ObjectBuilder, Value};

pub mod ast;
pub mod cast;
pub mod cli;
pub mod error;
pub mod value;
