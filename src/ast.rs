//! The typed input model.
//!
//! This is the document AST produced by an upstream parser: one API
//! description (metadata, resources, actions, transaction examples,
//! payloads) plus the embedded schema notation used to describe data
//! shapes. The casting layer consumes it read-only.
//!
//! Two conventions hold everywhere in this module:
//!
//! - Optionality is emptiness. There is no separate "is present" flag
//!   anywhere in the model; an empty string or empty sequence is the sole
//!   signal that a field is absent. `is_empty` predicates on the composite
//!   types encode exactly the checks the casting rules rely on.
//! - The serde derives define the parser's JSON wire form (camelCase
//!   field names, omitted-field defaults). That wire form is the input
//!   contract of the CLI and is distinct from the canonical tree this
//!   crate produces.

pub mod document;
pub mod schema;

pub use document::{
    Action, AssetRole, CategoryKind, Document, DocumentElement, ElementClass, ElementKind,
    KeyValuePair, Parameter, ParameterUse, Payload, Reference, Resource, TransactionExample,
};
pub use schema::{
    BaseTypeName, DataStructure, Mixin, PropertyMember, PropertyName, SchemaElement, SchemaValue,
    Symbol, TypeAttributes, TypeDefinition, TypeName, TypeSection, TypeSectionClass,
    TypeSectionContent, TypeSpecification, ValueDefinition, ValueMember,
};
