//! Document-level AST: the API description itself.

use serde::{Deserialize, Serialize};

use crate::ast::schema::DataStructure;

/// A named string pair; used for document metadata and payload headers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValuePair {
    pub name: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An opaque identifier pointing at a named entity elsewhere in the
/// document. Carried through verbatim; never resolved here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    pub id: String,
}

/// The class of a document element.
///
/// `Undefined` covers degenerate input from an upstream parser; it
/// canonicalizes to the empty token rather than faulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementClass {
    #[default]
    Undefined,
    Category,
    Copy,
    Resource,
    DataStructure,
    Asset,
}

/// The sub-kind a category element carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKind {
    #[default]
    Undefined,
    ResourceGroup,
    DataStructures,
}

/// The role a payload asset plays. Assets with these roles are synthesized
/// by the casting layer around payload body and schema text; they never
/// appear in parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRole {
    BodyExample,
    BodySchema,
}

/// One entry in a document's flat element sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentElement {
    #[serde(default)]
    pub name: String,
    pub kind: ElementKind,
}

impl DocumentElement {
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// The payload of a document element, tagged by class.
///
/// A category nests its own element sequence; a copy carries free text; an
/// asset element carries nothing (the class only ever holds content inside
/// the payload wrappers the casting layer builds itself).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Category {
        #[serde(default)]
        kind: CategoryKind,
        #[serde(default)]
        children: Vec<DocumentElement>,
    },
    Copy(String),
    Resource(Resource),
    DataStructure(DataStructure),
    Asset,
}

impl ElementKind {
    /// The element class of this payload.
    pub fn class(&self) -> ElementClass {
        match self {
            ElementKind::Category { .. } => ElementClass::Category,
            ElementKind::Copy(_) => ElementClass::Copy,
            ElementKind::Resource(_) => ElementClass::Resource,
            ElementKind::DataStructure(_) => ElementClass::DataStructure,
            ElementKind::Asset => ElementClass::Asset,
        }
    }
}

/// Whether a parameter was declared required or optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterUse {
    #[default]
    Undefined,
    Required,
    Optional,
}

/// A URI template or query parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub usage: ParameterUse,
    pub default_value: String,
    pub example_value: String,
    pub values: Vec<String>,
}

/// A request or response message description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    pub reference: Reference,
    pub name: String,
    pub description: String,
    pub headers: Vec<KeyValuePair>,
    pub body: String,
    pub schema: String,
    pub attributes: DataStructure,
}

/// One complete request/response exchange documented under an action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionExample {
    pub name: String,
    pub description: String,
    pub requests: Vec<Payload>,
    pub responses: Vec<Payload>,
}

/// An HTTP action on a resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Action {
    pub name: String,
    pub description: String,
    pub method: String,
    pub parameters: Vec<Parameter>,
    pub relation: String,
    pub uri_template: String,
    pub attributes: DataStructure,
    pub examples: Vec<TransactionExample>,
}

/// A resource: a URI template plus the actions defined on it.
///
/// An empty-named `model` means the resource has no model; likewise an
/// empty `attributes` data structure means none was declared.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    pub description: String,
    pub uri_template: String,
    pub model: DataStructure,
    pub parameters: Vec<Parameter>,
    pub actions: Vec<Action>,
    pub attributes: DataStructure,
}

/// The document root.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub metadata: Vec<KeyValuePair>,
    pub name: String,
    pub description: String,
    pub element: ElementClass,
    pub content: Vec<DocumentElement>,
}
