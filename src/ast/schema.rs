//! Schema-notation AST: the embedded mini-language for data shapes.
//!
//! Requests, responses, and resources may carry a data-shape description
//! (named types, property/value members, nested sections). The notation is
//! carried structurally and never validated for internal consistency.

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// A literal plus a variable-placeholder flag.
///
/// `variable` marks the literal as a placeholder name rather than a fixed
/// value. An empty literal with the flag unset means the symbol is absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbol {
    pub literal: String,
    pub variable: bool,
}

impl Symbol {
    pub fn is_empty(&self) -> bool {
        self.literal.is_empty() && !self.variable
    }
}

/// A literal value in a value definition; same shape as [`Symbol`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaValue {
    pub literal: String,
    pub variable: bool,
}

/// The base kinds a type name can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaseTypeName {
    #[default]
    Undefined,
    Boolean,
    String,
    Number,
    Array,
    Enum,
    Object,
}

/// A type name: either one of the base kinds or a named (custom) type
/// carried as a symbol.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeName {
    pub base: BaseTypeName,
    pub symbol: Symbol,
}

impl TypeName {
    pub fn is_empty(&self) -> bool {
        self.base == BaseTypeName::Undefined && self.symbol.is_empty()
    }
}

/// Bit-set of type attributes.
///
/// Several bits may be set at once in the input; the canonical output
/// reports at most one of them, in the fixed priority order required /
/// optional / default / sample / fixed. That single-winner policy is part
/// of the external contract and is preserved verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeAttributes(pub u8);

impl TypeAttributes {
    pub const REQUIRED: TypeAttributes = TypeAttributes(1);
    pub const OPTIONAL: TypeAttributes = TypeAttributes(1 << 1);
    pub const DEFAULT: TypeAttributes = TypeAttributes(1 << 2);
    pub const SAMPLE: TypeAttributes = TypeAttributes(1 << 3);
    pub const FIXED: TypeAttributes = TypeAttributes(1 << 4);

    pub fn contains(self, flag: TypeAttributes) -> bool {
        self.0 & flag.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for TypeAttributes {
    type Output = TypeAttributes;

    fn bitor(self, rhs: TypeAttributes) -> TypeAttributes {
        TypeAttributes(self.0 | rhs.0)
    }
}

/// A type name plus the type names nested under it (e.g. array element
/// types).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeSpecification {
    pub name: TypeName,
    pub nested_types: Vec<TypeName>,
}

impl TypeSpecification {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.nested_types.is_empty()
    }
}

/// A type specification plus its attribute bit-set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeDefinition {
    pub type_specification: TypeSpecification,
    pub attributes: TypeAttributes,
}

impl TypeDefinition {
    pub fn is_empty(&self) -> bool {
        self.type_specification.is_empty() && self.attributes.is_empty()
    }
}

/// An ordered list of literal values plus the type they belong to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueDefinition {
    pub values: Vec<SchemaValue>,
    pub type_definition: TypeDefinition,
}

/// A property's name: either a literal string or a variable-name
/// placeholder. The canonical output carries at most one of the two.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyName {
    pub literal: String,
    pub variable: Symbol,
}

/// A named member of an object type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyMember {
    pub name: PropertyName,
    pub description: String,
    pub value_definition: ValueDefinition,
    pub sections: Vec<TypeSection>,
}

/// An unnamed member of an array or enum type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueMember {
    pub description: String,
    pub value_definition: ValueDefinition,
    pub sections: Vec<TypeSection>,
}

/// A mixin pulls another type's members in by reference to its definition.
pub type Mixin = TypeDefinition;

/// One element of a type section's member sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaElement {
    Property(PropertyMember),
    Value(ValueMember),
    Mixin(Mixin),
    OneOf(Vec<SchemaElement>),
    Group(Vec<SchemaElement>),
}

/// The class tag of a type section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeSectionClass {
    #[default]
    Undefined,
    BlockDescription,
    MemberType,
    Sample,
    Default,
}

/// The content slots of a type section. Exactly one is populated in
/// well-formed input; the casting rule picks the first non-empty slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeSectionContent {
    pub description: String,
    pub value: String,
    pub members: Vec<SchemaElement>,
}

/// One section of a data structure's body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeSection {
    pub class: TypeSectionClass,
    pub content: TypeSectionContent,
}

/// A named data shape: name, type definition, and body sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataStructure {
    pub name: String,
    pub type_definition: TypeDefinition,
    pub sections: Vec<TypeSection>,
}

impl DataStructure {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.type_definition.is_empty() && self.sections.is_empty()
    }
}
