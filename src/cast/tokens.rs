//! Canonical string tokens for the closed enumerations.
//!
//! Each function is a total, exhaustive match returning a fixed lowercase
//! token. The tokens form a durable public vocabulary: consumers parse
//! them. The `Undefined` members of the input enumerations canonicalize to
//! the empty token; nothing in this module can fault.

use crate::ast::document::{AssetRole, ElementClass};
use crate::ast::schema::{BaseTypeName, TypeAttributes, TypeSectionClass};

/// Canonical token for a document element class.
pub fn element_class(class: ElementClass) -> &'static str {
    match class {
        ElementClass::Category => "category",
        ElementClass::Copy => "copy",
        ElementClass::Resource => "resource",
        ElementClass::DataStructure => "dataStructure",
        ElementClass::Asset => "asset",
        ElementClass::Undefined => "",
    }
}

/// Canonical token for a schema base type.
pub fn base_type(base: BaseTypeName) -> &'static str {
    match base {
        BaseTypeName::Boolean => "boolean",
        BaseTypeName::String => "string",
        BaseTypeName::Number => "number",
        BaseTypeName::Array => "array",
        BaseTypeName::Enum => "enum",
        BaseTypeName::Object => "object",
        BaseTypeName::Undefined => "",
    }
}

/// Canonical token for a type-section class.
pub fn type_section_class(class: TypeSectionClass) -> &'static str {
    match class {
        TypeSectionClass::BlockDescription => "blockDescription",
        TypeSectionClass::MemberType => "memberType",
        TypeSectionClass::Sample => "sample",
        TypeSectionClass::Default => "default",
        TypeSectionClass::Undefined => "",
    }
}

/// Canonical token for the role a payload asset plays.
pub fn asset_role(role: AssetRole) -> &'static str {
    match role {
        AssetRole::BodyExample => "bodyExample",
        AssetRole::BodySchema => "bodySchema",
    }
}

/// The single attribute token a bit-set reports, if any.
///
/// Bits are tested in the fixed priority order required, optional,
/// default, sample, fixed, and only the first match is reported even when
/// several bits are set. Consumers depend on this single-winner policy;
/// it must not be "fixed" to report all bits.
pub fn type_attribute(attributes: TypeAttributes) -> Option<&'static str> {
    if attributes.contains(TypeAttributes::REQUIRED) {
        Some("required")
    } else if attributes.contains(TypeAttributes::OPTIONAL) {
        Some("optional")
    } else if attributes.contains(TypeAttributes::DEFAULT) {
        Some("default")
    } else if attributes.contains(TypeAttributes::SAMPLE) {
        Some("sample")
    } else if attributes.contains(TypeAttributes::FIXED) {
        Some("fixed")
    } else {
        None
    }
}
