//! Casting rules for the schema notation.

use crate::ast::schema::{
    BaseTypeName, DataStructure, PropertyMember, PropertyName, SchemaElement, SchemaValue, Symbol,
    TypeAttributes, TypeDefinition, TypeName, TypeSection, TypeSpecification, ValueDefinition,
    ValueMember,
};
use crate::cast::{collection, keys, tokens, ToValue};
use crate::value::{ObjectBuilder, Value};

impl ToValue for Symbol {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(keys::LITERAL, &self.literal)
            .set(keys::VARIABLE, self.variable)
            .build()
    }
}

impl ToValue for SchemaValue {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(keys::LITERAL, &self.literal)
            .set(keys::VARIABLE, self.variable)
            .build()
    }
}

/// An empty type name is a null node; a base kind is its canonical token;
/// anything else is a named type, represented by its symbol pair.
impl ToValue for TypeName {
    fn to_value(&self) -> Value {
        if self.is_empty() {
            return Value::Null;
        }

        if self.base != BaseTypeName::Undefined {
            return Value::String(tokens::base_type(self.base).to_string());
        }

        self.symbol.to_value()
    }
}

/// At most one token, chosen by the fixed priority order in
/// [`tokens::type_attribute`].
impl ToValue for TypeAttributes {
    fn to_value(&self) -> Value {
        match tokens::type_attribute(*self) {
            Some(token) => Value::Array(vec![Value::String(token.to_string())]),
            None => Value::Array(Vec::new()),
        }
    }
}

impl ToValue for TypeSpecification {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(keys::NAME, self.name.to_value())
            .set(keys::NESTED_TYPES, collection::map_values(&self.nested_types))
            .build()
    }
}

impl ToValue for TypeDefinition {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(keys::TYPE_SPECIFICATION, self.type_specification.to_value())
            .set(keys::ATTRIBUTES, self.attributes.to_value())
            .build()
    }
}

impl ToValue for ValueDefinition {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(keys::VALUES, collection::map_values(&self.values))
            .set(keys::TYPE_DEFINITION, self.type_definition.to_value())
            .build()
    }
}

/// Literal wins over variable; neither key appears when both are empty.
impl ToValue for PropertyName {
    fn to_value(&self) -> Value {
        let mut builder = ObjectBuilder::new();

        if !self.literal.is_empty() {
            builder = builder.set(keys::LITERAL, &self.literal);
        } else if !self.variable.is_empty() {
            builder = builder.set(keys::VARIABLE, self.variable.to_value());
        }

        builder.build()
    }
}

impl ToValue for PropertyMember {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(keys::NAME, self.name.to_value())
            .set(keys::DESCRIPTION, &self.description)
            .set(keys::VALUE_DEFINITION, self.value_definition.to_value())
            .set(keys::SECTIONS, collection::map_values(&self.sections))
            .build()
    }
}

impl ToValue for ValueMember {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(keys::DESCRIPTION, &self.description)
            .set(keys::VALUE_DEFINITION, self.value_definition.to_value())
            .set(keys::SECTIONS, collection::map_values(&self.sections))
            .build()
    }
}

/// The content slot is chosen by first-non-empty among description text,
/// literal value, and member sequence; the rest are omitted entirely.
impl ToValue for TypeSection {
    fn to_value(&self) -> Value {
        let mut builder =
            ObjectBuilder::new().set(keys::CLASS, tokens::type_section_class(self.class));

        if !self.content.description.is_empty() {
            builder = builder.set(keys::CONTENT, &self.content.description);
        } else if !self.content.value.is_empty() {
            builder = builder.set(keys::CONTENT, &self.content.value);
        } else if !self.content.members.is_empty() {
            builder = builder.set(keys::CONTENT, collection::map_values(&self.content.members));
        }

        builder.build()
    }
}

/// The content field is set before the class tag; the resulting key order
/// (content, then class) is part of the output contract.
impl ToValue for SchemaElement {
    fn to_value(&self) -> Value {
        let mut builder = ObjectBuilder::new();

        let class = match self {
            SchemaElement::Property(member) => {
                builder = builder.set(keys::CONTENT, member.to_value());
                "property"
            }
            SchemaElement::Value(member) => {
                builder = builder.set(keys::CONTENT, member.to_value());
                "value"
            }
            SchemaElement::Mixin(mixin) => {
                builder = builder.set(keys::CONTENT, mixin.to_value());
                "mixin"
            }
            SchemaElement::OneOf(elements) => {
                builder = builder.set(keys::CONTENT, collection::map_values(elements));
                "oneOf"
            }
            SchemaElement::Group(elements) => {
                builder = builder.set(keys::CONTENT, collection::map_values(elements));
                "group"
            }
        };

        builder.set(keys::CLASS, class).build()
    }
}

impl ToValue for DataStructure {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(
                keys::ELEMENT,
                tokens::element_class(crate::ast::document::ElementClass::DataStructure),
            )
            .set(keys::NAME, &self.name)
            .set(keys::TYPE_DEFINITION, self.type_definition.to_value())
            .set(keys::SECTIONS, collection::map_values(&self.sections))
            .build()
    }
}
