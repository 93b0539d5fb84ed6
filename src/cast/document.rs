//! Casting rules for document entities and the root assembler.

use crate::ast::document::{
    Action, AssetRole, CategoryKind, Document, DocumentElement, ElementClass, ElementKind,
    KeyValuePair, Parameter, ParameterUse, Payload, Reference, Resource, TransactionExample,
};
use crate::cast::{collection, keys, tokens, ToValue};
use crate::value::{ObjectBuilder, Value};

/// Version tag of the canonical tree layout, emitted at the root under
/// `_version`. Bumped whenever any output shape or token changes.
pub const SERIALIZATION_VERSION: &str = "4.0";

impl ToValue for KeyValuePair {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(keys::NAME, &self.name)
            .set(keys::VALUE, &self.value)
            .build()
    }
}

impl ToValue for Reference {
    fn to_value(&self) -> Value {
        ObjectBuilder::new().set(keys::ID, &self.id).build()
    }
}

impl ToValue for Parameter {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(keys::NAME, &self.name)
            .set(keys::DESCRIPTION, &self.description)
            .set(keys::TYPE, &self.type_name)
            .set(keys::REQUIRED, self.usage != ParameterUse::Optional)
            .set(keys::DEFAULT, &self.default_value)
            .set(keys::EXAMPLE, &self.example_value)
            .set(
                keys::VALUES,
                collection::map(&self.values, |value| {
                    ObjectBuilder::new().set(keys::VALUE, value).build()
                }),
            )
            .build()
    }
}

/// Wraps asset text as a standalone asset element carrying its role.
fn asset(text: &str, role: AssetRole) -> Value {
    ObjectBuilder::new()
        .set(keys::ELEMENT, tokens::element_class(ElementClass::Asset))
        .set(
            keys::ATTRIBUTES,
            ObjectBuilder::new()
                .set(keys::ROLE, tokens::asset_role(role))
                .build(),
        )
        .set(keys::CONTENT, text)
        .build()
}

/// The reference field appears only when its identifier is non-empty;
/// name, description, headers, body, and schema always appear, empty or
/// not. The content array collects the attributes data structure and the
/// body/schema asset wrappers, each included only when non-empty.
impl ToValue for Payload {
    fn to_value(&self) -> Value {
        let mut builder = ObjectBuilder::new();

        if !self.reference.id.is_empty() {
            builder = builder.set(keys::REFERENCE, self.reference.to_value());
        }

        builder = builder
            .set(keys::NAME, &self.name)
            .set(keys::DESCRIPTION, &self.description)
            .set(keys::HEADERS, collection::map_values(&self.headers))
            .set(keys::BODY, &self.body)
            .set(keys::SCHEMA, &self.schema);

        let mut content = Vec::new();

        if !self.attributes.is_empty() {
            content.push(self.attributes.to_value());
        }

        if !self.body.is_empty() {
            content.push(asset(&self.body, AssetRole::BodyExample));
        }

        if !self.schema.is_empty() {
            content.push(asset(&self.schema, AssetRole::BodySchema));
        }

        builder.set(keys::CONTENT, content).build()
    }
}

impl ToValue for TransactionExample {
    fn to_value(&self) -> Value {
        ObjectBuilder::new()
            .set(keys::NAME, &self.name)
            .set(keys::DESCRIPTION, &self.description)
            .set(keys::REQUESTS, collection::map_values(&self.requests))
            .set(keys::RESPONSES, collection::map_values(&self.responses))
            .build()
    }
}

/// The attributes key holds the link relation and URI template override;
/// the action's attributes data structure, when non-empty, goes into the
/// content array instead.
impl ToValue for Action {
    fn to_value(&self) -> Value {
        let mut content = Vec::new();

        if !self.attributes.is_empty() {
            content.push(self.attributes.to_value());
        }

        ObjectBuilder::new()
            .set(keys::NAME, &self.name)
            .set(keys::DESCRIPTION, &self.description)
            .set(keys::METHOD, &self.method)
            .set(keys::PARAMETERS, collection::map_values(&self.parameters))
            .set(
                keys::ATTRIBUTES,
                ObjectBuilder::new()
                    .set(keys::RELATION, &self.relation)
                    .set(keys::URI_TEMPLATE, &self.uri_template)
                    .build(),
            )
            .set(keys::CONTENT, content)
            .set(keys::EXAMPLES, collection::map_values(&self.examples))
            .build()
    }
}

/// The model field is null when the associated data structure is unnamed;
/// a non-empty attributes data structure goes into the content array.
impl ToValue for Resource {
    fn to_value(&self) -> Value {
        let model = if self.model.name.is_empty() {
            Value::Null
        } else {
            self.model.to_value()
        };

        let mut content = Vec::new();

        if !self.attributes.is_empty() {
            content.push(self.attributes.to_value());
        }

        ObjectBuilder::new()
            .set(keys::ELEMENT, tokens::element_class(ElementClass::Resource))
            .set(keys::NAME, &self.name)
            .set(keys::DESCRIPTION, &self.description)
            .set(keys::URI_TEMPLATE, &self.uri_template)
            .set(keys::MODEL, model)
            .set(keys::PARAMETERS, collection::map_values(&self.parameters))
            .set(keys::ACTIONS, collection::map_values(&self.actions))
            .set(keys::CONTENT, content)
            .build()
    }
}

/// Resource and data-structure elements cast as their payload entity
/// alone; the remaining classes get the element envelope (class token,
/// name attribute when present, class-specific content).
impl ToValue for DocumentElement {
    fn to_value(&self) -> Value {
        match &self.kind {
            ElementKind::Resource(resource) => resource.to_value(),
            ElementKind::DataStructure(data_structure) => data_structure.to_value(),
            kind => {
                let mut builder =
                    ObjectBuilder::new().set(keys::ELEMENT, tokens::element_class(kind.class()));

                if !self.name.is_empty() {
                    builder = builder.set(
                        keys::ATTRIBUTES,
                        ObjectBuilder::new().set(keys::NAME, &self.name).build(),
                    );
                }

                match kind {
                    ElementKind::Copy(text) => builder = builder.set(keys::CONTENT, text),
                    ElementKind::Category { children, .. } => {
                        builder = builder.set(keys::CONTENT, collection::map_values(children));
                    }
                    // An asset element carries no content of its own.
                    ElementKind::Asset => {}
                    // Handled by the early arms above.
                    ElementKind::Resource(_) | ElementKind::DataStructure(_) => {}
                }

                builder.build()
            }
        }
    }
}

// ============================================================================
// RESOURCE GROUPS - derived view over the flat element sequence
// ============================================================================

/// A category element marked as a resource group.
fn is_resource_group(element: &DocumentElement) -> bool {
    matches!(
        &element.kind,
        ElementKind::Category {
            kind: CategoryKind::ResourceGroup,
            ..
        }
    )
}

/// Rebuilds one named group from a category element: the description is
/// every copy child's text joined with a blank line, the resources array
/// is every resource child in order. Children of any other class are left
/// to the undifferentiated root content.
fn resource_group(group: &DocumentElement) -> Value {
    let builder = ObjectBuilder::new().set(keys::NAME, &group.name);

    let mut description = String::new();
    let mut resources = Vec::new();

    if let ElementKind::Category { children, .. } = &group.kind {
        for child in children {
            match &child.kind {
                ElementKind::Resource(resource) => resources.push(resource.to_value()),
                ElementKind::Copy(text) if !text.is_empty() => {
                    if !description.is_empty() {
                        description.push_str("\n\n");
                    }
                    description.push_str(text);
                }
                _ => {}
            }
        }
    }

    builder
        .set(keys::DESCRIPTION, description)
        .set(keys::RESOURCES, resources)
        .build()
}

/// Assembles the canonical root object for a document.
///
/// Top-level key order is fixed: `_version`, `metadata`, `name`,
/// `description`, `element`, `resourceGroups`, `content`.
pub fn cast_document(document: &Document) -> Value {
    ObjectBuilder::new()
        .set(keys::VERSION, SERIALIZATION_VERSION)
        .set(keys::METADATA, collection::map_values(&document.metadata))
        .set(keys::NAME, &document.name)
        .set(keys::DESCRIPTION, &document.description)
        .set(keys::ELEMENT, tokens::element_class(document.element))
        .set(
            keys::RESOURCE_GROUPS,
            collection::map_filtered(&document.content, resource_group, is_resource_group),
        )
        .set(keys::CONTENT, collection::map_values(&document.content))
        .build()
}

impl ToValue for Document {
    fn to_value(&self) -> Value {
        cast_document(self)
    }
}
