//! Unit tests for the per-entity casting rules: canonical tokens,
//! presence policies, and the schema-notation conversions.

use treecast::ast::{
    Action, AssetRole, BaseTypeName, DataStructure, ElementClass, KeyValuePair, Parameter,
    ParameterUse, Payload, PropertyMember, PropertyName, Reference, Resource, SchemaElement,
    Symbol, TypeAttributes, TypeName, TypeSection, TypeSectionClass, TypeSpecification,
    ValueMember,
};
use treecast::cast::{tokens, ToValue};
use treecast::value::{Object, Value};

fn as_object(value: &Value) -> &Object {
    value.as_object().expect("expected an object node")
}

fn key_order(value: &Value) -> Vec<String> {
    as_object(value).keys().map(str::to_string).collect()
}

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn test_element_class_tokens() {
        assert_eq!(tokens::element_class(ElementClass::Category), "category");
        assert_eq!(tokens::element_class(ElementClass::Copy), "copy");
        assert_eq!(tokens::element_class(ElementClass::Resource), "resource");
        assert_eq!(
            tokens::element_class(ElementClass::DataStructure),
            "dataStructure"
        );
        assert_eq!(tokens::element_class(ElementClass::Asset), "asset");
    }

    #[test]
    fn test_undefined_canonicalizes_to_empty_never_faults() {
        assert_eq!(tokens::element_class(ElementClass::Undefined), "");
        assert_eq!(tokens::base_type(BaseTypeName::Undefined), "");
        assert_eq!(tokens::type_section_class(TypeSectionClass::Undefined), "");
    }

    #[test]
    fn test_base_type_tokens() {
        assert_eq!(tokens::base_type(BaseTypeName::Boolean), "boolean");
        assert_eq!(tokens::base_type(BaseTypeName::String), "string");
        assert_eq!(tokens::base_type(BaseTypeName::Number), "number");
        assert_eq!(tokens::base_type(BaseTypeName::Array), "array");
        assert_eq!(tokens::base_type(BaseTypeName::Enum), "enum");
        assert_eq!(tokens::base_type(BaseTypeName::Object), "object");
    }

    #[test]
    fn test_type_section_class_tokens() {
        assert_eq!(
            tokens::type_section_class(TypeSectionClass::BlockDescription),
            "blockDescription"
        );
        assert_eq!(
            tokens::type_section_class(TypeSectionClass::MemberType),
            "memberType"
        );
        assert_eq!(tokens::type_section_class(TypeSectionClass::Sample), "sample");
        assert_eq!(tokens::type_section_class(TypeSectionClass::Default), "default");
    }

    #[test]
    fn test_asset_role_tokens() {
        assert_eq!(tokens::asset_role(AssetRole::BodyExample), "bodyExample");
        assert_eq!(tokens::asset_role(AssetRole::BodySchema), "bodySchema");
    }
}

#[cfg(test)]
mod type_attribute_tests {
    use super::*;

    #[test]
    fn test_single_bits() {
        assert_eq!(tokens::type_attribute(TypeAttributes::REQUIRED), Some("required"));
        assert_eq!(tokens::type_attribute(TypeAttributes::OPTIONAL), Some("optional"));
        assert_eq!(tokens::type_attribute(TypeAttributes::DEFAULT), Some("default"));
        assert_eq!(tokens::type_attribute(TypeAttributes::SAMPLE), Some("sample"));
        assert_eq!(tokens::type_attribute(TypeAttributes::FIXED), Some("fixed"));
        assert_eq!(tokens::type_attribute(TypeAttributes::default()), None);
    }

    #[test]
    fn test_priority_order_reports_only_first_match() {
        assert_eq!(
            tokens::type_attribute(TypeAttributes::REQUIRED | TypeAttributes::FIXED),
            Some("required")
        );
        assert_eq!(
            tokens::type_attribute(TypeAttributes::OPTIONAL | TypeAttributes::DEFAULT),
            Some("optional")
        );
        assert_eq!(
            tokens::type_attribute(TypeAttributes::SAMPLE | TypeAttributes::FIXED),
            Some("sample")
        );
    }

    #[test]
    fn test_attribute_array_has_at_most_one_token() {
        let all = TypeAttributes::REQUIRED
            | TypeAttributes::OPTIONAL
            | TypeAttributes::DEFAULT
            | TypeAttributes::SAMPLE
            | TypeAttributes::FIXED;
        let array = all.to_value();
        assert_eq!(
            array.as_array().unwrap(),
            &[Value::String("required".to_string())][..]
        );

        let none = TypeAttributes::default().to_value();
        assert_eq!(none.as_array().unwrap().len(), 0);
    }
}

#[cfg(test)]
mod type_name_tests {
    use super::*;

    #[test]
    fn test_empty_type_name_is_null() {
        assert!(TypeName::default().to_value().is_null());
    }

    #[test]
    fn test_base_kind_is_canonical_token() {
        let name = TypeName {
            base: BaseTypeName::Object,
            ..TypeName::default()
        };
        assert_eq!(name.to_value().as_str(), Some("object"));
    }

    #[test]
    fn test_named_type_is_symbol_pair() {
        let name = TypeName {
            base: BaseTypeName::Undefined,
            symbol: Symbol {
                literal: "Widget".to_string(),
                variable: false,
            },
        };

        let node = name.to_value();
        let object = as_object(&node);
        assert_eq!(object.get("literal").and_then(Value::as_str), Some("Widget"));
        assert_eq!(object.get("variable").and_then(Value::as_bool), Some(false));
    }
}

#[cfg(test)]
mod property_name_tests {
    use super::*;

    #[test]
    fn test_literal_only() {
        let name = PropertyName {
            literal: "id".to_string(),
            ..PropertyName::default()
        };

        let node = name.to_value();
        assert_eq!(key_order(&node), ["literal"]);
    }

    #[test]
    fn test_variable_only() {
        let name = PropertyName {
            variable: Symbol {
                literal: "key".to_string(),
                variable: true,
            },
            ..PropertyName::default()
        };

        let node = name.to_value();
        assert_eq!(key_order(&node), ["variable"]);
    }

    #[test]
    fn test_literal_wins_over_variable() {
        let name = PropertyName {
            literal: "id".to_string(),
            variable: Symbol {
                literal: "key".to_string(),
                variable: true,
            },
        };

        let node = name.to_value();
        assert_eq!(key_order(&node), ["literal"]);
    }

    #[test]
    fn test_neither_yields_empty_object() {
        let node = PropertyName::default().to_value();
        assert!(as_object(&node).is_empty());
    }
}

#[cfg(test)]
mod type_section_tests {
    use super::*;

    fn section_with(description: &str, value: &str, members: Vec<SchemaElement>) -> TypeSection {
        let mut section = TypeSection {
            class: TypeSectionClass::MemberType,
            ..TypeSection::default()
        };
        section.content.description = description.to_string();
        section.content.value = value.to_string();
        section.content.members = members;
        section
    }

    #[test]
    fn test_description_slot_wins() {
        let section = section_with("text", "literal", vec![member()]);
        let node = section.to_value();
        assert_eq!(key_order(&node), ["class", "content"]);
        assert_eq!(
            as_object(&node).get("content").and_then(Value::as_str),
            Some("text")
        );
    }

    #[test]
    fn test_value_slot_when_no_description() {
        let section = section_with("", "literal", vec![member()]);
        let node = section.to_value();
        assert_eq!(
            as_object(&node).get("content").and_then(Value::as_str),
            Some("literal")
        );
    }

    #[test]
    fn test_member_slot_when_nothing_else() {
        let section = section_with("", "", vec![member()]);
        let node = section.to_value();
        assert_eq!(
            as_object(&node)
                .get("content")
                .and_then(Value::as_array)
                .map(<[Value]>::len),
            Some(1)
        );
    }

    #[test]
    fn test_all_slots_empty_omits_content() {
        let section = section_with("", "", Vec::new());
        let node = section.to_value();
        assert_eq!(key_order(&node), ["class"]);
    }

    fn member() -> SchemaElement {
        SchemaElement::Value(ValueMember::default())
    }
}

#[cfg(test)]
mod schema_element_tests {
    use super::*;

    #[test]
    fn test_class_tokens_per_variant() {
        let cases = [
            (SchemaElement::Property(PropertyMember::default()), "property"),
            (SchemaElement::Value(ValueMember::default()), "value"),
            (SchemaElement::Mixin(Default::default()), "mixin"),
            (SchemaElement::OneOf(Vec::new()), "oneOf"),
            (SchemaElement::Group(Vec::new()), "group"),
        ];

        for (element, expected) in cases {
            let node = element.to_value();
            assert_eq!(
                as_object(&node).get("class").and_then(Value::as_str),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_content_key_precedes_class_key() {
        let node = SchemaElement::Value(ValueMember::default()).to_value();
        assert_eq!(key_order(&node), ["content", "class"]);
    }

    #[test]
    fn test_one_of_content_is_a_sequence() {
        let node = SchemaElement::OneOf(vec![
            SchemaElement::Value(ValueMember::default()),
            SchemaElement::Value(ValueMember::default()),
        ])
        .to_value();

        assert_eq!(
            as_object(&node)
                .get("content")
                .and_then(Value::as_array)
                .map(<[Value]>::len),
            Some(2)
        );
    }
}

#[cfg(test)]
mod payload_tests {
    use super::*;

    #[test]
    fn test_everything_empty_yields_empty_content() {
        let node = Payload::default().to_value();
        let object = as_object(&node);

        assert_eq!(
            key_order(&node),
            ["name", "description", "headers", "body", "schema", "content"]
        );
        assert_eq!(
            object.get("content").and_then(Value::as_array).map(<[Value]>::len),
            Some(0)
        );
    }

    #[test]
    fn test_reference_appears_only_when_set() {
        let payload = Payload {
            reference: Reference {
                id: "Widget Model".to_string(),
            },
            ..Payload::default()
        };

        let node = payload.to_value();
        assert_eq!(key_order(&node)[0], "reference");
        let reference = as_object(&node).get("reference").unwrap();
        assert_eq!(
            as_object(reference).get("id").and_then(Value::as_str),
            Some("Widget Model")
        );
    }

    #[test]
    fn test_body_adds_one_body_example_asset() {
        let payload = Payload {
            body: "{}".to_string(),
            ..Payload::default()
        };

        let content = payload.to_value();
        let content = as_object(&content).get("content").unwrap().clone();
        let entries = content.as_array().unwrap();
        assert_eq!(entries.len(), 1);

        let asset = as_object(&entries[0]);
        assert_eq!(asset.get("element").and_then(Value::as_str), Some("asset"));
        assert_eq!(asset.get("content").and_then(Value::as_str), Some("{}"));
        let attributes = as_object(asset.get("attributes").unwrap());
        assert_eq!(
            attributes.get("role").and_then(Value::as_str),
            Some("bodyExample")
        );
    }

    #[test]
    fn test_schema_asset_is_independent_of_body() {
        let payload = Payload {
            schema: "{\"type\":\"object\"}".to_string(),
            ..Payload::default()
        };

        let node = payload.to_value();
        let content = as_object(&node).get("content").unwrap();
        let entries = content.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        let attributes = as_object(as_object(&entries[0]).get("attributes").unwrap());
        assert_eq!(
            attributes.get("role").and_then(Value::as_str),
            Some("bodySchema")
        );
    }

    #[test]
    fn test_content_order_attributes_body_schema() {
        let payload = Payload {
            body: "body".to_string(),
            schema: "schema".to_string(),
            attributes: DataStructure {
                name: "Widget".to_string(),
                ..DataStructure::default()
            },
            ..Payload::default()
        };

        let node = payload.to_value();
        let content = as_object(&node).get("content").unwrap();
        let entries = content.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            as_object(&entries[0]).get("element").and_then(Value::as_str),
            Some("dataStructure")
        );
        let roles: Vec<_> = entries[1..]
            .iter()
            .map(|entry| {
                as_object(as_object(entry).get("attributes").unwrap())
                    .get("role")
                    .and_then(Value::as_str)
                    .unwrap()
                    .to_string()
            })
            .collect();
        assert_eq!(roles, ["bodyExample", "bodySchema"]);
    }
}

#[cfg(test)]
mod parameter_tests {
    use super::*;

    #[test]
    fn test_required_flag_follows_usage() {
        let required = Parameter {
            usage: ParameterUse::Required,
            ..Parameter::default()
        };
        let optional = Parameter {
            usage: ParameterUse::Optional,
            ..Parameter::default()
        };
        let unspecified = Parameter::default();

        let flag = |p: &Parameter| {
            as_object(&p.to_value())
                .get("required")
                .and_then(Value::as_bool)
                .unwrap()
        };

        assert!(flag(&required));
        assert!(!flag(&optional));
        assert!(flag(&unspecified));
    }

    #[test]
    fn test_allowed_values_wrap_as_value_objects() {
        let parameter = Parameter {
            values: vec!["red".to_string(), "blue".to_string()],
            ..Parameter::default()
        };

        let node = parameter.to_value();
        let values = as_object(&node).get("values").unwrap();
        let entries = values.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            as_object(&entries[0]).get("value").and_then(Value::as_str),
            Some("red")
        );
    }

    #[test]
    fn test_field_order() {
        let node = Parameter::default().to_value();
        assert_eq!(
            key_order(&node),
            ["name", "description", "type", "required", "default", "example", "values"]
        );
    }
}

#[cfg(test)]
mod resource_tests {
    use super::*;

    #[test]
    fn test_unnamed_model_is_null() {
        let node = Resource::default().to_value();
        assert!(as_object(&node).get("model").unwrap().is_null());
    }

    #[test]
    fn test_named_model_is_wrapped_data_structure() {
        let resource = Resource {
            model: DataStructure {
                name: "Widget".to_string(),
                ..DataStructure::default()
            },
            ..Resource::default()
        };

        let node = resource.to_value();
        let model = as_object(&node).get("model").unwrap();
        assert_eq!(
            as_object(model).get("element").and_then(Value::as_str),
            Some("dataStructure")
        );
        assert_eq!(
            as_object(model).get("name").and_then(Value::as_str),
            Some("Widget")
        );
    }

    #[test]
    fn test_attributes_go_into_content_array() {
        let resource = Resource {
            attributes: DataStructure {
                name: "Widget Attributes".to_string(),
                ..DataStructure::default()
            },
            ..Resource::default()
        };

        let node = resource.to_value();
        let content = as_object(&node).get("content").unwrap();
        assert_eq!(content.as_array().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_field_order() {
        let node = Resource::default().to_value();
        assert_eq!(
            key_order(&node),
            [
                "element",
                "name",
                "description",
                "uriTemplate",
                "model",
                "parameters",
                "actions",
                "content"
            ]
        );
    }
}

#[cfg(test)]
mod action_tests {
    use super::*;

    #[test]
    fn test_attributes_hold_relation_and_uri_template() {
        let action = Action {
            relation: "list".to_string(),
            uri_template: "/widgets{?limit}".to_string(),
            ..Action::default()
        };

        let node = action.to_value();
        let attributes = as_object(&node).get("attributes").unwrap();
        assert_eq!(
            as_object(attributes).get("relation").and_then(Value::as_str),
            Some("list")
        );
        assert_eq!(
            as_object(attributes)
                .get("uriTemplate")
                .and_then(Value::as_str),
            Some("/widgets{?limit}")
        );
    }

    #[test]
    fn test_attributes_data_structure_goes_into_content() {
        let action = Action {
            attributes: DataStructure {
                name: "Filters".to_string(),
                ..DataStructure::default()
            },
            ..Action::default()
        };

        let node = action.to_value();
        let content = as_object(&node).get("content").unwrap();
        assert_eq!(content.as_array().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_field_order() {
        let node = Action::default().to_value();
        assert_eq!(
            key_order(&node),
            [
                "name",
                "description",
                "method",
                "parameters",
                "attributes",
                "content",
                "examples"
            ]
        );
    }
}

#[cfg(test)]
mod misc_entity_tests {
    use super::*;

    #[test]
    fn test_key_value_pair_shape() {
        let node = KeyValuePair::new("Content-Type", "application/json").to_value();
        assert_eq!(key_order(&node), ["name", "value"]);
    }

    #[test]
    fn test_data_structure_is_tagged() {
        let node = DataStructure::default().to_value();
        assert_eq!(
            key_order(&node),
            ["element", "name", "typeDefinition", "sections"]
        );
        assert_eq!(
            as_object(&node).get("element").and_then(Value::as_str),
            Some("dataStructure")
        );
    }

    #[test]
    fn test_type_specification_shape() {
        let spec = TypeSpecification {
            name: TypeName {
                base: BaseTypeName::Array,
                ..TypeName::default()
            },
            nested_types: vec![TypeName {
                base: BaseTypeName::String,
                ..TypeName::default()
            }],
        };

        let node = spec.to_value();
        assert_eq!(key_order(&node), ["name", "nestedTypes"]);
        assert_eq!(
            as_object(&node).get("name").and_then(Value::as_str),
            Some("array")
        );
    }
}
