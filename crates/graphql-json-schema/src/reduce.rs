//! Field and type reducers, the per-definition half of the translation.

use std::collections::BTreeMap;

use crate::document::{JsonType, SchemaNode};
use crate::error::Result;
use crate::resolve::{builtin_scalar, resolve_default_value, resolve_type_ref};
use crate::types::{EnumValue, Field, InputValue, NamedTypeKind, TypeDefinition, TypeRef};

/// Where a reduced type lands in the output document.
///
/// Root operation types never get a `required` set: their fields are
/// independently invocable operations, not object members that must
/// co-occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypePosition {
    RootOperation,
    Definition,
}

/// Reduces one type definition to its JSON Schema fragment.
pub(crate) fn reduce_type(
    definition: &TypeDefinition,
    position: TypePosition,
) -> Result<SchemaNode> {
    let mut node = match definition {
        TypeDefinition::Object(object) => object_node(&object.fields, position)?,
        TypeDefinition::InputObject(input_object) => input_object_node(&input_object.input_fields)?,
        TypeDefinition::Enum(enum_type) => enum_node(&enum_type.enum_values),
        TypeDefinition::Scalar(scalar) => scalar_node(&scalar.name),
        TypeDefinition::Interface(interface) => SchemaNode::fallback_object(&interface.name),
        TypeDefinition::Union(union) => SchemaNode::fallback_object(&union.name),
    };
    node.description = definition.description().map(str::to_owned);
    Ok(node)
}

/// Converts one field definition into its property fragment.
///
/// A field whose core return type is a built-in scalar reduces to the bare
/// primitive; its arguments are not represented in that case. Every other
/// field becomes an object fragment with a `return` member holding the
/// resolved return type and an `arguments` member describing its arguments.
pub(crate) fn translate_field(field: &Field) -> Result<SchemaNode> {
    let core = field.type_ref.unwrap_non_null();
    let mut node = match scalar_primitive(core) {
        Some(ty) => SchemaNode::typed(ty),
        None => {
            let mut arg_properties = BTreeMap::new();
            for arg in &field.args {
                arg_properties.insert(arg.name.clone(), translate_input_value(arg)?);
            }
            let arguments = SchemaNode {
                ty: Some(JsonType::Object),
                properties: Some(arg_properties),
                required: required_names(field.args.iter().map(|a| (&a.name, &a.type_ref))),
                ..SchemaNode::default()
            };

            let mut members = BTreeMap::new();
            members.insert("return".to_owned(), resolve_type_ref(&field.type_ref));
            members.insert("arguments".to_owned(), arguments);
            SchemaNode {
                ty: Some(JsonType::Object),
                properties: Some(members),
                ..SchemaNode::default()
            }
        }
    };
    node.description = field.description.clone();
    Ok(node)
}

/// Converts one input value (input object field or field argument) into its
/// property fragment.
pub(crate) fn translate_input_value(input_value: &InputValue) -> Result<SchemaNode> {
    let mut node = resolve_type_ref(input_value.type_ref.unwrap_non_null());
    node.default = resolve_default_value(input_value)?;
    node.description = input_value.description.clone();
    Ok(node)
}

fn object_node(fields: &[Field], position: TypePosition) -> Result<SchemaNode> {
    let mut properties = BTreeMap::new();
    for field in fields {
        properties.insert(field.name.clone(), translate_field(field)?);
    }
    let required = match position {
        TypePosition::RootOperation => Vec::new(),
        TypePosition::Definition => {
            required_names(fields.iter().map(|f| (&f.name, &f.type_ref)))
        }
    };
    Ok(SchemaNode {
        ty: Some(JsonType::Object),
        properties: Some(properties),
        required,
        ..SchemaNode::default()
    })
}

fn input_object_node(input_fields: &[InputValue]) -> Result<SchemaNode> {
    let mut properties = BTreeMap::new();
    for input_field in input_fields {
        properties.insert(input_field.name.clone(), translate_input_value(input_field)?);
    }
    Ok(SchemaNode {
        ty: Some(JsonType::Object),
        properties: Some(properties),
        required: required_names(input_fields.iter().map(|f| (&f.name, &f.type_ref))),
        ..SchemaNode::default()
    })
}

fn enum_node(values: &[EnumValue]) -> SchemaNode {
    let alternatives = values
        .iter()
        .map(|value| SchemaNode {
            enum_values: Some(vec![value.name.clone()]),
            title: Some(value.description.clone().unwrap_or_else(|| value.name.clone())),
            description: value.description.clone(),
            ..SchemaNode::default()
        })
        .collect();
    SchemaNode {
        ty: Some(JsonType::String),
        any_of: Some(alternatives),
        ..SchemaNode::default()
    }
}

fn scalar_node(name: &str) -> SchemaNode {
    match builtin_scalar(name) {
        Some(ty) => SchemaNode {
            ty: Some(ty),
            title: Some(name.to_owned()),
            ..SchemaNode::default()
        },
        None => SchemaNode::fallback_object(name),
    }
}

/// The primitive for a reference that is directly a built-in scalar.
fn scalar_primitive(type_ref: &TypeRef) -> Option<JsonType> {
    match type_ref {
        TypeRef::Named(named) if named.kind == NamedTypeKind::Scalar => {
            builtin_scalar(&named.name)
        }
        _ => None,
    }
}

fn required_names<'a>(fields: impl Iterator<Item = (&'a String, &'a TypeRef)>) -> Vec<String> {
    fields
        .filter(|(_, type_ref)| type_ref.is_non_null())
        .map(|(name, _)| name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NamedTypeRef;

    use serde_json::{json, Value};

    fn named(kind: NamedTypeKind, name: &str) -> TypeRef {
        TypeRef::Named(NamedTypeRef {
            name: name.to_owned(),
            kind,
        })
    }

    fn field(name: &str, type_ref: TypeRef, args: Vec<InputValue>) -> Field {
        Field {
            name: name.to_owned(),
            description: None,
            args,
            type_ref,
        }
    }

    fn input_value(name: &str, type_ref: TypeRef) -> InputValue {
        InputValue {
            name: name.to_owned(),
            description: None,
            type_ref,
            default_value: None,
        }
    }

    fn to_value(node: SchemaNode) -> Value {
        serde_json::to_value(node).expect("should serialize")
    }

    #[test]
    fn test_scalar_field_drops_arguments() {
        let f = field(
            "version",
            TypeRef::NonNull(Box::new(named(NamedTypeKind::Scalar, "String"))),
            vec![input_value("detail", named(NamedTypeKind::Scalar, "Boolean"))],
        );
        assert_eq!(
            to_value(translate_field(&f).expect("should translate")),
            json!({ "type": "string" })
        );
    }

    #[test]
    fn test_object_field_carries_return_and_arguments() {
        let f = field(
            "todos",
            TypeRef::NonNull(Box::new(TypeRef::List(Box::new(TypeRef::NonNull(
                Box::new(named(NamedTypeKind::Object, "Todo")),
            ))))),
            vec![
                input_value("filter", named(NamedTypeKind::InputObject, "TodoFilter")),
                input_value(
                    "first",
                    TypeRef::NonNull(Box::new(named(NamedTypeKind::Scalar, "Int"))),
                ),
            ],
        );
        assert_eq!(
            to_value(translate_field(&f).expect("should translate")),
            json!({
                "type": "object",
                "properties": {
                    "return": {
                        "type": "array",
                        "items": { "$ref": "#/definitions/Todo" }
                    },
                    "arguments": {
                        "type": "object",
                        "properties": {
                            "filter": { "$ref": "#/definitions/TodoFilter" },
                            "first": { "type": "number" }
                        },
                        "required": ["first"]
                    }
                }
            })
        );
    }

    #[test]
    fn test_input_value_keeps_description_and_default() {
        let mut input = input_value("limit", named(NamedTypeKind::Scalar, "Int"));
        input.description = Some("Upper bound".to_owned());
        input.default_value = Some("10".to_owned());
        assert_eq!(
            to_value(translate_input_value(&input).expect("should translate")),
            json!({ "type": "number", "description": "Upper bound", "default": 10 })
        );
    }

    #[test]
    fn test_enum_alternatives() {
        let definition: TypeDefinition = serde_json::from_value(json!({
            "kind": "ENUM",
            "name": "Status",
            "description": null,
            "enumValues": [
                { "name": "A", "description": null },
                { "name": "B", "description": "desc" }
            ]
        }))
        .expect("should deserialize");

        assert_eq!(
            to_value(reduce_type(&definition, TypePosition::Definition).expect("should reduce")),
            json!({
                "type": "string",
                "anyOf": [
                    { "enum": ["A"], "title": "A" },
                    { "enum": ["B"], "title": "desc", "description": "desc" }
                ]
            })
        );
    }

    #[test]
    fn test_root_position_suspends_required() {
        let definition: TypeDefinition = serde_json::from_value(json!({
            "kind": "OBJECT",
            "name": "Query",
            "description": null,
            "fields": [
                {
                    "name": "todo",
                    "description": null,
                    "args": [],
                    "type": {
                        "kind": "NON_NULL",
                        "name": null,
                        "ofType": { "kind": "OBJECT", "name": "Todo", "ofType": null }
                    }
                }
            ]
        }))
        .expect("should deserialize");

        let root = reduce_type(&definition, TypePosition::RootOperation).expect("should reduce");
        assert!(root.required.is_empty());

        let definition_position =
            reduce_type(&definition, TypePosition::Definition).expect("should reduce");
        assert_eq!(definition_position.required, vec!["todo".to_owned()]);
    }

    #[test]
    fn test_builtin_scalar_definition_keeps_title() {
        let definition: TypeDefinition = serde_json::from_value(json!({
            "kind": "SCALAR",
            "name": "Int",
            "description": null
        }))
        .expect("should deserialize");
        assert_eq!(
            to_value(reduce_type(&definition, TypePosition::Definition).expect("should reduce")),
            json!({ "type": "number", "title": "Int" })
        );
    }
}
