//! Type reference and default value resolution.

use serde_json::Value;

use crate::document::{JsonType, SchemaNode};
use crate::error::{Result, TranslateError};
use crate::types::{InputValue, NamedTypeKind, NamedTypeRef, TypeRef};

/// Maps a built-in scalar name to its JSON Schema primitive.
///
/// `ID` is not in the table; introspection reports it as just another
/// custom scalar and it resolves to the generic object fallback.
pub(crate) fn builtin_scalar(name: &str) -> Option<JsonType> {
    match name {
        "Boolean" => Some(JsonType::Boolean),
        "String" => Some(JsonType::String),
        "Int" | "Float" => Some(JsonType::Number),
        _ => None,
    }
}

/// Resolves a (possibly wrapped) type reference to a JSON Schema fragment.
///
/// `List` becomes an array fragment wrapping the resolved inner type.
/// `NonNull` resolves to its inner type unchanged: nullability never
/// changes the shape of a type, only whether the owning field is required,
/// which the caller computes.
///
/// Named references to object-like kinds become `$ref` fragments and are
/// never inlined, so self-referential and mutually recursive types cannot
/// recurse here; depth is bounded by wrapper nesting alone.
///
/// # Examples
///
/// ```
/// use graphql_json_schema::{resolve_type_ref, NamedTypeKind, NamedTypeRef, TypeRef};
///
/// let int_list = TypeRef::List(Box::new(TypeRef::NonNull(Box::new(TypeRef::Named(
///     NamedTypeRef { name: "Int".to_owned(), kind: NamedTypeKind::Scalar },
/// )))));
/// assert_eq!(
///     serde_json::to_value(resolve_type_ref(&int_list)).unwrap(),
///     serde_json::json!({ "type": "array", "items": { "type": "number" } })
/// );
/// ```
#[must_use]
pub fn resolve_type_ref(type_ref: &TypeRef) -> SchemaNode {
    match type_ref {
        TypeRef::List(inner) => SchemaNode::array_of(resolve_type_ref(inner)),
        TypeRef::NonNull(inner) => resolve_type_ref(inner),
        TypeRef::Named(named) => resolve_named(named),
    }
}

fn resolve_named(named: &NamedTypeRef) -> SchemaNode {
    match named.kind {
        NamedTypeKind::Object | NamedTypeKind::InputObject | NamedTypeKind::Enum => {
            SchemaNode::ref_to(&named.name)
        }
        NamedTypeKind::Scalar => builtin_scalar(&named.name)
            .map_or_else(|| SchemaNode::fallback_object(&named.name), SchemaNode::typed),
        NamedTypeKind::Interface | NamedTypeKind::Union => SchemaNode::fallback_object(&named.name),
    }
}

/// Materializes the literal default of an input value, when one is declared.
///
/// Enum defaults are stored as bare value names and are taken verbatim,
/// never re-parsed. Anything else must parse as JSON text; a failure is
/// propagated rather than dropped, since a broken default usually points at
/// a schema-authoring error upstream.
///
/// Returns `Ok(None)` when no default is declared.
pub fn resolve_default_value(input_value: &InputValue) -> Result<Option<Value>> {
    let Some(raw) = &input_value.default_value else {
        return Ok(None);
    };
    if is_enum(input_value.type_ref.unwrap_non_null()) {
        return Ok(Some(Value::String(raw.clone())));
    }
    serde_json::from_str(raw)
        .map(Some)
        .map_err(|source| TranslateError::MalformedDefaultValue {
            name: input_value.name.clone(),
            value: raw.clone(),
            source,
        })
}

fn is_enum(type_ref: &TypeRef) -> bool {
    matches!(
        type_ref,
        TypeRef::Named(NamedTypeRef {
            kind: NamedTypeKind::Enum,
            ..
        })
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn named(kind: NamedTypeKind, name: &str) -> TypeRef {
        TypeRef::Named(NamedTypeRef {
            name: name.to_owned(),
            kind,
        })
    }

    fn input_value(name: &str, type_ref: TypeRef, default_value: Option<&str>) -> InputValue {
        InputValue {
            name: name.to_owned(),
            description: None,
            type_ref,
            default_value: default_value.map(str::to_owned),
        }
    }

    fn resolved(type_ref: &TypeRef) -> Value {
        serde_json::to_value(resolve_type_ref(type_ref)).expect("should serialize")
    }

    #[test]
    fn test_list_of_non_null_int() {
        let type_ref = TypeRef::List(Box::new(TypeRef::NonNull(Box::new(named(
            NamedTypeKind::Scalar,
            "Int",
        )))));
        assert_eq!(
            resolved(&type_ref),
            json!({ "type": "array", "items": { "type": "number" } })
        );
    }

    #[test]
    fn test_non_null_does_not_change_shape() {
        let plain = named(NamedTypeKind::Scalar, "Float");
        let wrapped = TypeRef::NonNull(Box::new(plain.clone()));
        assert_eq!(resolved(&plain), resolved(&wrapped));
    }

    #[test]
    fn test_object_like_kinds_become_refs() {
        assert_eq!(
            resolved(&named(NamedTypeKind::Object, "Todo")),
            json!({ "$ref": "#/definitions/Todo" })
        );
        assert_eq!(
            resolved(&named(NamedTypeKind::InputObject, "TodoFilter")),
            json!({ "$ref": "#/definitions/TodoFilter" })
        );
        assert_eq!(
            resolved(&named(NamedTypeKind::Enum, "Color")),
            json!({ "$ref": "#/definitions/Color" })
        );
    }

    #[test]
    fn test_custom_scalar_falls_back_to_titled_object() {
        assert_eq!(
            resolved(&named(NamedTypeKind::Scalar, "DateTime")),
            json!({ "type": "object", "title": "DateTime" })
        );
    }

    #[test]
    fn test_interface_and_union_fall_back_to_titled_object() {
        assert_eq!(
            resolved(&named(NamedTypeKind::Interface, "Node")),
            json!({ "type": "object", "title": "Node" })
        );
        assert_eq!(
            resolved(&named(NamedTypeKind::Union, "SearchResult")),
            json!({ "type": "object", "title": "SearchResult" })
        );
    }

    #[test]
    fn test_nested_lists() {
        let type_ref = TypeRef::List(Box::new(TypeRef::List(Box::new(named(
            NamedTypeKind::Scalar,
            "String",
        )))));
        assert_eq!(
            resolved(&type_ref),
            json!({
                "type": "array",
                "items": { "type": "array", "items": { "type": "string" } }
            })
        );
    }

    #[test]
    fn test_absent_default_resolves_to_none() {
        let input = input_value("limit", named(NamedTypeKind::Scalar, "Int"), None);
        assert_eq!(resolve_default_value(&input).expect("should resolve"), None);
    }

    #[test]
    fn test_json_default_is_parsed() {
        let input = input_value("limit", named(NamedTypeKind::Scalar, "Int"), Some("10"));
        assert_eq!(
            resolve_default_value(&input).expect("should resolve"),
            Some(json!(10))
        );
    }

    #[test]
    fn test_enum_default_is_taken_verbatim() {
        let input = input_value("status", named(NamedTypeKind::Enum, "Status"), Some("OPEN"));
        assert_eq!(
            resolve_default_value(&input).expect("should resolve"),
            Some(json!("OPEN"))
        );
    }

    #[test]
    fn test_non_null_enum_default_is_taken_verbatim() {
        let type_ref = TypeRef::NonNull(Box::new(named(NamedTypeKind::Enum, "Status")));
        let input = input_value("status", type_ref, Some("OPEN"));
        assert_eq!(
            resolve_default_value(&input).expect("should resolve"),
            Some(json!("OPEN"))
        );
    }

    #[test]
    fn test_malformed_default_is_an_error() {
        let input = input_value("flag", named(NamedTypeKind::Scalar, "Boolean"), Some("maybe"));
        let err = resolve_default_value(&input).expect_err("bare words are not JSON");
        assert!(
            matches!(&err, TranslateError::MalformedDefaultValue { name, value, .. }
                if name == "flag" && value == "maybe"),
            "unexpected error: {err:?}"
        );
    }
}
