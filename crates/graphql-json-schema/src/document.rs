//! Output JSON Schema document model.
//!
//! A deliberately small slice of draft-04: just the members the translation
//! emits. Serialization skips absent members, so the emitted JSON carries
//! exactly what a fragment uses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `$schema` identifier of emitted documents.
pub const SCHEMA_DRAFT_04: &str = "http://json-schema.org/draft-04/schema#";

/// Primitive JSON Schema `type` values the translation emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

/// A JSON Schema fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<JsonType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaNode>>,
    /// Omitted when empty; draft-04 requires `required` to be non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(rename = "anyOf", skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<SchemaNode>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl SchemaNode {
    /// Fragment with a bare `type`.
    #[must_use]
    pub fn typed(ty: JsonType) -> Self {
        Self {
            ty: Some(ty),
            ..Self::default()
        }
    }

    /// `{"type": "array", "items": ...}`
    #[must_use]
    pub fn array_of(items: Self) -> Self {
        Self {
            ty: Some(JsonType::Array),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// Reference into the document's `definitions`.
    #[must_use]
    pub fn ref_to(name: &str) -> Self {
        Self {
            reference: Some(format!("#/definitions/{name}")),
            ..Self::default()
        }
    }

    /// Generic titled object, the fallback for types with no precise JSON
    /// Schema counterpart (custom scalars, interfaces, unions).
    #[must_use]
    pub fn fallback_object(title: &str) -> Self {
        Self {
            ty: Some(JsonType::Object),
            title: Some(title.to_owned()),
            ..Self::default()
        }
    }
}

/// The assembled draft-04 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchemaDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub properties: BTreeMap<String, SchemaNode>,
    pub definitions: BTreeMap<String, SchemaNode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_members_are_skipped() {
        let node = SchemaNode::typed(JsonType::String);
        assert_eq!(
            serde_json::to_value(&node).expect("should serialize"),
            json!({ "type": "string" })
        );
    }

    #[test]
    fn test_ref_fragment() {
        let node = SchemaNode::ref_to("Todo");
        assert_eq!(
            serde_json::to_value(&node).expect("should serialize"),
            json!({ "$ref": "#/definitions/Todo" })
        );
    }

    #[test]
    fn test_empty_required_is_omitted() {
        let node = SchemaNode {
            ty: Some(JsonType::Object),
            properties: Some(BTreeMap::new()),
            required: Vec::new(),
            ..SchemaNode::default()
        };
        assert_eq!(
            serde_json::to_value(&node).expect("should serialize"),
            json!({ "type": "object", "properties": {} })
        );
    }

    #[test]
    fn test_array_fragment() {
        let node = SchemaNode::array_of(SchemaNode::typed(JsonType::Number));
        assert_eq!(
            serde_json::to_value(&node).expect("should serialize"),
            json!({ "type": "array", "items": { "type": "number" } })
        );
    }
}
