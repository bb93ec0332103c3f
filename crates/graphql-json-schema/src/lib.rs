//! GraphQL introspection to JSON Schema conversion.
//!
//! Translates the introspection result a GraphQL server returns for the
//! standard introspection query into a JSON Schema draft-04 document. Root
//! operation types become top-level `properties` under the canonical keys
//! `Query` and `Mutation`; every other named type becomes a reusable entry
//! under `definitions`, referenced via `$ref`. The resulting document lets
//! generic JSON Schema tooling validate GraphQL request and response
//! payloads.
//!
//! Interfaces, unions and custom scalars have no precise JSON Schema
//! counterpart; they degrade to a generic `{"type": "object"}` fragment
//! carrying the type name as `title`.
//!
//! # Examples
//!
//! ```
//! use graphql_json_schema::{from_introspection_json, TranslateOptions};
//!
//! # fn main() -> graphql_json_schema::Result<()> {
//! let introspection = r#"{
//!   "__schema": {
//!     "queryType": { "name": "Query" },
//!     "types": [
//!       {
//!         "kind": "OBJECT",
//!         "name": "Query",
//!         "fields": [
//!           { "name": "version", "type": { "kind": "SCALAR", "name": "String" } }
//!         ]
//!       }
//!     ]
//!   }
//! }"#;
//!
//! let document = from_introspection_json(introspection, &TranslateOptions::default())?;
//! assert!(document.properties.contains_key("Query"));
//! # Ok(())
//! # }
//! ```
//!
//! Deserializing the input model yourself and calling [`translate`] gives
//! the same result without the parsing step.

mod document;
mod error;
mod reduce;
mod resolve;
mod translate;
mod types;

pub use document::{JsonSchemaDocument, JsonType, SchemaNode, SCHEMA_DRAFT_04};
pub use error::{Result, TranslateError};
pub use resolve::{resolve_default_value, resolve_type_ref};
pub use translate::{translate, TranslateOptions};
pub use types::{
    EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType, IntrospectionQuery,
    IntrospectionSchema, InvalidTypeRef, NamedTypeKind, NamedTypeRef, ObjectType, RootTypeRef,
    ScalarType, TypeDefinition, TypeRef, UnionType,
};

/// Parses introspection JSON and translates it in one step.
///
/// Accepts both the bare `{"__schema": ...}` object and the
/// `{"data": {"__schema": ...}}` envelope a server response carries.
///
/// # Errors
///
/// Returns [`TranslateError::Parse`] when the JSON does not deserialize
/// into an introspection result, plus every error [`translate`] can
/// return.
pub fn from_introspection_json(
    json: &str,
    options: &TranslateOptions,
) -> Result<JsonSchemaDocument> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let introspection: IntrospectionQuery = match value.get("data") {
        Some(data) => serde_json::from_value(data.clone())?,
        None => serde_json::from_value(value)?,
    };
    translate(&introspection, options)
}
