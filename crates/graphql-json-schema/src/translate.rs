//! Type graph partitioning and document assembly.

use std::collections::BTreeMap;

use crate::document::{JsonSchemaDocument, SchemaNode, SCHEMA_DRAFT_04};
use crate::error::{Result, TranslateError};
use crate::reduce::{reduce_type, TypePosition};
use crate::types::{IntrospectionQuery, IntrospectionSchema, RootTypeRef, TypeDefinition};

/// Canonical name of the query root in the output document.
const QUERY_ROOT: &str = "Query";
/// Canonical name of the mutation root in the output document.
const MUTATION_ROOT: &str = "Mutation";
/// Prefix of GraphQL's own meta-schema types.
const INTERNAL_PREFIX: &str = "__";

/// Conversion options.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Drop `__`-prefixed introspection meta-types from `definitions`.
    /// Defaults to `true`.
    pub ignore_internals: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            ignore_internals: true,
        }
    }
}

pub(crate) struct PartitionedTypes {
    pub roots: Vec<TypeDefinition>,
    pub named: Vec<TypeDefinition>,
}

/// Splits the introspected types into root operation types and named types.
///
/// The object definitions designated by `queryType` / `mutationType` are
/// cloned and renamed to the canonical `Query` / `Mutation` before
/// partitioning, so output keys are stable regardless of what the server
/// calls its roots. The caller's schema is left untouched.
///
/// Partitioning matches by post-rename name: an object literally named
/// `Query` or `Mutation` is treated as a root even when it is not the
/// designated one. The resulting key collision surfaces as
/// [`TranslateError::DuplicateTypeName`] during assembly instead of one
/// definition silently shadowing the other.
pub(crate) fn partition_types(
    schema: &IntrospectionSchema,
    options: &TranslateOptions,
) -> PartitionedTypes {
    let mut roots = Vec::new();
    let mut named = Vec::new();
    for definition in &schema.types {
        if let TypeDefinition::Object(object) = definition {
            let name = canonical_root_name(schema, &object.name).unwrap_or(object.name.as_str());
            if name == QUERY_ROOT || name == MUTATION_ROOT {
                let mut renamed = object.clone();
                renamed.name = name.to_owned();
                roots.push(TypeDefinition::Object(renamed));
                continue;
            }
        }
        if options.ignore_internals && definition.name().starts_with(INTERNAL_PREFIX) {
            continue;
        }
        named.push(definition.clone());
    }
    PartitionedTypes { roots, named }
}

fn canonical_root_name(schema: &IntrospectionSchema, name: &str) -> Option<&'static str> {
    if designates(schema.query_type.as_ref(), name) {
        Some(QUERY_ROOT)
    } else if designates(schema.mutation_type.as_ref(), name) {
        Some(MUTATION_ROOT)
    } else {
        None
    }
}

fn designates(root: Option<&RootTypeRef>, name: &str) -> bool {
    root.is_some_and(|root| root.name == name)
}

/// Translates an introspection result into a JSON Schema draft-04 document.
///
/// Root operation types become top-level `properties`, every other named
/// type becomes a `definitions` entry. Assembly is all-or-nothing; on error
/// no partially built document escapes. A missing query or mutation root is
/// not an error, the corresponding property is simply absent.
///
/// # Errors
///
/// Returns [`TranslateError::MalformedDefaultValue`] when a non-enum
/// default value does not parse as JSON, and
/// [`TranslateError::DuplicateTypeName`] when two definitions would share
/// an output key.
#[tracing::instrument(skip(introspection), fields(types = introspection.schema.types.len()))]
pub fn translate(
    introspection: &IntrospectionQuery,
    options: &TranslateOptions,
) -> Result<JsonSchemaDocument> {
    let PartitionedTypes { roots, named } = partition_types(&introspection.schema, options);
    tracing::debug!(
        roots = roots.len(),
        named = named.len(),
        "partitioned introspection types"
    );

    let mut properties = BTreeMap::new();
    for definition in &roots {
        let node = reduce_type(definition, TypePosition::RootOperation)?;
        insert_unique(&mut properties, definition.name(), node)?;
    }

    let mut definitions = BTreeMap::new();
    for definition in &named {
        let node = reduce_type(definition, TypePosition::Definition)?;
        insert_unique(&mut definitions, definition.name(), node)?;
    }

    tracing::debug!(
        properties = properties.len(),
        definitions = definitions.len(),
        "assembled JSON Schema document"
    );
    Ok(JsonSchemaDocument {
        schema: SCHEMA_DRAFT_04.to_owned(),
        properties,
        definitions,
    })
}

fn insert_unique(
    map: &mut BTreeMap<String, SchemaNode>,
    name: &str,
    node: SchemaNode,
) -> Result<()> {
    if map.contains_key(name) {
        return Err(TranslateError::DuplicateTypeName(name.to_owned()));
    }
    map.insert(name.to_owned(), node);
    Ok(())
}
