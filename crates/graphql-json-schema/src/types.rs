//! Type definitions for GraphQL introspection results.
//!
//! These types mirror the structure of GraphQL introspection query responses
//! and can be deserialized from JSON using serde. Wire members the
//! translation never reads (directives, deprecation metadata, implemented
//! interfaces) are ignored during deserialization.

use serde::Deserialize;
use thiserror::Error;

/// A complete introspection result, the `{"__schema": ...}` object a
/// GraphQL server returns for the standard introspection query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntrospectionQuery {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// Schema information from introspection.
///
/// `subscription_type` is accepted on the wire but never translated;
/// subscriptions have no counterpart in the output document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    pub query_type: Option<RootTypeRef>,
    pub mutation_type: Option<RootTypeRef>,
    pub subscription_type: Option<RootTypeRef>,
    pub types: Vec<TypeDefinition>,
}

/// Name-only reference designating a root operation type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RootTypeRef {
    pub name: String,
}

/// A named type definition, tagged by its introspection `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeDefinition {
    #[serde(rename = "SCALAR")]
    Scalar(ScalarType),
    #[serde(rename = "OBJECT")]
    Object(ObjectType),
    #[serde(rename = "INTERFACE")]
    Interface(InterfaceType),
    #[serde(rename = "UNION")]
    Union(UnionType),
    #[serde(rename = "ENUM")]
    Enum(EnumType),
    #[serde(rename = "INPUT_OBJECT")]
    InputObject(InputObjectType),
}

impl TypeDefinition {
    /// The definition's name, whichever kind it is.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(t) => &t.name,
            Self::Object(t) => &t.name,
            Self::Interface(t) => &t.name,
            Self::Union(t) => &t.name,
            Self::Enum(t) => &t.name,
            Self::InputObject(t) => &t.name,
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(t) => t.description.as_deref(),
            Self::Object(t) => t.description.as_deref(),
            Self::Interface(t) => t.description.as_deref(),
            Self::Union(t) => t.description.as_deref(),
            Self::Enum(t) => t.description.as_deref(),
            Self::InputObject(t) => t.description.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

/// Interfaces degrade to a generic object fragment in the output, so only
/// the members needed for that are modeled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
}

/// Unions degrade the same way interfaces do.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub enum_values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub input_fields: Vec<InputValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<InputValue>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// An input object field or a field argument.
///
/// `default_value` holds the raw literal text the server reported; it is
/// materialized into a JSON value only during translation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
}

/// A (possibly wrapped) type reference.
///
/// The wire shape is a nested `{kind, name, ofType}` chain; deserialization
/// goes through a raw wire struct, so a wrapper without an inner type or a
/// named reference without a name is rejected up front instead of surfacing
/// deep inside translation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawTypeRef")]
pub enum TypeRef {
    /// `[T]`
    List(Box<TypeRef>),
    /// `T!`; GraphQL guarantees this never directly wraps another `T!`.
    NonNull(Box<TypeRef>),
    /// The leaf of a wrapper chain.
    Named(NamedTypeRef),
}

impl TypeRef {
    /// Strips one outer `NonNull` wrapper, if present.
    #[must_use]
    pub fn unwrap_non_null(&self) -> &Self {
        match self {
            Self::NonNull(inner) => inner,
            other => other,
        }
    }

    /// Whether the outermost wrapper is `NonNull`.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

/// Leaf type reference, identified by name and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTypeRef {
    pub name: String,
    pub kind: NamedTypeKind,
}

/// Kinds a named reference can point at.
///
/// `LIST` and `NON_NULL` are wrapper kinds and are represented as
/// [`TypeRef`] variants instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedTypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

/// Error raised when a wire type reference is structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTypeRef {
    #[error("{0} type reference is missing `ofType`")]
    MissingInner(&'static str),
    #[error("named type reference is missing `name`")]
    MissingName,
}

/// Wire shape of a type reference before structural validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeRef {
    kind: RawTypeKind,
    name: Option<String>,
    of_type: Option<Box<RawTypeRef>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum RawTypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TryFrom<RawTypeRef> for TypeRef {
    type Error = InvalidTypeRef;

    fn try_from(raw: RawTypeRef) -> Result<Self, Self::Error> {
        let RawTypeRef { kind, name, of_type } = raw;
        match kind {
            RawTypeKind::List => Ok(Self::List(Box::new(unwrap_inner(of_type, "LIST")?))),
            RawTypeKind::NonNull => Ok(Self::NonNull(Box::new(unwrap_inner(of_type, "NON_NULL")?))),
            RawTypeKind::Scalar => named(name, NamedTypeKind::Scalar),
            RawTypeKind::Object => named(name, NamedTypeKind::Object),
            RawTypeKind::Interface => named(name, NamedTypeKind::Interface),
            RawTypeKind::Union => named(name, NamedTypeKind::Union),
            RawTypeKind::Enum => named(name, NamedTypeKind::Enum),
            RawTypeKind::InputObject => named(name, NamedTypeKind::InputObject),
        }
    }
}

fn unwrap_inner(
    of_type: Option<Box<RawTypeRef>>,
    wrapper: &'static str,
) -> Result<TypeRef, InvalidTypeRef> {
    of_type
        .ok_or(InvalidTypeRef::MissingInner(wrapper))
        .and_then(|inner| (*inner).try_into())
}

fn named(name: Option<String>, kind: NamedTypeKind) -> Result<TypeRef, InvalidTypeRef> {
    name.map(|name| TypeRef::Named(NamedTypeRef { name, kind }))
        .ok_or(InvalidTypeRef::MissingName)
}
