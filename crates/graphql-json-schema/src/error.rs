use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranslateError>;

/// Errors surfaced while translating an introspection result.
///
/// Unknown custom scalars and missing root operation types are not errors;
/// both are recovered locally with a best-effort fragment.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The introspection JSON did not deserialize into the input model.
    #[error("Failed to parse introspection JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A declared default value on a non-enum input was not valid JSON.
    #[error("Malformed default value {value:?} for `{name}`: {source}")]
    MalformedDefaultValue {
        name: String,
        value: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two type definitions shared a name after root-type renaming.
    #[error("Duplicate type name `{0}` in introspection result")]
    DuplicateTypeName(String),
}
