//! Error types for mapping API payloads onto typed entities

use smol_str::SmolStr;

/// Error produced while turning a raw JSON payload into an entity
///
/// Mapping is all-or-nothing: the first failure aborts construction and no partially
/// built value is ever handed back. Failures inside embedded objects are wrapped so the
/// caller can see which sub-object was at fault.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[non_exhaustive]
pub enum MappingError {
    /// A required key was absent (or explicitly `null`)
    #[error("missing required field `{field}`")]
    #[diagnostic(code(biblio::missing_field))]
    MissingField {
        /// Name of the absent key
        field: SmolStr,
    },

    /// A key held the wrong kind of JSON value
    #[error("field `{field}` is not {expected}")]
    #[diagnostic(code(biblio::invalid_field))]
    InvalidField {
        /// Name of the offending key
        field: SmolStr,
        /// What the field should have held
        expected: &'static str,
    },

    /// A date-time string could not be parsed
    #[error("field `{field}` holds an invalid timestamp {value:?}")]
    #[diagnostic(
        code(biblio::invalid_timestamp),
        help("expected an ISO 8601 date-time such as `2011-09-21T20:11:46Z`")
    )]
    InvalidTimestamp {
        /// Name of the offending key
        field: SmolStr,
        /// The raw string that failed to parse
        value: SmolStr,
        /// Underlying parser error
        #[source]
        source: chrono::ParseError,
    },

    /// The embedded user object could not be built
    #[error("invalid user: {0}")]
    #[diagnostic(code(biblio::invalid_user))]
    InvalidUser(#[source] Box<MappingError>),

    /// A list item could not be built
    #[error("invalid list item at index {index}: {source}")]
    #[diagnostic(code(biblio::invalid_item))]
    InvalidItem {
        /// Position of the item in the input array
        index: usize,
        /// What went wrong inside the item
        #[source]
        source: Box<MappingError>,
    },

    /// The payload was not valid JSON
    #[error("Failed to deserialize JSON: {0}")]
    #[diagnostic(code(biblio::json))]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
}

impl MappingError {
    /// Shorthand for [`MappingError::MissingField`]
    pub fn missing(field: impl Into<SmolStr>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Shorthand for [`MappingError::InvalidField`]
    pub fn invalid(field: impl Into<SmolStr>, expected: &'static str) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected,
        }
    }

    /// Wraps a failure from the embedded user object
    pub fn user(inner: MappingError) -> Self {
        Self::InvalidUser(Box::new(inner))
    }

    /// Wraps a failure from the list item at `index`
    pub fn item(index: usize, inner: MappingError) -> Self {
        Self::InvalidItem {
            index,
            source: Box::new(inner),
        }
    }
}

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, MappingError>;
