//! Errors from validating a resolved config against its schema.

use super::schema::SchemaType;

/// A resolved config that does not satisfy its component's schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// None of the schema's `any_of` conditions held.
    #[error("{message}")]
    MissingRequired { message: &'static str },
    /// A declared property held a value of the wrong type.
    #[error("`{property}` must be a {expected}, found {found}")]
    InvalidType {
        property: &'static str,
        expected: SchemaType,
        found: &'static str,
    },
}
