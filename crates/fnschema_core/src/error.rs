//! Error types for schema compilation.

use thiserror::Error;

/// Errors that can occur while producing a tool schema.
///
/// Type resolution and description lookup never fail; the only fallible
/// step is choosing the output dialect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The requested output dialect is not one of the supported formats.
    #[error("unsupported dialect '{0}': expected 'openai' or 'claude'")]
    UnsupportedDialect(String),
}

impl SchemaError {
    /// Creates an [`UnsupportedDialect`](Self::UnsupportedDialect).
    pub fn unsupported_dialect(name: impl Into<String>) -> Self {
        Self::UnsupportedDialect(name.into())
    }
}
