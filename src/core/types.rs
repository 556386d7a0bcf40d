//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// Identifier of a secret document in the remote store (e.g. `app/prod`).
pub type SecretPath = String;

/// A field name within a secret document (e.g. `API_KEY`).
pub type FieldName = String;

/// A glob pattern taken from one of the reserved policy fields.
pub type Pattern = String;
