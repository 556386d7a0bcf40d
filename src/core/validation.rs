//! Input validation for keyhole operations.
//!
//! Validates the shape of a secret request before anything is fetched.

use crate::core::config::{Config, ReservedNames};
use crate::core::domain::SecretRequest;
use crate::error::{RequestError, Result};

/// Validate a secret request.
///
/// Checks, in order:
/// - `path` is not empty
/// - `name` is not empty
/// - `name` is not a reserved policy field, unless the config allows it
///
/// # Errors
///
/// Returns `RequestError` describing the first failed check.
pub fn validate_request(request: &SecretRequest, config: &Config) -> Result<()> {
    if request.path.is_empty() {
        return Err(RequestError::MissingPath.into());
    }

    if request.name.is_empty() {
        return Err(RequestError::MissingName.into());
    }

    if config.policy.reserved_names == ReservedNames::Reject
        && config.fields.is_reserved(&request.name)
    {
        return Err(RequestError::ReservedName(request.name.clone()).into());
    }

    Ok(())
}
