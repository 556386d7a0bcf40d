//! Domain types.

mod document;
mod filters;
mod request;
mod secret;

pub use document::SecretDocument;
pub use filters::PolicyFilters;
pub use request::SecretRequest;
pub use secret::ResolvedSecret;
