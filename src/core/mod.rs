//! Core library components.
//!
//! This module contains the secret resolution logic, the store abstraction,
//! and configuration handling.

pub mod config;
pub mod constants;
pub mod domain;
pub mod pattern;
pub mod resolver;
pub mod store;
pub mod types;
pub mod validation;
