//! Test support utilities for keyhole integration tests.
//!
//! Provides stores, fixtures, and assertion helpers shared across test files.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod skip;
pub mod stores;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use stores::*;

use keyhole::{Config, MemoryStore, Plugin};

/// Plugin over a single document stored at `path`.
pub fn plugin_with(path: &str, payload: &str) -> Plugin<MemoryStore> {
    Plugin::new(MemoryStore::new().with_secret(path, payload))
}

/// Plugin over a single document stored at `path`, with a custom config.
pub fn plugin_with_config(path: &str, payload: &str, config: Config) -> Plugin<MemoryStore> {
    Plugin::with_config(MemoryStore::new().with_secret(path, payload), config)
}
