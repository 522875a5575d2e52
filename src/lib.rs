//! Fuzzy Trie Library
//!
//! An in-memory, segment-keyed trie for hierarchical keys such as URL-style
//! paths. It offers exact lookup, insert and delete, full traversal, and a
//! trailing-`*` convention for bulk delete and single-path prefix walks.
//!
//! The library also carries the configuration, error and logging plumbing
//! used by the `fuzzy_trie` binary.

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Fuzzy Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
