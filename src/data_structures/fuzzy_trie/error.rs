// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Fuzzy Trie.

/// Errors that can occur in Fuzzy Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum FuzzyTrieError {
    /// A segment of the key ends in `*` and cannot be stored.
    #[error("Key '{key}' contains wildcard segment '{segment}'")]
    WildcardSegment {
        /// The rejected key.
        key: String,
        /// The first offending segment.
        segment: String,
    },
}

/// Result type for Fuzzy Trie operations
pub type FuzzyTrieResult<T> = std::result::Result<T, FuzzyTrieError>;
