//! Data structures provided by the crate.
//!
//! - No unsafe code
//! - Exclusive ownership of tree nodes, no shared pointers
//! - No internal locking; callers serialize access

pub mod fuzzy_trie;

// Re-export common data structures
pub use fuzzy_trie::{FuzzyTrie, FuzzyTrieError, FuzzyTrieResult, PathSegmenter, Segmenter};
