//! Test modules for the Fuzzy Trie crate.
//!
//! Unit tests live next to the code they cover; this module holds the
//! crate-level suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests of the trie using proptest

pub mod error_tests;
pub mod test_utils;

pub use test_utils::{path_key_strategy, segment_strategy, TestFixture};
