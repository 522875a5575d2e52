//! Test utilities and fixtures for the Fuzzy Trie crate.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum number of segments in a generated key.
const MAX_SEGMENTS: usize = 5;

/// Generate a strategy for one literal path segment such as `/usr`.
///
/// Segment text never ends in `*`, so generated keys are always storable.
pub fn segment_strategy() -> BoxedStrategy<String> {
    "[a-z0-9]{1,6}".prop_map(|s| format!("/{s}")).boxed()
}

/// Generate a strategy for `/`-separated keys with one or more segments.
pub fn path_key_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(segment_strategy(), 1..=MAX_SEGMENTS)
        .prop_map(|segments| segments.concat())
        .boxed()
}

/// Test fixture owning a temporary directory for config and data files.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
