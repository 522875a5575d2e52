// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Fuzzy Trie.

use serde::{Deserialize, Serialize};

use super::segmenter::SegmenterKind;

/// Configuration for a [`FuzzyTrie`](super::FuzzyTrie) built at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyTrieConfig {
    /// How keys are split into segments
    pub segmenter: SegmenterKind,
}

impl FuzzyTrieConfig {
    /// Create a new default configuration (path segmentation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the segmenter used by tries built from this configuration.
    pub fn with_segmenter(mut self, segmenter: SegmenterKind) -> Self {
        self.segmenter = segmenter;
        self
    }
}
