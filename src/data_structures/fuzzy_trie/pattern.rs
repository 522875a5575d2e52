// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trailing-`*` wildcard segments used by delete and path walks.

/// Suffix marking a segment as a wildcard.
pub const WILDCARD: char = '*';

/// Segment matching every child of a node.
pub const WHOLE_CHILDREN: &str = "/*";

/// A wildcard segment, resolved once where a literal child lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard<'a> {
    /// `/*`: every child.
    WholeChildren,
    /// `prefix*`: children whose segment text starts with `prefix`.
    PrefixMatch(&'a str),
}

impl<'a> Wildcard<'a> {
    /// Classifies `segment`, returning `None` for literal segments.
    pub fn parse(segment: &'a str) -> Option<Self> {
        if segment == WHOLE_CHILDREN {
            return Some(Wildcard::WholeChildren);
        }
        segment.strip_suffix(WILDCARD).map(Wildcard::PrefixMatch)
    }

    /// Whether a child stored under `child_key` is selected.
    pub fn matches(&self, child_key: &str) -> bool {
        match self {
            Wildcard::WholeChildren => true,
            Wildcard::PrefixMatch(prefix) => child_key.starts_with(prefix),
        }
    }
}

/// Whether `segment` would be read as a wildcard.
pub fn is_wildcard(segment: &str) -> bool {
    segment.ends_with(WILDCARD)
}
