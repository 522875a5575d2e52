// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Fuzzy Trie: a segment-keyed trie for hierarchical keys.
//!
//! Keys are split into segments by a pluggable [`Segmenter`] (by default
//! `/usr/local` becomes `/usr` and `/local`) and each segment names one level
//! of the tree. Lookups and inserts are exact. Delete and path walks also
//! accept a single trailing wildcard segment:
//!
//! - `/*` selects every child of the node reached so far.
//! - `prefix*` selects the children whose segment text starts with `prefix`.
//!
//! Wildcard segments can never be stored as keys.
//!
//! # Example
//!
//! ```
//! use fuzzy_trie_lib::data_structures::fuzzy_trie::FuzzyTrie;
//!
//! let mut trie = FuzzyTrie::new();
//! trie.put("/usr", "pedro");
//! trie.put("/usr/gender", "male");
//! trie.put("/usr/garden", "qh");
//! trie.put("/usr/age", "25");
//!
//! assert_eq!(trie.get("/usr/age"), Some(&"25"));
//! assert!(!trie.put("/usr/g*", "rejected"));
//!
//! // Remove every child of /usr starting with /g
//! assert!(trie.delete("/usr/g*"));
//! assert_eq!(trie.get("/usr/gender"), None);
//! assert_eq!(trie.len(), 2);
//! ```
//!
//! # Concurrency
//!
//! The trie has no internal synchronization. Share it behind a lock
//! (`RwLock` allows concurrent `get`/`walk` with exclusive `put`/`delete`).

mod config;
mod error;
mod node;
mod pattern;
mod segmenter;

pub use config::FuzzyTrieConfig;
pub use error::{FuzzyTrieError, FuzzyTrieResult};
pub use pattern::{is_wildcard, Wildcard, WHOLE_CHILDREN, WILDCARD};
pub use segmenter::{CharSegmenter, PathSegmenter, Segmenter, SegmenterKind};

use node::TrieNode;
use segmenter::Segments;

/// Segment-keyed trie storing one optional `V` per path.
#[derive(Debug, Clone)]
pub struct FuzzyTrie<V, S = PathSegmenter> {
    /// The root node; holds the value stored under the empty key
    root: TrieNode<V>,

    /// Segmenter shared by every level of this trie
    segmenter: S,
}

impl<V> FuzzyTrie<V> {
    /// Creates an empty trie using [`PathSegmenter`].
    pub fn new() -> Self {
        Self::with_segmenter(PathSegmenter)
    }
}

impl<V> Default for FuzzyTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FuzzyTrie<V, SegmenterKind> {
    /// Creates an empty trie whose segmenter is chosen by `config`.
    pub fn with_config(config: FuzzyTrieConfig) -> Self {
        Self::with_segmenter(config.segmenter)
    }
}

impl<V, S: Segmenter> FuzzyTrie<V, S> {
    /// Creates an empty trie that splits keys with `segmenter`.
    pub fn with_segmenter(segmenter: S) -> Self {
        Self {
            root: TrieNode::new(),
            segmenter,
        }
    }

    /// The segmenter this trie was built with.
    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Returns the value stored at exactly `key`.
    ///
    /// Segments are matched literally; `*` has no special meaning here.
    pub fn get<K: AsRef<str>>(&self, key: K) -> Option<&V> {
        let mut node = &self.root;
        for (part, _) in Segments::new(&self.segmenter, key.as_ref()) {
            node = node.children.get(part)?;
        }
        node.value.as_ref()
    }

    /// Mutable access to the value stored at exactly `key`.
    pub fn get_mut<K: AsRef<str>>(&mut self, key: K) -> Option<&mut V> {
        let mut node = &mut self.root;
        for (part, _) in Segments::new(&self.segmenter, key.as_ref()) {
            node = node.children.get_mut(part)?;
        }
        node.value.as_mut()
    }

    /// Stores `value` at `key`, overwriting any previous value.
    ///
    /// Returns `false` if a segment of `key` ends in `*`. Segments before the
    /// rejected one have already been created at that point and are kept.
    pub fn put<K: AsRef<str>>(&mut self, key: K, value: V) -> bool {
        self.try_put(key, value).is_ok()
    }

    /// Like [`put`](Self::put), but returns the replaced value or the reason
    /// the key was rejected.
    pub fn try_put<K: AsRef<str>>(&mut self, key: K, value: V) -> FuzzyTrieResult<Option<V>> {
        let key = key.as_ref();
        let mut node = &mut self.root;
        for (part, _) in Segments::new(&self.segmenter, key) {
            if is_wildcard(part) {
                tracing::trace!(key, segment = part, "rejected wildcard segment");
                return Err(FuzzyTrieError::WildcardSegment {
                    key: key.to_string(),
                    segment: part.to_string(),
                });
            }
            node = node.children.entry(part.to_string()).or_default();
        }
        Ok(node.value.replace(value))
    }

    /// Deletes by literal key or by trailing-wildcard pattern.
    ///
    /// A literal key clears the value at that path and prunes the nodes left
    /// without value or children; descendants of the cleared node stay.
    /// Returns `false` only when a literal path does not exist.
    ///
    /// When a segment ending in `*` has no literal match, the children of the
    /// node reached so far are removed in bulk (all of them for `/*`, the
    /// prefix matches otherwise) and `true` is returned. Segments after the
    /// wildcard are ignored.
    pub fn delete<K: AsRef<str>>(&mut self, pattern: K) -> bool {
        let pattern = pattern.as_ref();
        let mut parts = Vec::new();
        let mut wildcard = None;

        let mut node = &self.root;
        for (part, _) in Segments::new(&self.segmenter, pattern) {
            if let Some(child) = node.children.get(part) {
                parts.push(part);
                node = child;
                continue;
            }
            match Wildcard::parse(part) {
                Some(found) => {
                    wildcard = Some(found);
                    break;
                }
                None => return false,
            }
        }

        match wildcard {
            Some(wildcard) => {
                if let Some(parent) = self.root.descend_mut(&parts) {
                    let before = parent.children.len();
                    match wildcard {
                        Wildcard::WholeChildren => parent.children.clear(),
                        Wildcard::PrefixMatch(_) => {
                            parent.children.retain(|key, _| !wildcard.matches(key))
                        }
                    }
                    tracing::debug!(
                        pattern,
                        removed = before - parent.children.len(),
                        "bulk delete"
                    );
                }
            }
            None => {
                if let Some(target) = self.root.descend_mut(&parts) {
                    target.value = None;
                }
            }
        }
        self.root.prune_path(&parts);
        true
    }

    /// Visits every stored value, parents before children.
    ///
    /// The visitor receives the concatenated segment path (empty at the root).
    /// Sibling order is unspecified. The first error stops the walk and is
    /// returned.
    pub fn walk<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&str, &V) -> Result<(), E>,
    {
        let mut path = String::new();
        self.root.walk(&mut path, &mut visitor)
    }

    /// Visits the values along the single path named by `pattern`.
    ///
    /// The root value comes first, then the value of every node matched by a
    /// segment, reported under the prefix of `pattern` consumed so far. A
    /// missing literal segment ends the walk without error. A trailing
    /// wildcard segment visits the matching valued children of the last node
    /// reached (one level only) and ends the walk. The first error returned
    /// by the visitor stops the walk and is returned.
    pub fn walk_path<K, E, F>(&self, pattern: K, mut visitor: F) -> Result<(), E>
    where
        K: AsRef<str>,
        F: FnMut(&str, &V) -> Result<(), E>,
    {
        let pattern = pattern.as_ref();
        if let Some(value) = &self.root.value {
            visitor("", value)?;
        }

        let mut node = &self.root;
        for (part, next) in Segments::new(&self.segmenter, pattern) {
            let consumed = match next {
                Some(end) => &pattern[..end],
                None => pattern,
            };

            let Some(child) = node.children.get(part) else {
                if let Some(wildcard) = Wildcard::parse(part) {
                    let parent_path = consumed.strip_suffix(part).unwrap_or(consumed);
                    let mut path = String::from(parent_path);
                    for (child_key, child) in &node.children {
                        let Some(value) = &child.value else { continue };
                        if !wildcard.matches(child_key) {
                            continue;
                        }
                        path.truncate(parent_path.len());
                        path.push_str(child_key);
                        visitor(&path, value)?;
                    }
                }
                return Ok(());
            };

            if let Some(value) = &child.value {
                visitor(consumed, value)?;
            }
            node = child;
        }
        Ok(())
    }

    /// Number of stored values. Walks the whole tree.
    pub fn len(&self) -> usize {
        self.root.count_values()
    }

    /// Whether the trie holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry, keeping the segmenter.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }
}
