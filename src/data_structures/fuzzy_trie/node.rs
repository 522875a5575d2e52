// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Fuzzy Trie.
//!
//! Each node stands for one segment position and exclusively owns its
//! children, so the tree never aliases.

use fnv::FnvHashMap;

/// A node in the Fuzzy Trie.
#[derive(Debug, Clone)]
pub struct TrieNode<V> {
    /// Value stored at exactly this path
    pub value: Option<V>,

    /// Child nodes keyed by their verbatim segment text
    pub children: FnvHashMap<String, TrieNode<V>>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            value: None,
            children: FnvHashMap::default(),
        }
    }

    /// A node without children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A leaf holding no value; unreachable once its parent drops it.
    pub fn is_prunable(&self) -> bool {
        self.value.is_none() && self.is_leaf()
    }

    /// Number of values stored in this subtree.
    pub fn count_values(&self) -> usize {
        let own = usize::from(self.value.is_some());
        own + self
            .children
            .values()
            .map(TrieNode::count_values)
            .sum::<usize>()
    }

    /// Follows `parts` down from this node.
    pub fn descend_mut(&mut self, parts: &[&str]) -> Option<&mut TrieNode<V>> {
        let mut node = self;
        for part in parts {
            node = node.children.get_mut(*part)?;
        }
        Some(node)
    }

    /// Drops the prunable nodes along `parts`, deepest first.
    ///
    /// Stops climbing at the first node that keeps a value or another child.
    pub fn prune_path(&mut self, parts: &[&str]) {
        let Some((first, rest)) = parts.split_first() else {
            return;
        };
        let Some(child) = self.children.get_mut(*first) else {
            return;
        };
        child.prune_path(rest);
        if child.is_prunable() {
            self.children.remove(*first);
        }
    }

    /// Pre-order visit of every value in this subtree.
    ///
    /// `path` holds this node's path on entry and is restored before return.
    pub fn walk<E, F>(&self, path: &mut String, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&str, &V) -> Result<(), E>,
    {
        if let Some(value) = &self.value {
            visitor(path.as_str(), value)?;
        }
        for (part, child) in &self.children {
            let len = path.len();
            path.push_str(part);
            let result = child.walk(path, visitor);
            path.truncate(len);
            result?;
        }
        Ok(())
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
