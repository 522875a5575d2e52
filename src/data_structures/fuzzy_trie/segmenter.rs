// Copyright (c) 2025 Fuzzy Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Key segmentation for the Fuzzy Trie.
//!
//! A segmenter splits a key into the segments that name successive levels of
//! the trie. Segmentation is driven one step at a time: given the key and the
//! byte offset where the next segment starts, it returns that segment and the
//! offset of the one after it (`None` once the returned segment is the last).
//! An empty segment means the key is exhausted.

use serde::{Deserialize, Serialize};

/// Splits keys into trie segments.
///
/// Implementations must be total and deterministic, and every returned
/// offset must lie on a `char` boundary of `key`.
pub trait Segmenter {
    /// Returns the segment starting at `start` and the offset of the next one.
    fn segment<'k>(&self, key: &'k str, start: usize) -> (&'k str, Option<usize>);
}

impl<F> Segmenter for F
where
    F: Fn(&str, usize) -> (&str, Option<usize>),
{
    fn segment<'k>(&self, key: &'k str, start: usize) -> (&'k str, Option<usize>) {
        self(key, start)
    }
}

/// Splits on `/`, each segment being one `/`-prefixed component.
///
/// `/usr/local/bin` yields `/usr`, `/local` and `/bin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathSegmenter;

impl Segmenter for PathSegmenter {
    fn segment<'k>(&self, key: &'k str, start: usize) -> (&'k str, Option<usize>) {
        let rest = match key.get(start..) {
            Some(rest) if !rest.is_empty() => rest,
            _ => return ("", None),
        };
        // The leading char belongs to the segment even when it is a '/'.
        let skip = rest.chars().next().map_or(0, char::len_utf8);
        match rest[skip..].find('/') {
            Some(end) => {
                let next = start + skip + end;
                (&key[start..next], Some(next))
            }
            None => (rest, None),
        }
    }
}

/// One `char` per segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn segment<'k>(&self, key: &'k str, start: usize) -> (&'k str, Option<usize>) {
        match key.get(start..).and_then(|rest| rest.chars().next()) {
            Some(c) => {
                let next = start + c.len_utf8();
                let more = if next < key.len() { Some(next) } else { None };
                (&key[start..next], more)
            }
            None => ("", None),
        }
    }
}

/// Segmenter selected at runtime, typically from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    /// See [`PathSegmenter`].
    #[default]
    Path,
    /// See [`CharSegmenter`].
    Char,
}

impl Segmenter for SegmenterKind {
    fn segment<'k>(&self, key: &'k str, start: usize) -> (&'k str, Option<usize>) {
        match self {
            SegmenterKind::Path => PathSegmenter.segment(key, start),
            SegmenterKind::Char => CharSegmenter.segment(key, start),
        }
    }
}

/// Iterator over the segments of a key.
///
/// Yields each non-empty segment together with the offset that follows it.
pub(crate) struct Segments<'s, 'k, S: ?Sized> {
    segmenter: &'s S,
    key: &'k str,
    next: Option<usize>,
}

impl<'s, 'k, S: Segmenter + ?Sized> Segments<'s, 'k, S> {
    pub(crate) fn new(segmenter: &'s S, key: &'k str) -> Self {
        Self {
            segmenter,
            key,
            next: Some(0),
        }
    }
}

impl<'s, 'k, S: Segmenter + ?Sized> Iterator for Segments<'s, 'k, S> {
    type Item = (&'k str, Option<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next?;
        let (part, next) = self.segmenter.segment(self.key, start);
        if part.is_empty() {
            self.next = None;
            return None;
        }
        self.next = next;
        Some((part, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn collect<S: Segmenter>(segmenter: &S, key: &str) -> Vec<String> {
        Segments::new(segmenter, key)
            .map(|(part, _)| part.to_string())
            .collect()
    }

    #[test_case("/usr/local/bin", &["/usr", "/local", "/bin"] ; "absolute path")]
    #[test_case("/usr", &["/usr"] ; "single segment")]
    #[test_case("usr/local", &["usr", "/local"] ; "relative path")]
    #[test_case("/usr/", &["/usr", "/"] ; "trailing slash")]
    #[test_case("", &[] ; "empty key")]
    #[test_case("/usr/colors/*", &["/usr", "/colors", "/*"] ; "wildcard tail")]
    fn test_path_segmenter(key: &str, expected: &[&str]) {
        assert_eq!(collect(&PathSegmenter, key), expected);
    }

    #[test]
    fn test_path_segmenter_offsets() {
        assert_eq!(PathSegmenter.segment("/usr/local", 0), ("/usr", Some(4)));
        assert_eq!(PathSegmenter.segment("/usr/local", 4), ("/local", None));
        assert_eq!(PathSegmenter.segment("/usr/local", 10), ("", None));
    }

    #[test]
    fn test_char_segmenter() {
        assert_eq!(collect(&CharSegmenter, "héllo"), vec!["h", "é", "l", "l", "o"]);
        assert_eq!(CharSegmenter.segment("ab", 1), ("b", None));
        assert_eq!(CharSegmenter.segment("ab", 2), ("", None));
    }

    #[test]
    fn test_function_segmenter() {
        fn dotted(key: &str, start: usize) -> (&str, Option<usize>) {
            let rest = &key[start..];
            match rest.find('.') {
                Some(end) => (&rest[..end], Some(start + end + 1)),
                None => (rest, None),
            }
        }

        assert_eq!(collect(&dotted, "a.b.c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_segmenter_kind_dispatch() {
        assert_eq!(collect(&SegmenterKind::Path, "/a/b"), vec!["/a", "/b"]);
        assert_eq!(collect(&SegmenterKind::Char, "ab"), vec!["a", "b"]);
    }
}
