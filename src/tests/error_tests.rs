//! Tests for the error module.

use crate::data_structures::fuzzy_trie::{FuzzyTrie, FuzzyTrieError};
use crate::error::config::ConfigError;
use crate::error::{ErrorContext, ErrorReporter, FuzzyError, FuzzyResult, TracingErrorReporter};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = FuzzyError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Trie errors convert into the crate error through `?`.
#[test]
fn test_trie_error_conversion() {
    fn insert(trie: &mut FuzzyTrie<u8>, key: &str) -> FuzzyResult<()> {
        trie.try_put(key, 1)?;
        Ok(())
    }

    let mut trie = FuzzyTrie::new();
    assert!(insert(&mut trie, "/ok").is_ok());

    let err = insert(&mut trie, "/bad*").unwrap_err();
    assert!(matches!(
        err,
        FuzzyError::Trie(FuzzyTrieError::WildcardSegment { .. })
    ));
    assert_eq!(
        err.to_string(),
        "Trie error: Key '/bad*' contains wildcard segment '/bad*'"
    );
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = FuzzyError::from(io_error);
    assert!(error.to_string().contains("file not found"));

    let error = FuzzyError::from(ConfigError::ValidationError("bad level".to_string()));
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );
}

/// Counting error reporter for testing.
#[derive(Debug, Default)]
struct CountingErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for CountingErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Reporters are usable as trait objects.
#[test]
fn test_error_reporter_trait_object() {
    let counting = CountingErrorReporter::default();
    let reporters: [&dyn ErrorReporter; 2] = [&counting, &TracingErrorReporter];

    for reporter in reporters {
        let context = ErrorContext::new(FuzzyError::Custom("test error".to_string()), "test");
        reporter.report(context);
    }

    assert_eq!(counting.reported_count.load(Ordering::SeqCst), 1);
}
