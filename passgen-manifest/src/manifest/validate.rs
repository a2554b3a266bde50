//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::error::SourceContext;

/// Parsing and validation context that carries source information.
///
/// Encapsulates the source content and filename so validation code can
/// produce errors that point into the original `passgen.toml`.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Find the span of a `key = "value"` string assignment in the source.
    pub fn find_value_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value)
    }
}

/// Find the span of `value` in a `key = "value"` assignment.
///
/// Tries both quote styles and both spaced and compact `=`; returns the span
/// of the value itself, without quotes.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        for eq in [" = ", "="] {
            let pattern = format!("{key}{eq}{quote}{value}{quote}");
            if let Some(pos) = src.find(&pattern) {
                let start = pos + key.len() + eq.len() + 1;
                return Some(SourceSpan::from((start, value.len())));
            }
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}
