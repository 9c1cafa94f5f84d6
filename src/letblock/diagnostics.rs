//! Warning collection for the compilation pipeline.
//!
//! Diagnostics are never an error channel: lexing and parsing always run to
//! completion and malformed constructs degrade to pass-through text. The
//! sink just records what happened, with enough position information for a
//! caller to report it.
//!
//! The sink is an explicit value, not process-global state. [`compile`]
//! creates a fresh sink per call; batch callers (like the CLI) own one sink
//! and thread it through [`compile_into`]. Concurrent compilations should
//! each use their own sink.
//!
//! [`compile`]: crate::letblock::pipeline::compile
//! [`compile_into`]: crate::letblock::pipeline::compile_into

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::letblock::position::Position;

/// One recorded warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub position: Position,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {} at {}", self.message, self.position)
    }
}

/// Append-only, resettable accumulator of [`Diagnostic`]s.
///
/// Appends are the only mutation besides [`reset`](Self::reset); entries
/// keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticSink {
    entries: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, position: Position) {
        self.entries.push(Diagnostic::new(message, position));
    }

    /// Clear all recorded diagnostics.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut sink = DiagnosticSink::new();
        sink.push("first", Position::new(1, 1));
        sink.push("second", Position::new(2, 5));
        let messages: Vec<_> = sink.entries().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_reset_clears_entries() {
        let mut sink = DiagnosticSink::new();
        sink.push("anything", Position::default());
        assert!(!sink.is_empty());
        sink.reset();
        assert!(sink.is_empty());
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn test_display_includes_position() {
        let diag = Diagnostic::new("unterminated string literal", Position::new(3, 9));
        assert_eq!(
            diag.to_string(),
            "warning: unterminated string literal at 3:9"
        );
    }
}
