//! Position tracking for source code locations
//!
//! Byte offsets are what the lexer naturally produces; diagnostics and
//! annotations want line/column. [`SourceIndex`] converts between the two
//! with a precomputed line-start table and binary search.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A line:column position in source code. Lines and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Converts byte offsets into [`Position`]s for one source text.
///
/// Built once per lex run; lookup is O(log n) over the line-start table.
#[derive(Debug, Clone)]
pub struct SourceIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }
        Self { source, line_starts }
    }

    /// Position of a byte offset. Columns count characters, not bytes.
    /// Offsets past the end of the source resolve to the end of the last
    /// line.
    pub fn position_of(&self, offset: usize) -> Position {
        let line_idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line_idx];
        let end = offset.min(self.source.len());
        Position::new(line_idx + 1, self.source[line_start..end].chars().count() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_positions() {
        let index = SourceIndex::new("abc");
        assert_eq!(index.position_of(0), Position::new(1, 1));
        assert_eq!(index.position_of(2), Position::new(1, 3));
    }

    #[test]
    fn test_multi_line_positions() {
        let index = SourceIndex::new("ab\ncd\n");
        assert_eq!(index.position_of(0), Position::new(1, 1));
        assert_eq!(index.position_of(2), Position::new(1, 3)); // the newline itself
        assert_eq!(index.position_of(3), Position::new(2, 1));
        assert_eq!(index.position_of(4), Position::new(2, 2));
        assert_eq!(index.position_of(6), Position::new(3, 1));
    }

    #[test]
    fn test_columns_count_chars_not_bytes() {
        // `é` is two bytes but one column wide.
        let index = SourceIndex::new("héllo = 1;\n");
        assert_eq!(index.position_of(7), Position::new(1, 7)); // the `=`
        assert_eq!(index.position_of(12), Position::new(2, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 7).to_string(), "4:7");
    }
}
