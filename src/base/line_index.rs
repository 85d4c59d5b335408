//! Byte-offset to line/column conversion.
//!
//! Built once per file; used to turn lexer offsets ([`TextSize`]) into
//! the line/column coordinates reported in diagnostics.

use text_size::TextSize;

/// A 0-indexed line/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets to line/column positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the start of each line. `newlines[0]` is always 0.
    newlines: Vec<u32>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut newlines = vec![0u32];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                newlines.push(i as u32 + 1);
            }
        }
        Self { newlines }
    }

    /// Convert a byte offset into a 0-indexed line/column.
    ///
    /// The column is a byte column, which is exact for ASCII source and a
    /// close approximation otherwise.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = u32::from(offset);
        let line = self
            .newlines
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        LineCol {
            line: line as u32,
            col: offset - self.newlines[line],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_at_boundaries() {
        let index = LineIndex::new("ab\ncd\n");
        assert_eq!(index.line_col(TextSize::new(0)), LineCol { line: 0, col: 0 });
        assert_eq!(index.line_col(TextSize::new(2)), LineCol { line: 0, col: 2 });
        assert_eq!(index.line_col(TextSize::new(3)), LineCol { line: 1, col: 0 });
        assert_eq!(index.line_col(TextSize::new(5)), LineCol { line: 1, col: 2 });
        assert_eq!(index.line_col(TextSize::new(6)), LineCol { line: 2, col: 0 });
    }

    #[test]
    fn single_line() {
        let index = LineIndex::new("package main");
        assert_eq!(index.line_col(TextSize::new(8)), LineCol { line: 0, col: 8 });
    }
}
