//! Offset to line/column conversion.

use text_size::TextSize;

/// A 0-indexed line/column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets of one source text to line/column pairs.
///
/// Columns count bytes from the start of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(idx as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert an offset into a line/column pair. Offsets past the end clamp
    /// to the end of the text.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        LineCol {
            line: line as u32,
            col: u32::from(offset - self.line_starts[line]),
        }
    }

    /// Convert a line/column pair back into an offset
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let start = *self.line_starts.get(line_col.line as usize)?;
        let offset = start + TextSize::new(line_col.col);
        (offset <= self.len).then_some(offset)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_across_lines() {
        let index = LineIndex::new("package main\n\nfunc f() {}\n");
        assert_eq!(index.line_col(TextSize::new(0)), LineCol { line: 0, col: 0 });
        assert_eq!(index.line_col(TextSize::new(8)), LineCol { line: 0, col: 8 });
        assert_eq!(index.line_col(TextSize::new(13)), LineCol { line: 1, col: 0 });
        assert_eq!(index.line_col(TextSize::new(19)), LineCol { line: 2, col: 5 });
    }

    #[test]
    fn test_offset_roundtrip() {
        let index = LineIndex::new("a\nbc\ndef");
        let lc = index.line_col(TextSize::new(6));
        assert_eq!(lc, LineCol { line: 2, col: 1 });
        assert_eq!(index.offset(lc), Some(TextSize::new(6)));
        assert_eq!(index.offset(LineCol { line: 9, col: 0 }), None);
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let index = LineIndex::new("ab");
        assert_eq!(index.line_col(TextSize::new(40)), LineCol { line: 0, col: 2 });
        assert_eq!(index.line_count(), 1);
    }
}
