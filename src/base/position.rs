/// Position tracking for AST nodes
///
/// Stores the source location (line/column/offset) of AST nodes for
/// resolution, refactoring and error reporting.
use text_size::TextSize;

/// A span representing a range in source code (0-indexed lines and columns)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed line/column plus byte offset)
///
/// Ordering is lexicographic on `(line, column, offset)`, which within a unit
/// agrees with the byte offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: TextSize,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates (offsets left at zero)
    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Smallest span covering both `self` and `other`
    pub fn cover(self, other: Span) -> Span {
        if self.is_synthetic() {
            return other;
        }
        if other.is_synthetic() {
            return self;
        }
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Synthesized nodes carry the default span
    pub fn is_synthetic(&self) -> bool {
        *self == Span::default()
    }

    /// Check if a position falls within this span (end inclusive)
    pub fn contains(&self, position: Position) -> bool {
        if position.line < self.start.line || position.line > self.end.line {
            return false;
        }
        if position.line == self.start.line && position.column < self.start.column {
            return false;
        }
        if position.line == self.end.line && position.column > self.end.column {
            return false;
        }
        true
    }
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: TextSize::new(0),
        }
    }

    pub fn with_offset(line: usize, column: usize, offset: TextSize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// 1-based line number, as reported to users
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    /// Compare by line and column only, ignoring the byte offset
    pub fn is_at_or_after(&self, other: Position) -> bool {
        (self.line, self.column) >= (other.line, other.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains_is_end_inclusive() {
        let span = Span::from_coords(1, 4, 1, 9);
        assert!(span.contains(Position::new(1, 4)));
        assert!(span.contains(Position::new(1, 9)));
        assert!(!span.contains(Position::new(1, 10)));
        assert!(!span.contains(Position::new(0, 5)));
    }

    #[test]
    fn test_multiline_span_contains_middle_lines() {
        let span = Span::from_coords(2, 10, 5, 1);
        assert!(span.contains(Position::new(3, 0)));
        assert!(span.contains(Position::new(5, 1)));
        assert!(!span.contains(Position::new(2, 9)));
    }

    #[test]
    fn test_cover_ignores_synthetic_spans() {
        let real = Span::from_coords(3, 0, 3, 5);
        assert_eq!(real.cover(Span::default()), real);
        assert_eq!(Span::default().cover(real), real);
        let other = Span::from_coords(4, 1, 6, 2);
        assert_eq!(real.cover(other), Span::from_coords(3, 0, 6, 2));
    }

    #[test]
    fn test_positions_order_by_line_then_column() {
        assert!(Position::new(1, 20) < Position::new(2, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
    }
}
