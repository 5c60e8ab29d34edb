use serde::Serialize;

/// A zero-based (line, column) offset into a text document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// An ordered pair of positions delimiting the start and end of a matched
/// token. Produced fresh per query, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionSpan {
    pub start: Position,
    pub end: Position,
}

impl PositionSpan {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span within a single line, from `start_column` to `end_column`.
    pub fn on_line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self::new(Position::new(line, start_column), Position::new(line, end_column))
    }
}
