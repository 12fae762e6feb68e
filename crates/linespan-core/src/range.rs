use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-based `(line, character)` coordinate in a text buffer.
///
/// `line` indexes a row produced by splitting the buffer on the line
/// terminator; `character` indexes a Unicode scalar value within that row,
/// terminator excluded. Field names match the LSP `Position` type, so the
/// serde form is interchangeable with LSP JSON — with the caveat that LSP
/// transports usually negotiate UTF-16 offsets while `character` here counts
/// scalar values.
///
/// The derived ordering is lexicographic: first by `line`, then by
/// `character`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// The start of the buffer.
    pub fn zero() -> Self {
        Self::default()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// A span of text delimited by two [`Position`]s.
///
/// A valid range has `start <= end`; a range where they are equal addresses
/// zero characters and acts as an insertion point. The ordering invariant is
/// checked by the editing operations rather than the constructor, since a
/// range is only meaningful against a specific buffer and terminator anyway.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// An empty range (insertion point) at the given position.
    pub fn at(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Whether this range addresses zero characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `start <= end` holds.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Whether the range starts and ends on the same row.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
