//! Slice and replace operations over a coordinate range.
//!
//! Both operations validate the full request before building any output:
//! an inverted range, an out-of-bounds index, or an empty terminator is an
//! error, never a silently truncated result.

use crate::range::{Position, Range};
use crate::rows::{char_to_byte, split_rows};
use thiserror::Error;

/// Errors rejected by the range editing operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// `start` is lexicographically after `end`.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: Position, end: Position },

    /// A line index points past the last row of the buffer.
    #[error("line {line} is out of range for a buffer of {row_count} rows")]
    LineOutOfRange { line: usize, row_count: usize },

    /// A character index points past the end of its row.
    #[error("character {character} is out of range on line {line} ({row_len} characters)")]
    CharacterOutOfRange {
        line: usize,
        character: usize,
        row_len: usize,
    },

    /// The line terminator is empty, so rows cannot be delimited.
    #[error("line terminator must not be empty")]
    EmptyLineEnding,
}

/// Extract the substring spanned by `range`, with rows joined by `eol`.
///
/// A same-line range yields the sub-row between the two character offsets; a
/// multi-line range yields the tail of the start row, every intervening row
/// verbatim, and the head of the end row, joined by `eol`.
pub fn slice_by_range(text: &str, range: Range, eol: &str) -> Result<String, RangeError> {
    Ok(slice_rows_by_range(text, range, eol)?.join(eol))
}

/// Extract the rows spanned by `range` as an ordered sequence.
///
/// Row boundaries are implicit in the sequence; no terminator appears in any
/// element. A same-line range yields a single-element vector.
pub fn slice_rows_by_range(text: &str, range: Range, eol: &str) -> Result<Vec<String>, RangeError> {
    let (rows, start_byte, end_byte) = split_checked(text, range, eol)?;
    let start_row = rows[range.start.line];

    if range.start.line == range.end.line {
        return Ok(vec![start_row[start_byte..end_byte].to_string()]);
    }

    let mut out = Vec::with_capacity(range.end.line - range.start.line + 1);
    out.push(start_row[start_byte..].to_string());
    out.extend(
        rows[range.start.line + 1..range.end.line]
            .iter()
            .map(|row| (*row).to_string()),
    );
    out.push(rows[range.end.line][..end_byte].to_string());
    Ok(out)
}

/// Return a new buffer with the span addressed by `range` replaced by
/// `new_text`.
///
/// `new_text` may be empty (a deletion) or contain `eol` sequences, which
/// become genuine rows in the result. An empty range inserts at that
/// position. The input buffer is never modified.
pub fn replace_by_range(
    text: &str,
    range: Range,
    new_text: &str,
    eol: &str,
) -> Result<String, RangeError> {
    let (rows, start_byte, end_byte) = split_checked(text, range, eol)?;

    // Rows strictly between start and end collapse into one merged row; when
    // the range is single-line, prefix and suffix come from the same row.
    let merged = format!(
        "{}{}{}",
        &rows[range.start.line][..start_byte],
        new_text,
        &rows[range.end.line][end_byte..],
    );

    let mut out: Vec<&str> =
        Vec::with_capacity(rows.len() - (range.end.line - range.start.line));
    out.extend(&rows[..range.start.line]);
    out.push(merged.as_str());
    out.extend(&rows[range.end.line + 1..]);
    Ok(out.join(eol))
}

/// Validate the whole request and split the buffer into rows.
///
/// Returns the rows plus the byte offsets of `range.start` within its row
/// and `range.end` within its row. Order of checks follows the error
/// taxonomy: range ordering is rejected before any splitting work.
fn split_checked<'a>(
    text: &'a str,
    range: Range,
    eol: &str,
) -> Result<(Vec<&'a str>, usize, usize), RangeError> {
    if eol.is_empty() {
        return Err(RangeError::EmptyLineEnding);
    }
    if !range.is_ordered() {
        return Err(RangeError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }

    let rows = split_rows(text, eol);
    let start_byte = resolve(&rows, range.start)?;
    let end_byte = resolve(&rows, range.end)?;
    Ok((rows, start_byte, end_byte))
}

/// Resolve a position to a byte offset within its row, rejecting
/// out-of-bounds line or character indices.
fn resolve(rows: &[&str], position: Position) -> Result<usize, RangeError> {
    let Some(row) = rows.get(position.line) else {
        return Err(RangeError::LineOutOfRange {
            line: position.line,
            row_count: rows.len(),
        });
    };
    char_to_byte(row, position.character).ok_or_else(|| RangeError::CharacterOutOfRange {
        line: position.line,
        character: position.character,
        row_len: row.chars().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::DEFAULT_EOL;

    fn range(start: (usize, usize), end: (usize, usize)) -> Range {
        Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
    }

    #[test]
    fn slice_within_one_line() {
        let out = slice_by_range("hello world", range((0, 0), (0, 5)), DEFAULT_EOL).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn slice_rows_within_one_line_is_single_element() {
        let out =
            slice_rows_by_range("hello world", range((0, 6), (0, 11)), DEFAULT_EOL).unwrap();
        assert_eq!(out, vec!["world"]);
    }

    #[test]
    fn slice_across_lines() {
        let text = "line1\nline2\nline3";
        let out = slice_by_range(text, range((0, 2), (2, 3)), DEFAULT_EOL).unwrap();
        assert_eq!(out, "ne1\nline2\nlin");

        let rows = slice_rows_by_range(text, range((0, 2), (2, 3)), DEFAULT_EOL).unwrap();
        assert_eq!(rows, vec!["ne1", "line2", "lin"]);
    }

    #[test]
    fn slice_empty_range_is_empty() {
        let out = slice_by_range("abc", Range::at(Position::new(0, 1)), DEFAULT_EOL).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn replace_within_one_line() {
        let out =
            replace_by_range("hello world", range((0, 0), (0, 5)), "goodbye", DEFAULT_EOL)
                .unwrap();
        assert_eq!(out, "goodbye world");
    }

    #[test]
    fn replace_across_lines_collapses_middle_rows() {
        let out = replace_by_range("abc\ndef\nghi", range((0, 1), (2, 2)), "", DEFAULT_EOL)
            .unwrap();
        assert_eq!(out, "ai");
    }

    #[test]
    fn replace_with_embedded_terminators_adds_rows() {
        let out = replace_by_range("ab", range((0, 1), (0, 1)), "X\nY", DEFAULT_EOL).unwrap();
        assert_eq!(out, "aX\nYb");
    }

    #[test]
    fn replace_leaves_surrounding_rows_untouched() {
        let text = "one\ntwo\nthree\nfour";
        let out = replace_by_range(text, range((1, 0), (2, 5)), "TWO", DEFAULT_EOL).unwrap();
        assert_eq!(out, "one\nTWO\nfour");
    }

    #[test]
    fn replace_respects_crlf() {
        let text = "aa\r\nbb\r\ncc";
        let out = replace_by_range(text, range((0, 1), (2, 1)), "-", "\r\n").unwrap();
        assert_eq!(out, "a-c");
    }

    #[test]
    fn character_offsets_count_scalar_values() {
        // Positions land between chars, never inside a UTF-8 sequence.
        let text = "héllo\nwörld";
        let out = slice_by_range(text, range((0, 1), (1, 2)), DEFAULT_EOL).unwrap();
        assert_eq!(out, "éllo\nwö");

        let replaced = replace_by_range(text, range((0, 1), (1, 2)), "", DEFAULT_EOL).unwrap();
        assert_eq!(replaced, "hrld");
    }

    #[test]
    fn inverted_range_is_rejected_before_splitting() {
        let err = slice_by_range("a\nb", range((2, 0), (1, 0)), DEFAULT_EOL).unwrap_err();
        assert_eq!(
            err,
            RangeError::InvalidRange {
                start: Position::new(2, 0),
                end: Position::new(1, 0),
            }
        );
        let err =
            replace_by_range("a\nb", range((2, 0), (1, 0)), "x", DEFAULT_EOL).unwrap_err();
        assert!(matches!(err, RangeError::InvalidRange { .. }));
    }

    #[test]
    fn line_out_of_range_is_rejected() {
        let err = slice_by_range("short", range((5, 0), (5, 1)), DEFAULT_EOL).unwrap_err();
        assert_eq!(
            err,
            RangeError::LineOutOfRange {
                line: 5,
                row_count: 1,
            }
        );
    }

    #[test]
    fn character_out_of_range_is_rejected() {
        let err = replace_by_range("abc\nde", range((1, 0), (1, 3)), "x", DEFAULT_EOL)
            .unwrap_err();
        assert_eq!(
            err,
            RangeError::CharacterOutOfRange {
                line: 1,
                character: 3,
                row_len: 2,
            }
        );
    }

    #[test]
    fn end_of_row_is_a_valid_character_index() {
        // character == row length addresses the slot just before the
        // terminator.
        let out = slice_by_range("abc\ndef", range((0, 3), (1, 0)), DEFAULT_EOL).unwrap();
        assert_eq!(out, "\n");

        let replaced =
            replace_by_range("abc\ndef", range((0, 3), (1, 0)), " ", DEFAULT_EOL).unwrap();
        assert_eq!(replaced, "abc def");
    }

    #[test]
    fn empty_terminator_is_rejected() {
        let err = slice_by_range("abc", range((0, 0), (0, 1)), "").unwrap_err();
        assert_eq!(err, RangeError::EmptyLineEnding);
    }

    #[test]
    fn error_messages_name_the_offending_coordinates() {
        let err = RangeError::InvalidRange {
            start: Position::new(2, 0),
            end: Position::new(1, 0),
        };
        assert_eq!(err.to_string(), "invalid range: start 2:0 is after end 1:0");
    }
}
