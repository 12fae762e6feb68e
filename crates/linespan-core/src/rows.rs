//! Row handling for flat buffers.
//!
//! A buffer's rows are whatever `str::split` yields for the caller's
//! terminator: the terminator belongs to no row, and an empty buffer is a
//! single empty row. Keeping the split in one place means slice and replace
//! always agree on row boundaries.

/// The default line terminator when a caller has no better information.
pub const DEFAULT_EOL: &str = "\n";

/// Split `text` into rows on `eol`. The caller guarantees `eol` is
/// non-empty.
pub(crate) fn split_rows<'a>(text: &'a str, eol: &str) -> Vec<&'a str> {
    text.split(eol).collect()
}

/// Map a character offset within `row` to a byte offset.
///
/// Offsets `0..=char_count` are valid (the last one addresses the end of the
/// row, for exclusive range ends and insertion points); anything past that
/// returns `None`.
pub(crate) fn char_to_byte(row: &str, character: usize) -> Option<usize> {
    row.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(row.len()))
        .nth(character)
}

/// Detect a buffer's line terminator convention from its first line break.
///
/// Returns `"\r\n"` when the first `\n` is preceded by `\r`, otherwise
/// [`DEFAULT_EOL`] — including for buffers with no line break at all, where
/// either convention reads the whole buffer as one row.
pub fn detect_line_ending(text: &str) -> &'static str {
    match text.find('\n') {
        Some(i) if i > 0 && text.as_bytes()[i - 1] == b'\r' => "\r\n",
        _ => DEFAULT_EOL,
    }
}
