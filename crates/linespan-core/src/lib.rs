//! # linespan-core — range-addressed text editing
//!
//! This crate reads and rewrites sub-regions of a flat text buffer addressed
//! by zero-based `(line, character)` coordinates — the same coordinate model
//! used by the Language Server Protocol. It is a leaf utility for editor
//! tooling (diagnostics, completions, suggestion splicing) that has a
//! coordinate range in hand rather than raw byte offsets.
//!
//! ## The Immutability Guarantee
//!
//! No operation mutates its input. `slice` extracts the addressed span,
//! `replace` returns a **new** buffer with the span rewritten; the caller
//! decides what to do with the result. Because the functions are pure they
//! can be called from any number of threads without coordination — but a
//! caller splicing into a live document must still serialize its own writes
//! so a replace is never computed against a stale snapshot.
//!
//! ## Coordinates and Rows
//!
//! A buffer is an ordered sequence of rows joined by a caller-supplied line
//! terminator (usually [`DEFAULT_EOL`], `"\r\n"` for CRLF documents). A
//! [`Position`] is only meaningful relative to a specific buffer *and*
//! terminator choice: splitting a CRLF document on `"\n"` shifts every
//! character offset by the stray `\r`.
//!
//! `character` counts Unicode scalar values (Rust `char`s), not bytes and
//! not UTF-16 code units. Hosts that speak UTF-16 positions must convert
//! before calling in.
//!
//! ```
//! use linespan_core::{DEFAULT_EOL, Position, Range, replace_by_range, slice_by_range};
//!
//! let text = "line1\nline2\nline3";
//! let range = Range::new(Position::new(0, 2), Position::new(2, 3));
//!
//! assert_eq!(slice_by_range(text, range, DEFAULT_EOL).unwrap(), "ne1\nline2\nlin");
//!
//! let replaced = replace_by_range(text, range, "X", DEFAULT_EOL).unwrap();
//! assert_eq!(replaced, "liXe3");
//! assert_eq!(text, "line1\nline2\nline3"); // input untouched
//! ```
//!
//! Out-of-bounds indices and inverted ranges are hard errors
//! ([`RangeError`]), never silently clamped.

pub mod edit;
pub mod range;
pub mod rows;

pub use edit::{RangeError, replace_by_range, slice_by_range, slice_rows_by_range};
pub use range::{Position, Range};
pub use rows::{DEFAULT_EOL, detect_line_ending};
