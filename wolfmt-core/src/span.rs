//! Span arithmetic and block resolution.
//!
//! A [`Span`] is a half-open byte range into a text buffer, the unit the
//! rewrite engine operates on. [`resolve_block`] computes the span of the
//! "current block": the maximal run of text between the two nearest
//! blank-line boundaries around a cursor position, falling back to the
//! buffer edges when no boundary exists in one direction.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A contiguous half-open byte range `[start, end)` into a text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Creates a span, swapping the endpoints if given in reverse order.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// The span covering all of `text`.
    pub fn whole(text: &str) -> Self {
        Self { start: 0, end: text.len() }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Clamps the span into `text`, snapping both endpoints down to the
    /// nearest character boundary.
    pub fn clamp_to(&self, text: &str) -> Self {
        let start = floor_char_boundary(text, self.start.min(text.len()));
        let end = floor_char_boundary(text, self.end.min(text.len()));
        Self::new(start, end)
    }

    /// The text this span covers. The span must already be clamped to `text`.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// A blank-line boundary: a newline, optional horizontal whitespace, newline.
static BLOCK_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

/// Resolves the block containing `cursor`: the maximal run of text between
/// the nearest blank-line boundaries, defaulting to the buffer start/end
/// where no boundary exists in that direction.
///
/// A cursor sitting inside a boundary itself belongs to no block and
/// resolves to the empty span at the cursor; rewriting an empty span is a
/// no-op.
pub fn resolve_block(text: &str, cursor: usize) -> Span {
    let cursor = floor_char_boundary(text, cursor.min(text.len()));

    let mut start = 0;
    let mut end = text.len();
    for boundary in BLOCK_BOUNDARY.find_iter(text) {
        if boundary.end() <= cursor {
            start = boundary.end();
        } else if boundary.start() >= cursor {
            end = boundary.start();
            break;
        } else {
            return Span::new(cursor, cursor);
        }
    }
    Span::new(start, end)
}
