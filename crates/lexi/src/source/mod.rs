//! Owned, case-folded input buffer.
//!
//! Folding happens exactly once, when the buffer is built. Everything
//! downstream (cursor, spans, special-term matching) works on the folded
//! text, so offsets never refer back to the caller's original string.

use crate::{Cursor, Span};

/// Lowercase `text` using full Unicode case mapping.
///
/// This is the only normalization applied anywhere. Special terms are folded
/// with the same function so comparisons stay consistent.
#[inline]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// The lowercased copy of a tokenizer's input.
///
/// Read-only after construction. Consumption is tracked by a [`Cursor`]
/// offset, never by truncating the buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoldedSource {
    text: String,
}

impl FoldedSource {
    /// Fold `content` into a new owned buffer.
    pub fn new(content: &str) -> Self {
        Self {
            text: fold_case(content),
        }
    }

    /// The folded text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the folded text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the folded text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text)
    }

    /// Create a [`Cursor`] resuming at byte offset `pos`.
    ///
    /// `pos` must lie on a character boundary within the buffer.
    pub(crate) fn cursor_at(&self, pos: usize) -> Cursor<'_> {
        Cursor::at(&self.text, pos)
    }

    /// Text covered by `span`.
    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.range()]
    }
}

#[cfg(test)]
mod tests;
