//! Copyable cursor over a folded buffer.
//!
//! The cursor is an immutable `&str` plus a byte offset that only moves
//! forward. Consumed text is never revisited and never reallocated; every
//! consuming method returns the span it stepped over as a borrowed slice.
//!
//! # Invariant
//!
//! `pos` always sits on a UTF-8 character boundary with `pos <= buf.len()`.
//! Methods that advance by characters maintain this automatically;
//! [`advance_n`](Cursor::advance_n) takes a byte count and rounds up to the
//! next boundary.

/// Read position over a folded buffer.
///
/// Created via [`FoldedSource::cursor()`](crate::FoldedSource::cursor).
/// The cursor is [`Copy`], so a scan can snapshot it and compare offsets.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(buf: &'a str) -> Self {
        Self::at(buf, 0)
    }

    /// Create a cursor resuming at byte offset `pos`.
    pub(crate) fn at(buf: &'a str, pos: usize) -> Self {
        debug_assert!(
            buf.is_char_boundary(pos),
            "cursor offset {pos} is not a char boundary"
        );
        Self { buf, pos }
    }

    /// Returns the character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The unconsumed remainder of the buffer.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.buf[self.pos..]
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Advance by `n` bytes.
    ///
    /// Clamped to the end of the buffer. An offset that lands inside a
    /// multi-byte character moves forward to the end of that character.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        let mut pos = self.pos.saturating_add(n).min(self.buf.len());
        while !self.buf.is_char_boundary(pos) {
            pos += 1;
        }
        self.pos = pos;
    }

    /// Advance past one full character. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume up to `n` characters and return them.
    ///
    /// Stops early at EOF, so the returned slice may hold fewer than `n`.
    pub fn take(&mut self, n: usize) -> &'a str {
        let start = self.pos;
        let rest = self.rest();
        let len = rest
            .char_indices()
            .nth(n)
            .map_or(rest.len(), |(offset, _)| offset);
        self.pos += len;
        self.slice_from(start)
    }

    /// Consume characters while `pred` holds and return the consumed run.
    ///
    /// Returns an empty slice (without moving) if the current character
    /// fails `pred` or the cursor is at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(offset, _)| offset);
        self.pos += len;
        self.slice_from(start)
    }

    /// Skip a run of Unicode whitespace.
    #[inline]
    pub fn eat_whitespace(&mut self) -> &'a str {
        self.eat_while(char::is_whitespace)
    }

    /// Extract `start..end` from the underlying buffer.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start..end]
    }

    /// Extract from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }
}
