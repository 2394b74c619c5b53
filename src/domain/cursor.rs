// ============================================================================
// Parse Cursor
// Read position into a caller-owned byte buffer
// ============================================================================

/// A position into a caller-owned byte buffer.
///
/// Lexers read forward from `position()` and advance one byte per digit
/// consumed. On failure they rewind to the position held on entry, so a
/// cursor is never left partially advanced.
///
/// Reading past the end of the buffer yields `None`, which lexers treat the
/// same way as a non-digit byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ParseCursor<'a> {
    /// Create a cursor at the start of `buffer`.
    #[inline]
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Create a cursor at `position` within `buffer`.
    ///
    /// The position is clamped to the buffer length.
    #[inline]
    pub fn at(buffer: &'a [u8], position: usize) -> Self {
        Self {
            buffer,
            position: position.min(buffer.len()),
        }
    }

    /// Current offset into the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buffer[self.position..]
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.buffer.len()
    }

    /// Byte at the cursor, or `None` past the end.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buffer.get(self.position).copied()
    }

    /// Byte `offset` bytes ahead of the cursor, or `None` past the end.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.position
            .checked_add(offset)
            .and_then(|index| self.buffer.get(index))
            .copied()
    }

    /// Advance by one byte. Does nothing at the end of the buffer.
    #[inline]
    pub fn bump(&mut self) {
        if self.position < self.buffer.len() {
            self.position += 1;
        }
    }

    /// Advance by `count` bytes, stopping at the end of the buffer.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        self.position = self.position.saturating_add(count).min(self.buffer.len());
    }

    /// Move back to a position previously read from `position()`.
    #[inline]
    pub fn rewind_to(&mut self, position: usize) {
        self.position = position.min(self.buffer.len());
    }
}

impl<'a> From<&'a [u8]> for ParseCursor<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        Self::new(buffer)
    }
}

impl<'a> From<&'a str> for ParseCursor<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}
