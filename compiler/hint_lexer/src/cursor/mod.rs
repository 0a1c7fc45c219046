//! Byte cursor over hint source text.
//!
//! Every delimiter and operator of the hint language is ASCII, so the scanner
//! works on bytes. Non-ASCII bytes are always snippet content, which keeps
//! every token boundary on a character boundary.
//!
//! Reads past the end return `0x00`, so lookahead never needs its own bounds
//! check. Interior NUL bytes are told apart from EOF by comparing against
//! the source length.

/// Bytes allowed after `$` in a variable name.
#[inline]
pub(crate) fn is_variable_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Bytes that can continue an identifier of the embedded language.
///
/// Non-ASCII bytes count, so `instanceofé` is not the `instanceof` keyword.
#[inline]
pub(crate) fn is_ident_byte(b: u8) -> bool {
    is_variable_byte(b) || b >= 0x80
}

/// Cursor over a source string.
///
/// The cursor is [`Copy`], so the scanner can look ahead on a copy and only
/// commit the position it settles on.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    /// Length of the scanned source. Offsets are `u32`, so longer input is
    /// scanned up to `u32::MAX` bytes.
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self::at(source, 0)
    }

    /// Create a cursor at `pos`, clamped to the source length.
    pub fn at(source: &'a str, pos: u32) -> Self {
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        Cursor {
            buf: source.as_bytes(),
            pos: pos.min(source_len),
            source_len,
        }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte at an absolute position, `0x00` at or past EOF.
    #[inline]
    pub fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.source_len {
            self.buf[pos as usize]
        } else {
            0
        }
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Move to an absolute position, clamped to EOF.
    #[inline]
    pub fn set_pos(&mut self, pos: u32) {
        self.pos = pos.min(self.source_len);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Whether the bytes at `pos` spell `needle`.
    #[inline]
    pub fn starts_with_at(&self, pos: u32, needle: &[u8]) -> bool {
        self.rest_from(pos).starts_with(needle)
    }

    /// Whether `word` appears at `pos` as a whole identifier.
    pub fn word_at(&self, pos: u32, word: &[u8]) -> bool {
        let len = u32::try_from(word.len()).unwrap_or(u32::MAX);
        self.starts_with_at(pos, word)
            && (pos == 0 || !is_ident_byte(self.byte_at(pos - 1)))
            && !is_ident_byte(self.byte_at(pos.saturating_add(len)))
    }

    /// First occurrence of `needle` at or after `from`.
    pub fn find_from(&self, from: u32, needle: &[u8]) -> Option<u32> {
        let found = memchr::memmem::find(self.rest_from(from), needle)?;
        u32::try_from(found).ok().map(|offset| from + offset)
    }

    /// Position of the first non-whitespace byte at or after `from`.
    pub fn whitespace_end(&self, from: u32) -> u32 {
        self.scan_while(from, |b| b.is_ascii_whitespace())
    }

    /// Position after the run of variable bytes starting at `from`.
    pub fn variable_end(&self, from: u32) -> u32 {
        self.scan_while(from, is_variable_byte)
    }

    /// Consume whitespace at the current position.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.pos = self.whitespace_end(self.pos);
    }

    fn scan_while(&self, from: u32, pred: impl Fn(u8) -> bool) -> u32 {
        let rest = self.rest_from(from);
        let run = rest.iter().take_while(|&&b| pred(b)).count();
        from + u32::try_from(run).unwrap_or(0)
    }

    fn rest_from(&self, from: u32) -> &'a [u8] {
        let start = from.min(self.source_len) as usize;
        &self.buf[start..self.source_len as usize]
    }
}

#[cfg(test)]
mod tests;
