//! Token cursor for navigating the token stream.
//!
//! The cursor indexes a materialized token slice and steps over trivia
//! (whitespace and comments), so the grammar only ever sees significant
//! tokens. Rewinding by one token is O(1).

use hint_ir::{Token, TokenKind};
use tracing::trace;

/// Cursor over the significant tokens of a token slice.
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    /// Index of the current significant token, or `tokens.len()` at end.
    pos: usize,
    /// Position before the last [`TokenCursor::advance`], for `push_back`.
    previous: Option<usize>,
}

impl<'a> TokenCursor<'a> {
    /// Create a cursor at the first significant token.
    pub fn new(tokens: &'a [Token]) -> Self {
        let mut cursor = TokenCursor {
            tokens,
            pos: 0,
            previous: None,
        };
        cursor.skip_trivia();
        cursor
    }

    /// The current significant token, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    #[inline]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    /// Check if the current token has the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.current()?;
        trace!(kind = %token.kind, span = ?token.span, "advance");
        self.previous = Some(self.pos);
        self.pos += 1;
        self.skip_trivia();
        Some(token)
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Undo the last [`TokenCursor::advance`].
    ///
    /// Only one level of rewind is kept; a second call without an
    /// intervening advance does nothing.
    pub fn push_back(&mut self) {
        if let Some(previous) = self.previous.take() {
            trace!(from = self.pos, to = previous, "push back");
            self.pos = previous;
        }
    }

    /// Start offset of the current token, or `end_offset` at end of input.
    pub fn current_offset(&self, end_offset: u32) -> u32 {
        self.current().map_or(end_offset, |t| t.span.start)
    }

    fn skip_trivia(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|t| t.kind.is_trivia())
        {
            self.pos += 1;
        }
    }
}
