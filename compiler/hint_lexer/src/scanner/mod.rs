//! Hand-written scanner producing one [`Token`] per call.
//!
//! At each position, in priority order:
//! 1. whitespace run
//! 2. `$variable`
//! 3. block token from [`BLOCKS`] (comments, `<? ?>`, `<! >`, literals)
//! 4. operator from [`OPERATORS`], with boundary checks for words, `!=`
//!    and the `::` disambiguation
//! 5. otherwise a snippet, which runs until one of the above starts
//!
//! The scanner never fails. Unterminated blocks run to end of input and
//! unknown text becomes snippet content.

use hint_ir::{Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::table::{len_u32, BLOCKS, OPERATORS};

/// A token recognised at a position, plus where scanning resumes.
///
/// `resume` differs from `span.end` for code blocks, whose span excludes
/// the closing `?>`.
#[derive(Clone, Copy, Debug)]
struct Recognized {
    kind: TokenKind,
    span: Span,
    resume: u32,
}

pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> Self {
        Scanner { cursor }
    }

    pub(crate) fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token, or `None` once the source is exhausted.
    pub(crate) fn next_token(&mut self) -> Option<Token> {
        if self.cursor.is_eof() {
            return None;
        }

        let start = self.cursor.pos();
        let current = self.cursor.current();

        if current.is_ascii_whitespace() {
            self.cursor.eat_whitespace();
            return Some(Token::new(
                TokenKind::Whitespace,
                Span::new(start, self.cursor.pos()),
            ));
        }

        if current == 0 {
            // Interior NUL
            self.cursor.advance();
            return Some(Token::new(
                TokenKind::Error,
                Span::new(start, self.cursor.pos()),
            ));
        }

        if let Some(found) = self.recognize(start) {
            self.cursor.set_pos(found.resume);
            return Some(Token::new(found.kind, found.span));
        }

        Some(self.snippet(start))
    }

    fn recognize(&self, pos: u32) -> Option<Recognized> {
        self.variable(pos)
            .or_else(|| self.block(pos))
            .or_else(|| self.operator(pos))
    }

    // ─── Variables ─────────────────────────────────────────────────

    fn variable(&self, pos: u32) -> Option<Recognized> {
        let c = &self.cursor;
        if c.byte_at(pos) != b'$' || !crate::cursor::is_variable_byte(c.byte_at(pos + 1)) {
            return None;
        }
        let end = c.variable_end(pos + 1);
        Some(Recognized {
            kind: TokenKind::Variable,
            span: Span::new(pos, end),
            resume: end,
        })
    }

    // ─── Blocks ────────────────────────────────────────────────────

    fn block(&self, pos: u32) -> Option<Recognized> {
        let c = &self.cursor;
        let rule = BLOCKS
            .iter()
            .find(|rule| c.starts_with_at(pos, rule.prefix))?;

        let prefix_len = len_u32(rule.prefix);
        let term_len = len_u32(rule.terminator);
        // The terminator may share bytes with the prefix (`<?>`, `/*/`) but
        // must end after it.
        let search_from = (pos + 1).max(pos + prefix_len + 1 - term_len);
        let (end, terminated) = match c.find_from(search_from, rule.terminator) {
            Some(found) => (found + term_len, true),
            None => (c.source_len(), false),
        };

        let span = if rule.kind == TokenKind::CodeBlock {
            let content_start = pos + prefix_len;
            let content_end = if terminated { end - term_len } else { end };
            if content_end < content_start {
                // Degenerate `<?>`
                Span::point(content_end)
            } else {
                Span::new(content_start, content_end)
            }
        } else {
            Span::new(pos, end)
        };

        Some(Recognized {
            kind: rule.kind,
            span,
            resume: end,
        })
    }

    // ─── Operators ─────────────────────────────────────────────────

    fn operator(&self, pos: u32) -> Option<Recognized> {
        let c = &self.cursor;
        let (text, kind) = OPERATORS.iter().copied().find(|&(text, kind)| {
            c.starts_with_at(pos, text) && self.operator_applies(pos, text, kind)
        })?;
        let end = pos + len_u32(text);
        Some(Recognized {
            kind,
            span: Span::new(pos, end),
            resume: end,
        })
    }

    fn operator_applies(&self, pos: u32, text: &[u8], kind: TokenKind) -> bool {
        let c = &self.cursor;
        match kind {
            TokenKind::DoubleColon => self.double_colon_separates(pos),
            // `!=` belongs to the embedded language
            TokenKind::Not => c.byte_at(pos + 1) != b'=',
            TokenKind::InstanceOf | TokenKind::Otherwise => c.word_at(pos, text),
            // A `:` that starts a rejected `::` is snippet text
            TokenKind::Colon => c.byte_at(pos + 1) != b':',
            _ => true,
        }
    }

    /// Decide whether the `::` at `pos` introduces conditions or is a member
    /// reference inside a snippet (`String::valueOf`).
    ///
    /// It separates when what follows looks like a condition: an identifier
    /// run ending in `(`, `&`, `!` or `instanceof`, or `otherwise ;;`.
    fn double_colon_separates(&self, pos: u32) -> bool {
        let c = &self.cursor;
        let after = c.whitespace_end(pos + 2);

        if c.word_at(after, b"otherwise") {
            let tail = c.whitespace_end(after + len_u32(b"otherwise"));
            if c.starts_with_at(tail, b";;") {
                return true;
            }
        }

        let run_end = c.variable_end(after);
        let next = c.whitespace_end(run_end);
        match c.byte_at(next) {
            b'(' | b'&' | b'!' => true,
            b'i' => c.starts_with_at(next, b"instanceof"),
            _ => false,
        }
    }

    // ─── Snippets ──────────────────────────────────────────────────

    /// Scan a snippet starting at `start`, where nothing else matched.
    ///
    /// Interior whitespace stays in the snippet; whitespace before the token
    /// that ends it is left for a separate whitespace token.
    fn snippet(&mut self, start: u32) -> Token {
        let c = self.cursor;
        let len = c.source_len();
        let mut pos = start;
        let mut content_end = start;

        while pos < len {
            let b = c.byte_at(pos);
            if b.is_ascii_whitespace() {
                pos += 1;
                continue;
            }
            if pos > start && (b == 0 || self.recognize(pos).is_some()) {
                break;
            }
            if b == b':' && c.byte_at(pos + 1) == b':' {
                // Rejected `::`, both colons are content
                pos += 2;
            } else {
                pos += 1;
            }
            content_end = pos;
        }

        self.cursor.set_pos(content_end);
        Token::new(TokenKind::Snippet, Span::new(start, content_end))
    }
}

#[cfg(test)]
mod tests;
