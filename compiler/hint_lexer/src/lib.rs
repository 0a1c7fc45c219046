//! Lexer for the declarative hint language.
//!
//! Turns hint source text into a stream of [`Token`]s covering the source.
//! Lexing never fails: unterminated blocks run to end of input, unknown text
//! becomes [`TokenKind::Snippet`] content, and interior NUL bytes become
//! [`TokenKind::Error`] tokens.
//!
//! Tokens appear in source order and never overlap. Apart from the `<?`/`?>`
//! delimiters of code blocks, the tokens tile the source exactly.

mod cursor;
mod scanner;
mod table;

use hint_ir::{Token, TokenKind};
use tracing::{debug, trace};

pub use cursor::Cursor;
pub use table::{block_rule, BlockRule};

use scanner::Scanner;

/// Streaming lexer over a source string.
///
/// Each call to [`Iterator::next`] yields one token, whitespace and comments
/// included. The grammar layer filters trivia itself.
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Lexer<'a> {
    /// Lex `source` from the beginning.
    pub fn new(source: &'a str) -> Self {
        Lexer::resume(source, 0)
    }

    /// Lex `source` starting at byte `offset`.
    ///
    /// `offset` should be a value [`Lexer::offset`] reported on an earlier
    /// lex of the same source. Lexing then continues exactly as that run did.
    pub fn resume(source: &'a str, offset: u32) -> Self {
        Lexer {
            scanner: Scanner::new(Cursor::at(source, offset)),
        }
    }

    /// Byte offset where the next token starts.
    pub fn offset(&self) -> u32 {
        self.scanner.pos()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.scanner.next_token()?;
        trace!(kind = %token.kind, span = ?token.span, "token");
        Some(token)
    }
}

/// Lex the whole source into a vector.
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    debug!(bytes = source.len(), tokens = tokens.len(), "lexed");
    tokens
}

/// Whether a block token found its terminator before end of input.
///
/// Operators, snippets and variables are always complete.
pub fn is_terminated(source: &str, token: &Token) -> bool {
    let Some(rule) = block_rule(token.kind) else {
        return true;
    };
    if token.kind == TokenKind::CodeBlock {
        // The span excludes `?>`, so look just past it.
        let end = token.span.end as usize;
        return source
            .get(end..)
            .is_some_and(|rest| rest.as_bytes().starts_with(rule.terminator));
    }
    let text = token.text(source).as_bytes();
    text.len() > rule.prefix.len() && text.ends_with(rule.terminator)
}
