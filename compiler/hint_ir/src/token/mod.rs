//! Token types for the hint lexer.
//!
//! A token is a classified span of the source. Tokens never copy text: the
//! text a token covers is recovered with [`Token::text`].

use std::fmt;

use crate::Span;

/// Token classification.
///
/// The set is closed. Operators carry no payload because their text is
/// fixed; everything else is recovered from the source by span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `'...'`, span includes the quotes.
    CharLiteral,
    /// `"..."`, span includes the quotes.
    StringLiteral,
    /// `:`
    Colon,
    /// `::` introducing a condition chain.
    DoubleColon,
    /// `=>`
    LeadsTo,
    /// `&&`
    And,
    /// `instanceof`
    InstanceOf,
    /// `otherwise`
    Otherwise,
    /// `!`
    Not,
    /// `;;`
    DoubleSemicolon,
    /// `%%`
    DoublePercent,
    /// `$name`
    Variable,
    /// Opaque run of embedded source.
    Snippet,
    Whitespace,
    /// `// ...` including the terminating newline.
    LineComment,
    /// `/* ... */`
    BlockComment,
    /// `<? ... ?>`, span excludes both delimiters.
    CodeBlock,
    /// `<! ... >`, span includes the delimiters.
    OptionsBlock,
    /// Byte the lexer cannot classify (interior NUL).
    Error,
}

impl TokenKind {
    /// Whitespace and comments, which the grammar never sees.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// The fixed source text of an operator kind.
    pub fn fixed_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Colon => Some(":"),
            TokenKind::DoubleColon => Some("::"),
            TokenKind::LeadsTo => Some("=>"),
            TokenKind::And => Some("&&"),
            TokenKind::InstanceOf => Some("instanceof"),
            TokenKind::Otherwise => Some("otherwise"),
            TokenKind::Not => Some("!"),
            TokenKind::DoubleSemicolon => Some(";;"),
            TokenKind::DoublePercent => Some("%%"),
            _ => None,
        }
    }

    /// Short lowercase name used in dumps and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::CharLiteral => "char-literal",
            TokenKind::StringLiteral => "string-literal",
            TokenKind::Colon => "colon",
            TokenKind::DoubleColon => "double-colon",
            TokenKind::LeadsTo => "leads-to",
            TokenKind::And => "and",
            TokenKind::InstanceOf => "instanceof",
            TokenKind::Otherwise => "otherwise",
            TokenKind::Not => "not",
            TokenKind::DoubleSemicolon => "double-semicolon",
            TokenKind::DoublePercent => "double-percent",
            TokenKind::Variable => "variable",
            TokenKind::Snippet => "snippet",
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment => "line-comment",
            TokenKind::BlockComment => "block-comment",
            TokenKind::CodeBlock => "code-block",
            TokenKind::OptionsBlock => "options-block",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Byte offset of the first covered byte.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.span.start
    }

    /// Number of covered bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// The source text this token covers.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    // TokenKind (1 byte) + padding + Span (8 bytes)
    crate::static_assert_size!(Token, 12);
}
