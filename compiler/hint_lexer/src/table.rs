//! Fixed-text tables driving the scanner.

use hint_ir::TokenKind;

/// A token that runs from a fixed prefix to a fixed terminator.
///
/// Content is consumed verbatim: there is no escape handling, so the first
/// terminator after the prefix ends the block.
#[derive(Clone, Copy, Debug)]
pub struct BlockRule {
    pub prefix: &'static [u8],
    pub terminator: &'static [u8],
    pub kind: TokenKind,
    /// Human name used in diagnostics.
    pub what: &'static str,
}

impl BlockRule {
    /// Printable terminator, for diagnostics.
    pub fn terminator_text(&self) -> &'static str {
        std::str::from_utf8(self.terminator).unwrap_or("")
    }
}

/// Block tokens, checked in order at each position.
pub static BLOCKS: [BlockRule; 6] = [
    BlockRule {
        prefix: b"/*",
        terminator: b"*/",
        kind: TokenKind::BlockComment,
        what: "block comment",
    },
    BlockRule {
        prefix: b"//",
        terminator: b"\n",
        kind: TokenKind::LineComment,
        what: "line comment",
    },
    BlockRule {
        prefix: b"<?",
        terminator: b"?>",
        kind: TokenKind::CodeBlock,
        what: "code block",
    },
    BlockRule {
        prefix: b"<!",
        terminator: b">",
        kind: TokenKind::OptionsBlock,
        what: "options block",
    },
    BlockRule {
        prefix: b"'",
        terminator: b"'",
        kind: TokenKind::CharLiteral,
        what: "character literal",
    },
    BlockRule {
        prefix: b"\"",
        terminator: b"\"",
        kind: TokenKind::StringLiteral,
        what: "string literal",
    },
];

/// Operator tokens in priority order. Longer spellings sharing a prefix come
/// first (`::` before `:`).
pub static OPERATORS: [(&[u8], TokenKind); 9] = [
    (b"=>", TokenKind::LeadsTo),
    (b"::", TokenKind::DoubleColon),
    (b"&&", TokenKind::And),
    (b"!", TokenKind::Not),
    (b";;", TokenKind::DoubleSemicolon),
    (b"%%", TokenKind::DoublePercent),
    (b"instanceof", TokenKind::InstanceOf),
    (b"otherwise", TokenKind::Otherwise),
    (b":", TokenKind::Colon),
];

/// The block rule producing `kind`, if `kind` is a block token.
pub fn block_rule(kind: TokenKind) -> Option<&'static BlockRule> {
    BLOCKS.iter().find(|rule| rule.kind == kind)
}

/// Length in bytes of a table entry. Every entry is a few bytes long.
#[inline]
pub(crate) fn len_u32(bytes: &[u8]) -> u32 {
    u32::try_from(bytes.len()).unwrap_or(u32::MAX)
}
