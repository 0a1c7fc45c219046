//! First pass: collect embedded code blocks.
//!
//! The first `<? ?>` block seen before any rule content is the imports
//! block; every other code block is free-floating code. Both are handed to
//! the resolver before any condition is bound, because predicates declared
//! in them must be resolvable by the rules that follow.

use hint_ir::{Span, Token, TokenKind};
use tracing::debug;

/// Code blocks of a hint file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeBlocks {
    /// Content span of the imports block.
    pub imports: Option<Span>,
    /// Content spans of every other code block, in file order.
    pub free: Vec<Span>,
}

impl CodeBlocks {
    /// Every code block span, imports first.
    pub fn all(&self) -> impl Iterator<Item = Span> + '_ {
        self.imports.iter().chain(&self.free).copied()
    }
}

/// Whether a token starts or continues a rule.
///
/// Code blocks, options blocks and stray `;;` never produce a rule on
/// their own.
fn produces_rule(kind: TokenKind) -> bool {
    !kind.is_trivia()
        && !matches!(
            kind,
            TokenKind::CodeBlock | TokenKind::OptionsBlock | TokenKind::DoubleSemicolon
        )
}

/// Scan every token once and sort code blocks into imports and free code.
pub fn collect_code_blocks(tokens: &[Token]) -> CodeBlocks {
    let mut blocks = CodeBlocks::default();
    let mut seen_rule = false;

    for token in tokens {
        if token.kind == TokenKind::CodeBlock {
            if !seen_rule && blocks.imports.is_none() {
                debug!(span = ?token.span, "imports block");
                blocks.imports = Some(token.span);
            } else {
                debug!(span = ?token.span, "free code block");
                blocks.free.push(token.span);
            }
        } else if produces_rule(token.kind) {
            seen_rule = true;
        }
    }

    blocks
}
