//! Second pass: recursive descent over the significant tokens.
//!
//! ```text
//! file        := (codeBlock | optionsBlock | ';;')* rule*
//! rule        := displayName? pattern ('::' conditions)? leadsTo* ';;'
//! leadsTo     := '=>' displayName? pattern ('::' conditions)?
//! displayName := (charLiteral | stringLiteral) ':'
//! conditions  := condition ('&&' condition)*
//! condition   := 'otherwise'
//!              | '!'? variable 'instanceof' typeSpan
//!              | '!'? freeTextSpan
//! ```
//!
//! A `;;` directly followed by `=>` continues the current rule with another
//! fix. Options blocks after a pattern or a condition chain merge into the
//! enclosing rule or fix; at rule-start position they are global options.
//! Code blocks were collected by the first pass: inside a pattern, fix or
//! condition they are part of its text, at rule start they are skipped.

mod condition;
mod rule;

use hint_diagnostic::{unterminated_block, Diagnostic};
use hint_ir::{HintRule, Options, Span, Token, TokenKind};
use hint_lexer::{block_rule, is_terminated};
use tracing::{debug, trace};

use crate::cursor::TokenCursor;
use crate::options::parse_options;
use crate::{CodeBlocks, ParseResult, PredicateBinder};

/// Tokens that close a pattern or fix body.
const PATTERN_END: &[TokenKind] = &[
    TokenKind::LeadsTo,
    TokenKind::DoubleColon,
    TokenKind::DoubleSemicolon,
    TokenKind::OptionsBlock,
];

/// Tokens that close a single condition.
const CONDITION_END: &[TokenKind] = &[
    TokenKind::And,
    TokenKind::LeadsTo,
    TokenKind::DoubleSemicolon,
    TokenKind::OptionsBlock,
];

/// Tokens a rule resumes at after text it cannot place.
const RULE_RESUME: &[TokenKind] = &[TokenKind::LeadsTo, TokenKind::DoubleSemicolon];

/// Parser state for one pass over a token slice.
struct Parser<'a, 'b, B> {
    source: &'a str,
    source_len: u32,
    cursor: TokenCursor<'a>,
    binder: &'b mut B,
    global_options: Options,
    errors: Vec<Diagnostic>,
}

impl<'a, 'b, B: PredicateBinder> Parser<'a, 'b, B> {
    fn new(source: &'a str, tokens: &'a [Token], binder: &'b mut B) -> Self {
        Parser {
            source,
            source_len: u32::try_from(source.len()).unwrap_or(u32::MAX),
            cursor: TokenCursor::new(tokens),
            binder,
            global_options: Options::default(),
            errors: Vec::new(),
        }
    }

    fn file(&mut self) -> Vec<HintRule> {
        let mut rules = Vec::new();
        loop {
            self.skip_to_rule();
            if self.cursor.is_at_end() {
                break;
            }
            let (rule, end) = self.rule();
            match end {
                RuleEnd::Terminated => rules.push(rule),
                RuleEnd::Truncated => {
                    debug!(pattern = ?rule.pattern_span, "rule truncated at end of input");
                    if !rule.pattern_span.is_empty() {
                        rules.push(rule);
                    }
                    break;
                }
            }
        }
        rules
    }

    /// Skip code blocks and stray `;;`, collecting global options.
    fn skip_to_rule(&mut self) {
        while let Some(token) = self.cursor.current() {
            match token.kind {
                TokenKind::CodeBlock | TokenKind::DoubleSemicolon => {
                    self.cursor.advance();
                }
                TokenKind::OptionsBlock => {
                    self.cursor.advance();
                    trace!(span = ?token.span, "global options");
                    parse_options(token.text(self.source), &mut self.global_options);
                }
                _ => return,
            }
        }
    }

    /// Consume tokens up to one in `stop`, returning the covered span.
    ///
    /// The span runs from the first to the last consumed token other than a
    /// code block, so it never starts or ends with trivia or inside a
    /// block's delimiters. A code block between two such tokens is covered.
    fn span_until(&mut self, stop: &[TokenKind]) -> Option<Span> {
        let mut span: Option<Span> = None;
        while let Some(token) = self.cursor.current() {
            if stop.contains(&token.kind) {
                break;
            }
            self.cursor.advance();
            if token.kind != TokenKind::CodeBlock {
                span = Some(span.map_or(token.span, |s| s.merge(token.span)));
            }
        }
        span
    }

    /// Merge consecutive options blocks into `options`.
    fn options_into(&mut self, options: &mut Options) -> bool {
        let mut found = false;
        while let Some(block) = self.cursor.eat(TokenKind::OptionsBlock) {
            parse_options(block.text(self.source), options);
            found = true;
        }
        found
    }

    /// Start offset of the current token, or the source length at end.
    fn current_offset(&self) -> u32 {
        self.cursor.current_offset(self.source_len)
    }
}

/// How a rule ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RuleEnd {
    /// Closed by `;;`.
    Terminated,
    /// Ran into end of input.
    Truncated,
}

/// `E0001` warnings for delimited blocks that never closed.
///
/// A line comment at end of input needs no newline and is not reported.
fn unterminated_blocks(source: &str, tokens: &[Token]) -> Vec<Diagnostic> {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::LineComment && !is_terminated(source, t))
        .filter_map(|t| {
            let rule = block_rule(t.kind)?;
            Some(unterminated_block(t.span, rule.what, rule.terminator_text()))
        })
        .collect()
}

/// Run the grammar over `tokens` with a prepared binder.
///
/// `code` is the result of [`crate::collect_code_blocks`] over the same
/// tokens. Never fails: problems are reported in [`ParseResult::errors`].
pub fn parse_rules<B: PredicateBinder>(
    source: &str,
    tokens: &[Token],
    code: &CodeBlocks,
    binder: &mut B,
) -> ParseResult {
    let mut parser = Parser::new(source, tokens, binder);
    let rules = parser.file();

    let mut errors = unterminated_blocks(source, tokens);
    errors.append(&mut parser.errors);
    errors.sort_by_key(|d| d.span.start);

    debug!(
        rules = rules.len(),
        errors = errors.len(),
        "parsed hint file"
    );

    ParseResult {
        global_options: parser.global_options,
        imports_span: code.imports,
        rules,
        free_code_block_spans: code.free.clone(),
        errors,
    }
}
