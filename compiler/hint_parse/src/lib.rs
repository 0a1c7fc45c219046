//! Recursive descent parser for hint files.
//!
//! Parsing runs in two passes over one token slice:
//! 1. [`collect_code_blocks`] finds the imports block and free code blocks.
//! 2. The resolver is prepared with those blocks, then [`parse_rules`]
//!    walks the grammar and binds free-text conditions.
//!
//! [`parse`] runs both. Parsing never fails: problems are collected as
//! diagnostics next to a best-effort result, and a file cut off mid-rule
//! yields the rules read so far.

mod code_blocks;
mod cursor;
mod grammar;
mod options;
mod predicates;
mod resolver;

pub use code_blocks::{collect_code_blocks, CodeBlocks};
pub use cursor::TokenCursor;
pub use grammar::parse_rules;
pub use options::parse_options;
pub use predicates::{declared_predicates, Arity, PredicateTable, TableBinder};
pub use resolver::{BindError, ConditionResolver, PredicateBinder, PredicateRequest};

use hint_diagnostic::Diagnostic;
use hint_ir::{HintRule, Options, Span, Token};
use tracing::debug_span;

/// Everything read from one hint file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Options blocks found where a rule would start.
    pub global_options: Options,
    /// Content span of the imports code block.
    pub imports_span: Option<Span>,
    /// Rules in file order.
    pub rules: Vec<HintRule>,
    /// Content spans of the other code blocks, in file order.
    pub free_code_block_spans: Vec<Span>,
    /// Diagnostics ordered by position.
    pub errors: Vec<Diagnostic>,
}

impl ParseResult {
    /// Whether any diagnostic is an error (warnings don't count).
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Diagnostic::is_error)
    }
}

/// Parse a lexed hint file.
///
/// The resolver is prepared exactly once, after code blocks are collected
/// and before the first condition is bound.
pub fn parse<R: ConditionResolver>(source: &str, tokens: &[Token], resolver: &R) -> ParseResult {
    let code = collect_code_blocks(tokens);
    let mut binder = {
        let _span = debug_span!(
            "prepare_resolver",
            imports = code.imports.is_some(),
            free = code.free.len()
        )
        .entered();
        resolver.prepare(source, &code)
    };
    parse_rules(source, tokens, &code, &mut binder)
}

/// Lex and parse `source`.
pub fn parse_source<R: ConditionResolver>(source: &str, resolver: &R) -> ParseResult {
    let tokens = hint_lexer::tokenize(source);
    parse(source, &tokens, resolver)
}
