//! Boundary to the condition resolver.
//!
//! The parser recognizes `otherwise` and `$var instanceof Type` itself. Any
//! other condition is free text, and only a resolver can say whether it names
//! a known predicate. Resolution happens in two steps:
//!
//! 1. [`ConditionResolver::prepare`] runs once per parse, after the code
//!    blocks are collected, and returns a [`PredicateBinder`]. This is where
//!    a resolver compiles or indexes custom predicate code.
//! 2. [`PredicateBinder::bind`] runs for each free-text condition.
//!
//! The binder lives only for the parse call that prepared it.

use hint_ir::Condition;
use thiserror::Error;

use crate::CodeBlocks;

/// A free-text condition handed to the binder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PredicateRequest<'a> {
    /// Condition text with surrounding whitespace and a leading `!` removed.
    pub text: &'a str,
    /// Whether the condition was prefixed with `!`.
    pub negated: bool,
    /// Byte offset of `text` in the source.
    pub offset: u32,
}

/// Why a free-text condition could not be bound.
///
/// The parser turns these into `E1001` diagnostics and replaces the
/// condition with [`Condition::AlwaysFalse`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("no predicate named `{name}`")]
    UnknownPredicate { name: String },
    #[error("`{text}` is not a predicate invocation")]
    MalformedInvocation { text: String },
    #[error("predicate `{name}` expects {expected}, found {found}")]
    WrongArity {
        name: String,
        expected: String,
        found: usize,
    },
}

/// Binds free-text conditions for a single parse.
pub trait PredicateBinder {
    fn bind(&mut self, request: &PredicateRequest<'_>) -> Result<Condition, BindError>;
}

/// Produces a binder once the file's code blocks are known.
pub trait ConditionResolver {
    type Binder: PredicateBinder;

    /// Set up binding for one parse of `source`.
    fn prepare(&self, source: &str, code: &CodeBlocks) -> Self::Binder;
}
