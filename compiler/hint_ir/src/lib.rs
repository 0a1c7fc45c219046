//! Hint IR - shared data types for the declarative hint front-end.
//!
//! This crate holds the values that flow between the lexer, the parser and
//! whoever consumes a parsed hint file:
//! - Spans for source locations
//! - Tokens and their kinds
//! - The rule model (hint rules, fixes, conditions, options)
//!
//! Every type is an immutable value with `Clone`, `Eq` and `Debug`, so a parse
//! result can be compared, cached and sent across threads without ceremony.
//! Text is never copied into tokens; consumers slice the original source
//! with the recorded spans.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod rule;
mod span;
mod token;

pub use rule::{Condition, FixDescription, HintRule, Options, ParamKind};
pub use span::Span;
pub use token::{Token, TokenKind};
