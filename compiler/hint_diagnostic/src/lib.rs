//! Diagnostics for hint files.
//!
//! Every problem the front-end finds is a value, never a panic. A
//! [`Diagnostic`] carries a searchable [`ErrorCode`], the span it is about
//! and, for unresolved conditions, the resolver's reason. The parse result
//! collects them; the [`emitter`]s render them per file.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{ignored_text, unresolved_condition, unterminated_block, Diagnostic, Severity};
pub use error_code::ErrorCode;
