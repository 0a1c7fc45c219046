//! Problems found in a hint file.
//!
//! Each [`Diagnostic`] points at one span of the file: a condition that
//! never matches, a block that never closes, or text the grammar ignores.
//! Only the constructors below create them, so every code always carries
//! the same severity and wording.

use std::fmt;

use hint_ir::Span;
use serde::Serialize;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule or fix it points into can never match.
    Error,
    /// The file still parses the way its author most likely meant.
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    /// Headline, e.g. `cannot resolve condition`.
    pub message: String,
    /// The condition, block or ignored text.
    pub span: Span,
    /// Shown next to the underlined span.
    pub label: String,
    /// Why, when something more specific is known.
    pub note: Option<String>,
}

impl Diagnostic {
    #[cold]
    fn new(code: ErrorCode, span: Span, message: String, label: String) -> Self {
        Diagnostic {
            code,
            severity: code.severity(),
            message,
            span,
            label,
            note: None,
        }
    }

    fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// `error[E1001] 6..25: cannot resolve condition (no predicate named ...)`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity, self.code, self.span, self.message
        )?;
        if let Some(note) = &self.note {
            write!(f, " ({note})")?;
        }
        Ok(())
    }
}

/// A free-text condition the resolver could not bind.
///
/// `reason` is the resolver's explanation.
pub fn unresolved_condition(span: Span, reason: impl Into<String>) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E1001,
        span,
        "cannot resolve condition".to_owned(),
        "this condition never matches".to_owned(),
    )
    .with_note(reason)
}

/// A delimited block that ran to end of input.
///
/// `what` names the block (`code block`, `options block`, ...) and
/// `terminator` is the text that should have closed it.
pub fn unterminated_block(span: Span, what: &str, terminator: &str) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E0001,
        span,
        format!("unterminated {what}"),
        format!("expected `{terminator}` before end of input"),
    )
}

/// Text the grammar skipped to reach the next `=>` or `;;`.
///
/// It follows an options block or an `otherwise`, both of which end the
/// pattern, fix or condition chain before them.
pub fn ignored_text(span: Span) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::E1002,
        span,
        "unexpected text in rule".to_owned(),
        "ignored".to_owned(),
    )
    .with_note("a rule continues with `=>` or ends with `;;`")
}
