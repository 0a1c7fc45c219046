//! Codes for hint file diagnostics.
//!
//! The first digit is the phase that finds the problem: `E0xxx` while
//! lexing, `E1xxx` while walking rules.

use std::fmt;

use serde::Serialize;

use crate::Severity;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum ErrorCode {
    /// A `<? ?>`, `<! >`, quoted literal or block comment never closes.
    E0001,
    /// A free-text condition does not bind to a known predicate.
    E1001,
    /// Text skipped between the end of a rule part and the next `=>` or `;;`.
    E1002,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
        }
    }

    /// Severity every diagnostic with this code is reported at.
    ///
    /// Only an unresolved condition is an error: it turns its rule or fix
    /// into one that never matches. The others leave the rule usable.
    pub fn severity(self) -> Severity {
        match self {
            ErrorCode::E1001 => Severity::Error,
            ErrorCode::E0001 | ErrorCode::E1002 => Severity::Warning,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
