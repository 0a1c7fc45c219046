//! Rendering the diagnostics of a batch of hint files.
//!
//! An emitter is fed one file at a time, in the order the files were named,
//! and finishes with the totals over the whole batch:
//! - [`TerminalEmitter`]: source excerpts with underlined spans
//! - [`JsonEmitter`]: one JSON report for editors and scripts

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::{Diagnostic, Severity};

/// One readable hint file and what was found in it.
#[derive(Clone, Copy, Debug)]
pub struct FileDiagnostics<'a> {
    pub path: &'a str,
    pub source: &'a str,
    pub diagnostics: &'a [Diagnostic],
}

/// Counts over every file an emitter has seen.
///
/// A file that could not be read counts as one error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl Totals {
    fn add_file(&mut self, diagnostics: &[Diagnostic]) {
        self.files += 1;
        for diagnostic in diagnostics {
            match diagnostic.severity {
                Severity::Error => self.errors += 1,
                Severity::Warning => self.warnings += 1,
            }
        }
    }

    fn add_unreadable(&mut self) {
        self.files += 1;
        self.errors += 1;
    }
}

pub trait DiagnosticEmitter {
    /// Render the diagnostics of one file.
    fn emit_file(&mut self, file: FileDiagnostics<'_>);

    /// Report a file that could not be read, with the reason.
    fn emit_unreadable(&mut self, path: &str, reason: &str);

    /// Write whatever closes the output and return the totals.
    fn finish(&mut self) -> Totals;
}
