//! The `check` command: lex and parse hint files, report diagnostics.

use hint_diagnostic::emitter::{
    DiagnosticEmitter, FileDiagnostics, JsonEmitter, TerminalEmitter, Totals,
};
use hint_parse::{ParseResult, PredicateTable};
use rayon::prelude::*;
use tracing::debug;

use super::read_source;
use crate::options::{CliOptions, OutputFormat};

/// A successfully read and parsed file.
pub struct CheckedFile {
    pub source: String,
    pub result: ParseResult,
}

/// Outcome of checking one path.
pub struct FileReport {
    pub path: String,
    /// The parsed file, or the message explaining why it could not be read.
    pub outcome: Result<CheckedFile, String>,
}

/// Read and parse every path in parallel, keeping the input order.
///
/// Each file gets its own lexer, parser and prepared resolver.
pub fn check_sources(paths: &[String], table: &PredicateTable) -> Vec<FileReport> {
    paths
        .par_iter()
        .map(|path| {
            let outcome = read_source(path).map(|source| {
                let result = hint_parse::parse_source(&source, table);
                debug!(path = %path, rules = result.rules.len(), "checked");
                CheckedFile { source, result }
            });
            FileReport {
                path: path.clone(),
                outcome,
            }
        })
        .collect()
}

/// Check every path in `options` and render diagnostics.
///
/// Returns `true` when any file had errors or could not be read.
pub fn check_files(options: &CliOptions) -> bool {
    let reports = check_sources(&options.paths, &options.predicate_table());
    let totals = match options.format {
        OutputFormat::Text => {
            let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
            emit_reports(&mut TerminalEmitter::stderr(options.color, is_tty), &reports)
        }
        OutputFormat::Json => emit_reports(&mut JsonEmitter::new(std::io::stdout()), &reports),
    };
    debug!(
        files = totals.files,
        errors = totals.errors,
        warnings = totals.warnings,
        "check finished"
    );
    totals.errors > 0
}

/// Feed every report to `emitter`, in input order.
pub fn emit_reports(emitter: &mut dyn DiagnosticEmitter, reports: &[FileReport]) -> Totals {
    for report in reports {
        match &report.outcome {
            Ok(file) => emitter.emit_file(FileDiagnostics {
                path: &report.path,
                source: &file.source,
                diagnostics: &file.result.errors,
            }),
            Err(reason) => emitter.emit_unreadable(&report.path, reason),
        }
    }
    emitter.finish()
}
