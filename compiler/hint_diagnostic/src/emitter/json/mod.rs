//! Machine-readable output: one JSON report for the whole batch.
//!
//! ```json
//! {
//!   "files": [
//!     { "path": "rules.hint", "diagnostics": [ { "code": "E1001", ... } ] },
//!     { "path": "gone.hint", "error": "cannot find file 'gone.hint'", "diagnostics": [] }
//!   ],
//!   "files_checked": 2,
//!   "error_count": 2,
//!   "warning_count": 0
//! }
//! ```
//!
//! Every diagnostic carries both byte offsets and a 1-based line and column,
//! so editors can use whichever they index by.

use std::io::Write;

use serde::Serialize;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, ErrorCode, Severity};

use super::{DiagnosticEmitter, FileDiagnostics, Totals};

#[derive(Serialize)]
struct ReportJson<'a> {
    files: &'a [FileJson],
    files_checked: usize,
    error_count: usize,
    warning_count: usize,
}

#[derive(Serialize)]
struct FileJson {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    diagnostics: Vec<DiagnosticJson>,
}

#[derive(Serialize)]
struct DiagnosticJson {
    code: ErrorCode,
    severity: Severity,
    message: String,
    start: u32,
    end: u32,
    line: u32,
    column: u32,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl DiagnosticJson {
    fn new(source: &str, lines: &LineOffsetTable, diag: &Diagnostic) -> Self {
        let (line, column) = lines.offset_to_line_col(source, diag.span.start);
        DiagnosticJson {
            code: diag.code,
            severity: diag.severity,
            message: diag.message.clone(),
            start: diag.span.start,
            end: diag.span.end,
            line,
            column,
            label: diag.label.clone(),
            note: diag.note.clone(),
        }
    }
}

/// Collects every file and writes the report on [`finish`](DiagnosticEmitter::finish).
pub struct JsonEmitter<W: Write> {
    writer: W,
    files: Vec<FileJson>,
    totals: Totals,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            files: Vec::new(),
            totals: Totals::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit_file(&mut self, file: FileDiagnostics<'_>) {
        self.totals.add_file(file.diagnostics);
        let lines = LineOffsetTable::build(file.source);
        self.files.push(FileJson {
            path: file.path.to_owned(),
            error: None,
            diagnostics: file
                .diagnostics
                .iter()
                .map(|diag| DiagnosticJson::new(file.source, &lines, diag))
                .collect(),
        });
    }

    fn emit_unreadable(&mut self, path: &str, reason: &str) {
        self.totals.add_unreadable();
        self.files.push(FileJson {
            path: path.to_owned(),
            error: Some(reason.to_owned()),
            diagnostics: Vec::new(),
        });
    }

    fn finish(&mut self) -> Totals {
        let report = ReportJson {
            files: &self.files,
            files_checked: self.totals.files,
            error_count: self.totals.errors,
            warning_count: self.totals.warnings,
        };
        if serde_json::to_writer_pretty(&mut self.writer, &report).is_ok() {
            let _ = writeln!(self.writer);
        }
        let _ = self.writer.flush();
        self.totals
    }
}
