//! Human-readable output: each diagnostic as a header, the file position,
//! and the source line with its span underlined.
//!
//! ```text
//! error[E1001]: cannot resolve condition
//!  --> rules.hint:1:7
//!   |
//! 1 | $a :: nope($a) => b;;
//!   |       ^^^^^^^^ this condition never matches
//!   = note: no predicate named `nope`
//! ```

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

use super::{DiagnosticEmitter, FileDiagnostics, Totals};

/// ANSI styles.
mod style {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const GUTTER: &str = "\x1b[1;34m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// When to color terminal output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    totals: Totals,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W, colors: bool) -> Self {
        TerminalEmitter {
            writer,
            colors,
            totals: Totals::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, style: &str, text: &str) {
        if self.colors {
            let _ = write!(self.writer, "{style}{text}{}", style::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn emit(&mut self, file: &FileDiagnostics<'_>, lines: &LineOffsetTable, diag: &Diagnostic) {
        let accent = match diag.severity {
            Severity::Error => style::ERROR,
            Severity::Warning => style::WARNING,
        };

        self.paint(accent, &format!("{}[{}]", diag.severity, diag.code));
        self.paint(style::BOLD, &format!(": {}", diag.message));
        let _ = writeln!(self.writer);

        let (line, col) = lines.offset_to_line_col(file.source, diag.span.start);
        let number = line.to_string();
        let blank = " ".repeat(number.len());

        self.paint(style::GUTTER, &format!("{blank}--> "));
        let _ = writeln!(self.writer, "{}:{line}:{col}", file.path);
        self.paint(style::GUTTER, &format!("{blank} |"));
        let _ = writeln!(self.writer);

        let text = lines.line_text(file.source, line);
        self.paint(style::GUTTER, &format!("{number} | "));
        let _ = writeln!(self.writer, "{text}");

        self.paint(style::GUTTER, &format!("{blank} | "));
        let indent = " ".repeat(col as usize - 1);
        let carets = "^".repeat(underline_width(file.source, lines, line, diag));
        let _ = write!(self.writer, "{indent}");
        self.paint(accent, &format!("{carets} {}", diag.label));
        let _ = writeln!(self.writer);

        if let Some(note) = &diag.note {
            self.paint(style::GUTTER, &format!("{blank} = "));
            self.paint(style::BOLD, "note");
            let _ = writeln!(self.writer, ": {note}");
        }
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::new(io::stderr(), mode.should_use_colors(is_tty))
    }
}

/// Characters of the span on its first line, at least one.
fn underline_width(source: &str, lines: &LineOffsetTable, line: u32, diag: &Diagnostic) -> usize {
    let line_end = lines.line_start(line) + lines.line_text(source, line).len();
    let start = diag.span.start as usize;
    let end = (diag.span.end as usize).min(line_end);
    source
        .get(start..end.max(start))
        .map_or(0, |s| s.chars().count())
        .max(1)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit_file(&mut self, file: FileDiagnostics<'_>) {
        self.totals.add_file(file.diagnostics);
        if file.diagnostics.is_empty() {
            return;
        }
        let lines = LineOffsetTable::build(file.source);
        for diag in file.diagnostics {
            self.emit(&file, &lines, diag);
        }
    }

    fn emit_unreadable(&mut self, _path: &str, reason: &str) {
        self.totals.add_unreadable();
        self.paint(style::ERROR, "error");
        let _ = writeln!(self.writer, ": {reason}");
        let _ = writeln!(self.writer);
    }

    fn finish(&mut self) -> Totals {
        let Totals {
            files,
            errors,
            warnings,
        } = self.totals;
        let accent = if errors > 0 {
            style::ERROR
        } else if warnings > 0 {
            style::WARNING
        } else {
            style::BOLD
        };
        self.paint(accent, &format!("checked {}", plural(files, "file")));
        let _ = writeln!(
            self.writer,
            ": {}, {}",
            plural(errors, "error"),
            plural(warnings, "warning")
        );
        let _ = self.writer.flush();
        self.totals
    }
}
