//! Command handlers for the `hintc` CLI.
//!
//! Shared file reading lives here in the module root.

mod check;
mod debug;

pub use check::{check_files, check_sources, emit_reports, CheckedFile, FileReport};
pub use debug::{lex_file, parse_file, render_parse, render_tokens};

/// Read a source file, mapping I/O failures to a user-facing message.
pub fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Read a source file or exit with status 1.
pub(crate) fn read_file(path: &str) -> String {
    match read_source(path) {
        Ok(content) => content,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
