//! Command-line flags shared by every command.
//!
//! Flags are parsed by hand: `--flag=value` pairs, everything not starting
//! with `-` is a path.

use hint_diagnostic::emitter::ColorMode;
use hint_parse::{Arity, PredicateTable};
use thiserror::Error;

/// How `check` renders diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable, on stderr.
    #[default]
    Text,
    /// One JSON array, on stdout.
    Json,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("invalid value '{value}' for {flag} (expected {expected})")]
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Parsed flags and paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub color: ColorMode,
    pub format: OutputFormat,
    /// Extra predicate names accepted on top of the standard table.
    pub predicates: Vec<String>,
    pub paths: Vec<String>,
}

impl CliOptions {
    /// Parse the arguments that follow the command name.
    pub fn parse(args: &[String]) -> Result<Self, OptionsError> {
        let mut options = CliOptions::default();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--color=") {
                options.color = match value {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    _ => return Err(invalid("--color", value, "auto, always or never")),
                };
            } else if let Some(value) = arg.strip_prefix("--format=") {
                options.format = match value {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    _ => return Err(invalid("--format", value, "text or json")),
                };
            } else if let Some(value) = arg.strip_prefix("--predicates=") {
                options.predicates.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(str::to_owned),
                );
            } else if arg.starts_with('-') && arg != "-" {
                return Err(OptionsError::UnknownFlag(arg.clone()));
            } else {
                options.paths.push(arg.clone());
            }
        }
        Ok(options)
    }

    /// The standard predicate table plus any `--predicates`.
    pub fn predicate_table(&self) -> PredicateTable {
        self.predicates
            .iter()
            .fold(PredicateTable::standard(), |table, name| {
                table.with_predicate(name.as_str(), Arity::AtLeast(0))
            })
    }
}

fn invalid(flag: &'static str, value: &str, expected: &'static str) -> OptionsError {
    OptionsError::InvalidValue {
        flag,
        value: value.to_owned(),
        expected,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
