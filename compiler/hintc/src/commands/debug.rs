//! Debug commands: `lex` and `parse` for inspecting the front-end.

use std::fmt::Write;

use hint_ir::{Condition, Options, Span, Token};
use hint_parse::{ParseResult, PredicateTable};

use super::read_file;

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let tokens = hint_lexer::tokenize(&content);
    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    print!("{}", render_tokens(&content, &tokens));
}

/// Parse a file and print the rule table and diagnostics.
///
/// Returns `true` when the file has error diagnostics.
pub fn parse_file(path: &str, table: &PredicateTable) -> bool {
    let content = read_file(path);
    let result = hint_parse::parse_source(&content, table);
    println!("Parse result for '{path}':");
    print!("{}", render_parse(&content, &result));
    result.has_errors()
}

/// One line per token: `Kind @ start..end  "text"`.
pub fn render_tokens(source: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "  {:?}  {:?}", token, token.text(source));
    }
    out
}

/// Human-readable dump of a parse result.
pub fn render_parse(source: &str, result: &ParseResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Rules: {}", result.rules.len());
    let _ = writeln!(out, "  Errors: {}", result.errors.len());

    if !result.global_options.is_empty() {
        let _ = writeln!(out, "  Global options: {}", format_options(&result.global_options));
    }
    if let Some(imports) = result.imports_span {
        let _ = writeln!(out, "  Imports: {imports} {:?}", imports.slice(source));
    }
    for span in &result.free_code_block_spans {
        let _ = writeln!(out, "  Code block: {span}");
    }

    for (i, rule) in result.rules.iter().enumerate() {
        let _ = writeln!(out);
        let name = rule.display_name.as_deref().unwrap_or("<unnamed>");
        let _ = writeln!(out, "Rule #{} '{name}' (ends at {})", i + 1, rule.rule_end_offset);
        let _ = writeln!(
            out,
            "  pattern {}: {:?}",
            rule.pattern_span,
            rule.pattern_span.slice(source)
        );
        write_conditions(&mut out, source, &rule.conditions, "  ");
        if !rule.options.is_empty() {
            let _ = writeln!(out, "  options: {}", format_options(&rule.options));
        }
        for fix in &rule.fixes {
            let name = fix
                .display_name
                .as_deref()
                .map(|n| format!(" '{n}'"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  =>{name} {}: {:?}",
                fix.body_span,
                fix.body_span.slice(source)
            );
            write_conditions(&mut out, source, &fix.conditions, "    ");
            if !fix.options.is_empty() {
                let _ = writeln!(out, "    options: {}", format_options(&fix.options));
            }
        }
    }

    if !result.errors.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Errors:");
        for error in &result.errors {
            let _ = writeln!(out, "  {error}");
        }
    }
    out
}

fn write_conditions(out: &mut String, source: &str, conditions: &[Condition], indent: &str) {
    for condition in conditions {
        let _ = writeln!(out, "{indent}:: {}", describe(source, condition));
    }
}

fn describe(source: &str, condition: &Condition) -> String {
    let bang = |negated: bool| if negated { "!" } else { "" };
    match condition {
        Condition::InstanceOf {
            negated,
            variable_name,
            type_text_span,
        } => format!(
            "{}{variable_name} instanceof {}",
            bang(*negated),
            type_span_text(source, *type_text_span)
        ),
        Condition::MethodPredicate {
            negated,
            method_name,
            ordered_params,
        } => {
            let params: Vec<String> = ordered_params
                .iter()
                .map(|(text, kind)| format!("{text}: {kind:?}"))
                .collect();
            format!("{}{method_name}({})", bang(*negated), params.join(", "))
        }
        Condition::AlwaysFalse => "<always false>".to_owned(),
        Condition::Otherwise => "otherwise".to_owned(),
    }
}

fn type_span_text(source: &str, span: Span) -> &str {
    if span.is_empty() {
        "<missing type>"
    } else {
        span.slice(source)
    }
}

/// `key=value` pairs sorted by key.
fn format_options(options: &Options) -> String {
    let mut pairs: Vec<_> = options.iter().collect();
    pairs.sort();
    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}
