use pretty_assertions::assert_eq;

use super::*;
use hint_ir::TokenKind::{
    And, BlockComment, CharLiteral, CodeBlock, Colon, DoubleColon, DoublePercent,
    DoubleSemicolon, Error, InstanceOf, LeadsTo, LineComment, Not, OptionsBlock, Otherwise,
    Snippet, StringLiteral, Variable, Whitespace,
};

fn scan(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(Cursor::new(source));
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token() {
        tokens.push(token);
    }
    tokens
}

/// Scan and pair each kind with the text its span covers.
fn scan_text(source: &str) -> Vec<(TokenKind, &str)> {
    scan(source)
        .into_iter()
        .map(|t| (t.kind, t.text(source)))
        .collect()
}

/// Scan and drop whitespace tokens.
fn scan_solid(source: &str) -> Vec<(TokenKind, &str)> {
    scan_text(source)
        .into_iter()
        .filter(|(kind, _)| *kind != Whitespace)
        .collect()
}

// ─── Basic Rules ───────────────────────────────────────────────

#[test]
fn test_minimal_rule_offsets() {
    let tokens = scan("a + b => a;;");
    let expected = [
        (Snippet, 0, 5),
        (Whitespace, 5, 6),
        (LeadsTo, 6, 8),
        (Whitespace, 8, 9),
        (Snippet, 9, 10),
        (DoubleSemicolon, 10, 12),
    ];
    let actual: Vec<_> = tokens
        .iter()
        .map(|t| (t.kind, t.span.start, t.span.end))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_display_name_and_options() {
    let source = "'My Hint': $x + 1 <!hint=myid,!> => $x;;";
    assert_eq!(
        scan_solid(source),
        vec![
            (CharLiteral, "'My Hint'"),
            (Colon, ":"),
            (Variable, "$x"),
            (Snippet, "+ 1"),
            (OptionsBlock, "<!hint=myid,!>"),
            (LeadsTo, "=>"),
            (Variable, "$x"),
            (DoubleSemicolon, ";;"),
        ]
    );
    let options = scan(source)
        .into_iter()
        .find(|t| t.kind == OptionsBlock)
        .map(|t| t.span);
    assert_eq!(options, Some(Span::new(18, 32)));
}

#[test]
fn test_instanceof_and_otherwise_chain() {
    let source = "$x :: $x instanceof java.lang.String => a;; => b :: otherwise;;";
    assert_eq!(
        scan_solid(source),
        vec![
            (Variable, "$x"),
            (DoubleColon, "::"),
            (Variable, "$x"),
            (InstanceOf, "instanceof"),
            (Snippet, "java.lang.String"),
            (LeadsTo, "=>"),
            (Snippet, "a"),
            (DoubleSemicolon, ";;"),
            (LeadsTo, "=>"),
            (Snippet, "b"),
            (DoubleColon, "::"),
            (Otherwise, "otherwise"),
            (DoubleSemicolon, ";;"),
        ]
    );
}

#[test]
fn test_negated_predicates_joined_by_and() {
    assert_eq!(
        scan_solid("$m :: !isStatic($m) && hasName($m, \"x\")"),
        vec![
            (Variable, "$m"),
            (DoubleColon, "::"),
            (Not, "!"),
            (Snippet, "isStatic("),
            (Variable, "$m"),
            (Snippet, ")"),
            (And, "&&"),
            (Snippet, "hasName("),
            (Variable, "$m"),
            (Snippet, ","),
            (StringLiteral, "\"x\""),
            (Snippet, ")"),
        ]
    );
}

// ─── Double Colon Disambiguation ───────────────────────────────

#[test]
fn test_method_reference_stays_in_snippet() {
    assert_eq!(
        scan_solid("$list.forEach(System.out::println) => a;;"),
        vec![
            (Variable, "$list"),
            (Snippet, ".forEach(System.out::println)"),
            (LeadsTo, "=>"),
            (Snippet, "a"),
            (DoubleSemicolon, ";;"),
        ]
    );
}

#[test]
fn test_double_colon_before_negation_separates() {
    let kinds: Vec<_> = scan_solid("$x :: !$x instanceof Foo")
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(
        kinds,
        vec![Variable, DoubleColon, Not, Variable, InstanceOf, Snippet]
    );
}

#[test]
fn test_double_colon_before_call_separates() {
    assert_eq!(
        scan_solid("$x ::isFoo($x)")[1],
        (DoubleColon, "::")
    );
}

#[test]
fn test_double_colon_before_otherwise_needs_terminator() {
    assert_eq!(scan_solid("a :: otherwise ;;")[1], (DoubleColon, "::"));
    // Without `;;` the colons stay in the snippet
    assert_eq!(
        scan_solid("a :: otherwise"),
        vec![(Snippet, "a ::"), (Otherwise, "otherwise")]
    );
}

#[test]
fn test_method_reference_followed_by_paren_is_ambiguous() {
    // Best-effort heuristic: a call after the reference reads as a condition.
    assert_eq!(scan_solid("Foo::bar()")[1], (DoubleColon, "::"));
}

// ─── Operators Inside Snippets ─────────────────────────────────

#[test]
fn test_not_equals_is_snippet() {
    assert_eq!(
        scan_solid("$a != null"),
        vec![(Variable, "$a"), (Snippet, "!= null")]
    );
}

#[test]
fn test_keywords_need_word_boundaries() {
    assert_eq!(
        scan_solid("xinstanceof otherwiseY"),
        vec![(Snippet, "xinstanceof otherwiseY")]
    );
}

#[test]
fn test_double_percent() {
    assert_eq!(
        scan_solid("a %% b"),
        vec![(Snippet, "a"), (DoublePercent, "%%"), (Snippet, "b")]
    );
}

#[test]
fn test_variable_ends_preceding_snippet() {
    assert_eq!(
        scan_text("foo$x.bar"),
        vec![(Snippet, "foo"), (Variable, "$x"), (Snippet, ".bar")]
    );
}

#[test]
fn test_lone_dollar_is_snippet() {
    assert_eq!(scan_text("a $ b"), vec![(Snippet, "a $ b")]);
}

// ─── Whitespace ────────────────────────────────────────────────

#[test]
fn test_interior_whitespace_stays_in_snippet() {
    assert_eq!(
        scan_text("a  +\n b =>"),
        vec![(Snippet, "a  +\n b"), (Whitespace, " "), (LeadsTo, "=>")]
    );
}

#[test]
fn test_trailing_whitespace_split_at_eof() {
    assert_eq!(
        scan_text("a  "),
        vec![(Snippet, "a"), (Whitespace, "  ")]
    );
}

// ─── Blocks ────────────────────────────────────────────────────

#[test]
fn test_code_block_span_excludes_delimiters() {
    let source = "<?import java.util.List;?>";
    let tokens = scan(source);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, CodeBlock);
    assert_eq!(tokens[0].span, Span::new(2, 24));
    assert_eq!(tokens[0].text(source), "import java.util.List;");
}

#[test]
fn test_single_char_code_block() {
    let source = "<?x?>";
    assert_eq!(scan_text(source), vec![(CodeBlock, "x")]);
}

#[test]
fn test_degenerate_code_block() {
    let tokens = scan("<?>rest");
    assert_eq!(tokens[0].kind, CodeBlock);
    assert!(tokens[0].span.is_empty());
    assert_eq!(tokens[1].kind, Snippet);
    assert_eq!(tokens[1].span, Span::new(3, 7));
}

#[test]
fn test_unterminated_code_block_runs_to_eof() {
    let source = "<? foo => bar;;";
    let tokens = scan(source);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].span, Span::new(2, 15));
}

#[test]
fn test_comments() {
    assert_eq!(
        scan_text("// c\n/* d */x"),
        vec![(LineComment, "// c\n"), (BlockComment, "/* d */"), (Snippet, "x")]
    );
}

#[test]
fn test_block_comment_terminator_may_overlap_prefix() {
    assert_eq!(
        scan_text("/*/a"),
        vec![(BlockComment, "/*/"), (Snippet, "a")]
    );
}

#[test]
fn test_literals_have_no_escapes() {
    assert_eq!(
        scan_text(r#""a\"b""#),
        vec![
            (StringLiteral, r#""a\""#),
            (Snippet, "b"),
            (StringLiteral, "\""),
        ]
    );
}

#[test]
fn test_unterminated_options_block() {
    assert_eq!(
        scan_text("<!a=b"),
        vec![(OptionsBlock, "<!a=b")]
    );
}

#[test]
fn test_interior_nul_is_error_token() {
    assert_eq!(
        scan_text("a\0b"),
        vec![(Snippet, "a"), (Error, "\0"), (Snippet, "b")]
    );
}

#[test]
fn test_non_ascii_snippet_keeps_char_boundaries() {
    let source = "é+ü => ö;;";
    assert_eq!(
        scan_solid(source),
        vec![
            (Snippet, "é+ü"),
            (LeadsTo, "=>"),
            (Snippet, "ö"),
            (DoubleSemicolon, ";;"),
        ]
    );
}

#[test]
fn test_empty_source() {
    assert!(scan("").is_empty());
}
