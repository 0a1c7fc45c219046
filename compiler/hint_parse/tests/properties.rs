//! Property tests for the hint parser.

use hint_parse::{parse_source, PredicateTable};
use proptest::prelude::*;

/// Rule-shaped input: a sequence of small well-formed rules.
fn rule() -> impl Strategy<Value = String> {
    (
        prop::option::of("[A-Z][a-z]{0,5}"),
        "[a-z]{1,4}",
        prop::option::of("isNullLiteral|inClass|nope"),
        prop::collection::vec("[a-z]{1,3}", 1..3),
    )
        .prop_map(|(name, pattern, predicate, fixes)| {
            let mut text = String::new();
            if let Some(name) = name {
                text.push_str(&format!("'{name}': "));
            }
            text.push_str(&format!("${pattern}"));
            if let Some(predicate) = predicate {
                text.push_str(&format!(" :: {predicate}(${pattern})"));
            }
            for fix in fixes {
                text.push_str(&format!(" => {fix}"));
            }
            text.push_str(";;\n");
            text
        })
}

/// Arbitrary mixtures of hint syntax fragments.
fn noise() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("$x"),
            Just(" "),
            Just("=>"),
            Just("::"),
            Just("&&"),
            Just("!"),
            Just(";;"),
            Just("instanceof"),
            Just("otherwise"),
            Just("<?"),
            Just("?>"),
            Just("<!a=b"),
            Just(">"),
            Just("'n'"),
            Just(":"),
            Just("f("),
            Just(")"),
            Just("\""),
            Just("/*"),
        ],
        0..30,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_never_panics_and_spans_in_bounds(source in noise()) {
        let result = parse_source(&source, &PredicateTable::standard());
        let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        for rule in &result.rules {
            prop_assert!(rule.pattern_span.end <= len);
            prop_assert!(rule.rule_end_offset <= len);
            for fix in &rule.fixes {
                prop_assert!(fix.body_span.end <= len);
            }
        }
        for diagnostic in &result.errors {
            prop_assert!(diagnostic.span.start <= diagnostic.span.end && diagnostic.span.end <= len);
        }
    }

    #[test]
    fn test_rule_count_and_order_preserved(rules in prop::collection::vec(rule(), 0..6)) {
        let source = rules.concat();
        let result = parse_source(&source, &PredicateTable::standard());
        prop_assert_eq!(result.rules.len(), rules.len());

        let mut last_end = 0;
        for (rule, text) in result.rules.iter().zip(&rules) {
            prop_assert!(rule.pattern_span.start >= last_end);
            prop_assert!(text.contains(rule.pattern_span.slice(&source)));
            prop_assert!(rule.fixes.windows(2).all(|w| w[0].body_span.end <= w[1].body_span.start));
            last_end = rule.rule_end_offset;
        }
    }

    #[test]
    fn test_unknown_predicates_are_reported(rules in prop::collection::vec(rule(), 1..6)) {
        let source = rules.concat();
        let result = parse_source(&source, &PredicateTable::standard());
        let unresolved = rules.iter().filter(|r| r.contains(":: nope(")).count();
        prop_assert_eq!(result.errors.len(), unresolved);
    }

    #[test]
    fn test_truncation_keeps_earlier_rules(rules in prop::collection::vec(rule(), 1..5), cut in 0usize..40) {
        let source = rules.concat();
        let cut = source.len().saturating_sub(cut);
        let truncated = &source[..cut];
        let complete = truncated.matches(";;").count();
        let result = parse_source(truncated, &PredicateTable::standard());
        prop_assert!(result.rules.len() >= complete);
        prop_assert!(result.rules.len() <= complete + 1);
    }
}
