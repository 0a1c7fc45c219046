use pretty_assertions::assert_eq;

use hint_parse::{CodeBlocks, ConditionResolver, PredicateBinder, PredicateRequest};

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_defaults() {
    let options = CliOptions::parse(&args(&["rules.hint"])).unwrap();
    assert_eq!(options.color, ColorMode::Auto);
    assert_eq!(options.format, OutputFormat::Text);
    assert_eq!(options.paths, vec!["rules.hint".to_owned()]);
}

#[test]
fn test_flags_anywhere() {
    let options = CliOptions::parse(&args(&[
        "a.hint",
        "--color=never",
        "b.hint",
        "--format=json",
        "--predicates=isFoo, isBar,",
    ]))
    .unwrap();
    assert_eq!(options.color, ColorMode::Never);
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.paths, vec!["a.hint".to_owned(), "b.hint".to_owned()]);
    assert_eq!(options.predicates, vec!["isFoo".to_owned(), "isBar".to_owned()]);
}

#[test]
fn test_invalid_values() {
    assert_eq!(
        CliOptions::parse(&args(&["--color=sometimes"])).unwrap_err().to_string(),
        "invalid value 'sometimes' for --color (expected auto, always or never)"
    );
    assert!(matches!(
        CliOptions::parse(&args(&["--format=xml"])),
        Err(OptionsError::InvalidValue { flag: "--format", .. })
    ));
}

#[test]
fn test_unknown_flag() {
    assert_eq!(
        CliOptions::parse(&args(&["--verbose"])),
        Err(OptionsError::UnknownFlag("--verbose".to_owned()))
    );
}

#[test]
fn test_predicate_table_includes_extras() {
    let options = CliOptions::parse(&args(&["--predicates=isFoo"])).unwrap();
    let mut binder = options
        .predicate_table()
        .prepare("", &CodeBlocks::default());
    let mut bind = |text| {
        binder.bind(&PredicateRequest {
            text,
            negated: false,
            offset: 0,
        })
    };
    assert!(bind("isFoo()").is_ok());
    assert!(bind("isFoo($a, $b)").is_ok());
    assert!(bind("hasModifier($a, Modifier.PUBLIC)").is_ok());
    assert!(bind("isBar()").is_err());
}
