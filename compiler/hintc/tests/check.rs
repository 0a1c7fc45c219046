//! End-to-end checks over files on disk.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::PathBuf;

use hint_diagnostic::emitter::{JsonEmitter, Totals};
use hint_diagnostic::ErrorCode;
use hint_parse::PredicateTable;
use hintc::commands::{check_sources, emit_reports, read_source};

/// Write `content` to a fresh file under the target temp directory.
fn write_temp(name: &str, content: &str) -> String {
    let dir = std::env::temp_dir().join(format!("hintc-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path: PathBuf = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_missing_file_message() {
    let err = read_source("/definitely/not/here.hint").unwrap_err();
    assert_eq!(err, "cannot find file '/definitely/not/here.hint'");
}

#[test]
fn test_check_keeps_input_order() {
    let good = write_temp("good.hint", "$a => $b;;\n$c :: isNullLiteral($c) => null;;\n");
    let bad = write_temp("bad.hint", "$a :: nope($a) => $b;;\n");
    let missing = "/definitely/not/here.hint".to_owned();
    let paths = vec![good.clone(), bad.clone(), missing.clone()];

    let reports = check_sources(&paths, &PredicateTable::standard());
    let order: Vec<_> = reports.iter().map(|r| r.path.clone()).collect();
    assert_eq!(order, paths);

    let good_result = &reports[0].outcome.as_ref().unwrap().result;
    assert_eq!(good_result.rules.len(), 2);
    assert!(good_result.errors.is_empty());

    let bad_result = &reports[1].outcome.as_ref().unwrap().result;
    assert_eq!(bad_result.errors.len(), 1);
    assert_eq!(bad_result.errors[0].code, ErrorCode::E1001);

    assert!(reports[2].outcome.is_err());
}

#[test]
fn test_invalid_utf8_is_reported() {
    let dir = std::env::temp_dir().join(format!("hintc-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("binary.hint");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    let path = path.to_string_lossy().into_owned();
    assert_eq!(
        read_source(&path).unwrap_err(),
        format!("'{path}' contains invalid UTF-8 data")
    );
}

#[test]
fn test_emit_reports_totals_unreadable_as_error() {
    let stray = write_temp("stray.hint", "a <!k=v> junk => b;;\n");
    let paths = vec![stray, "/definitely/not/here.hint".to_owned()];
    let reports = check_sources(&paths, &PredicateTable::standard());

    let mut emitter = JsonEmitter::new(Vec::new());
    let totals = emit_reports(&mut emitter, &reports);
    assert_eq!(
        totals,
        Totals {
            files: 2,
            errors: 1,
            warnings: 1,
        }
    );
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("\"code\": \"E1002\""));
    assert!(text.contains("\"error_count\": 1"));
}
