use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn test_span_merge_disjoint() {
    let merged = Span::new(0, 10).merge(Span::new(20, 30));
    assert_eq!(merged, Span::new(0, 30));
}

#[test]
fn test_point_span_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn test_slice_extracts_text() {
    let source = "a + b => a;;";
    assert_eq!(Span::new(0, 5).slice(source), "a + b");
    assert_eq!(Span::new(9, 10).slice(source), "a");
}

#[test]
fn test_slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(3, 40).slice("abc"), "");
}

#[test]
fn test_slice_off_char_boundary_is_empty() {
    // 'é' is two bytes; offset 1 is inside it
    assert_eq!(Span::new(1, 2).slice("é"), "");
}

#[test]
fn test_span_display_and_debug_agree() {
    let span = Span::new(3, 9);
    assert_eq!(format!("{span}"), "3..9");
    assert_eq!(format!("{span:?}"), "3..9");
}
