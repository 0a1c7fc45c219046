use super::*;

#[test]
fn test_reads_past_end_are_zero() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.byte_at(1), b'b');
    assert_eq!(cursor.byte_at(2), 0);
    assert_eq!(cursor.byte_at(100), 0);
}

#[test]
fn test_advance_stops_at_eof() {
    let mut cursor = Cursor::new("abc");
    cursor.advance_n(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
    cursor.advance();
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn test_interior_nul_is_not_eof() {
    let cursor = Cursor::new("a\0b");
    let mut copy = cursor;
    copy.advance();
    assert_eq!(copy.current(), 0);
    assert!(!copy.is_eof());
}

#[test]
fn test_at_clamps_position() {
    let cursor = Cursor::at("abc", 99);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn test_eat_whitespace() {
    let mut cursor = Cursor::new(" \t\r\n x");
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn test_find_from_uses_absolute_offsets() {
    let cursor = Cursor::new("<?a?>b?>");
    assert_eq!(cursor.find_from(1, b"?>"), Some(3));
    assert_eq!(cursor.find_from(4, b"?>"), Some(6));
    assert_eq!(cursor.find_from(7, b"?>"), None);
}

#[test]
fn test_word_at_requires_boundaries() {
    let cursor = Cursor::new("x instanceof y xinstanceof instanceofy");
    assert!(cursor.word_at(2, b"instanceof"));
    assert!(!cursor.word_at(16, b"instanceof"));
    assert!(!cursor.word_at(27, b"instanceof"));
}

#[test]
fn test_word_at_rejects_non_ascii_neighbour() {
    let cursor = Cursor::new("otherwiseé");
    assert!(!cursor.word_at(0, b"otherwise"));
}

#[test]
fn test_variable_end() {
    let cursor = Cursor::new("$a_1$b.c");
    assert_eq!(cursor.variable_end(1), 6);
}
