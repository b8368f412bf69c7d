use blazejump::error::BlazeJumpError;
use blazejump::geometry::KeyboardLayout;
use rstest::rstest;

const QWERTY: &str = "1234567890 qwertyuiop asdfghjkl zxcvbnm";

#[rstest]
#[case(0, 0, Some('1'))]
#[case(9, 0, Some('0'))]
#[case(0, 1, Some('q'))]
#[case(8, 2, Some('l'))]
#[case(9, 2, None)] // short row
#[case(6, 3, Some('m'))]
#[case(-1, 0, None)]
#[case(0, 4, None)]
fn test_char_at(#[case] x: i32, #[case] y: i32, #[case] expected: Option<char>) {
    let layout = KeyboardLayout::parse(QWERTY, "").unwrap();
    assert_eq!(layout.char_at(x, y), expected, "char_at({}, {})", x, y);
}

#[rstest]
#[case("ab cd", (1, 1), 'd')]
#[case("abc def ghi", (1, 1), 'e')]
#[case(QWERTY, (5, 2), 'h')]
#[case("abcde", (2, 0), 'c')]
#[case("a bcd", (1, 1), 'c')]
#[case("abcd e", (1, 0), 'b')] // centre (2, 1) is past the end of the short row
fn test_mid_position(#[case] def: &str, #[case] pos: (i32, i32), #[case] c: char) {
    let layout = KeyboardLayout::parse(def, "").unwrap();
    assert_eq!(layout.mid_position(), pos);
    assert_eq!(layout.mid_char(), c);
}

#[rstest]
#[case("")]
#[case("   \t  ")]
fn test_blank_definition_is_rejected(#[case] def: &str) {
    let err = KeyboardLayout::parse(def, "").unwrap_err();
    assert!(matches!(err, BlazeJumpError::EmptyLayout { .. }));
}

#[test]
fn test_fully_ignored_layout_is_rejected() {
    let err = KeyboardLayout::parse("ab BA", "ab").unwrap_err();
    assert!(matches!(err, BlazeJumpError::EmptyLayout { .. }));
}

#[test]
fn test_keys_are_lower_cased() {
    let layout = KeyboardLayout::parse("AB cd", "").unwrap();
    assert_eq!(layout.char_at(0, 0), Some('a'));
    assert_eq!(layout.position_of('B'), Some((1, 0)));
    assert!(layout.has_char('C'));
}

#[test]
fn test_duplicate_keys_keep_first_slot() {
    let layout = KeyboardLayout::parse("aba", "").unwrap();
    assert_eq!(layout.width(), 3);
    assert_eq!(layout.char_at(2, 0), None);
    assert_eq!(layout.position_of('a'), Some((0, 0)));
    assert_eq!(layout.key_count(), 2);
}

#[test]
fn test_ignored_keys_are_case_insensitive() {
    let layout = KeyboardLayout::parse("abc def", "E").unwrap();
    assert_eq!(layout.char_at(1, 1), None);
    assert_eq!(layout.key_count(), 5);
}

#[test]
fn test_definition_is_kept() {
    let layout = KeyboardLayout::parse("ab cd", "").unwrap();
    assert_eq!(layout.definition(), "ab cd");
    let rows: Vec<usize> = layout.rows().map(|r| r.len()).collect();
    assert_eq!(rows, vec![2, 2]);
}
