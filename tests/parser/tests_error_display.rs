#![allow(clippy::unwrap_used)]

use abbrev::{ErrorCode, TextSize, parse};
use rstest::rstest;

// ============================================================================
// ERROR CODES AND POSITIONS
// ============================================================================

#[rstest]
#[case("div>", ErrorCode::E0401, 3)]
#[case("+div", ErrorCode::E0402, 0)]
#[case("a>b^^^c", ErrorCode::E0403, 3)]
#[case("(div", ErrorCode::E0201, 4)]
#[case("a[href", ErrorCode::E0202, 6)]
#[case("div)", ErrorCode::E0203, 3)]
#[case("div>()", ErrorCode::E0204, 4)]
#[case("div]", ErrorCode::E0205, 3)]
#[case("p{open", ErrorCode::E0103, 6)]
#[case("a[t='x]", ErrorCode::E0102, 7)]
#[case("p.", ErrorCode::E0301, 1)]
#[case("p#", ErrorCode::E0302, 1)]
#[case("li*0", ErrorCode::E0304, 3)]
#[case("ul>li*5000", ErrorCode::E0306, 6)]
#[case("li*18446744073709551616", ErrorCode::E0306, 3)]
#[case("  a>b^^^c", ErrorCode::E0403, 5)]
#[case("ul li", ErrorCode::E0902, 2)]
#[case("p~", ErrorCode::E0101, 1)]
fn test_error_code_and_position(
    #[case] input: &str,
    #[case] code: ErrorCode,
    #[case] position: u32,
) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.code, code, "code for {input}: {}", err.format());
    assert_eq!(err.position(), TextSize::new(position), "position for {input}");
}

// ============================================================================
// DISPLAY
// ============================================================================

#[test]
fn test_display_starts_with_code() {
    let err = parse("div>").unwrap_err();
    assert!(err.to_string().starts_with("E0401: "));
}

#[rstest]
#[case("(div")]
#[case("a[href")]
#[case("p{open")]
fn test_unclosed_delimiters_point_back(#[case] input: &str) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.related.len(), 1, "{}", err.format());
    assert!(err.related[0].message.ends_with("opened here"));
}

#[test]
fn test_incomplete_input_codes() {
    assert!(parse("ul>li[").unwrap_err().code.is_incomplete_input());
    assert!(!parse("a>b^^^c").unwrap_err().code.is_incomplete_input());
}
