use super::*;
use newlang_ast::Node;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_parse_integer_literal() {
    let (rest, lit) = parse_literal("1234").unwrap();
    assert_eq!(rest, "");
    assert_eq!(lit, Node::literal(1234.0));
}

#[test]
fn test_parse_decimal_literal() {
    let (rest, lit) = parse_literal("5678.9").unwrap();
    assert_eq!(rest, "");
    assert_eq!(lit, Node::literal(5678.9));

    let (rest, lit) = parse_literal("0.25)").unwrap();
    assert_eq!(rest, ")");
    assert_eq!(lit, Node::literal(0.25));
}

#[test]
fn test_parse_leading_point_literal() {
    let (rest, lit) = parse_literal(".5*2").unwrap();
    assert_eq!(rest, "*2");
    assert_eq!(lit, Node::literal(0.5));
}

#[test]
fn test_zero_does_not_absorb_following_digits() {
    // `0` is a complete literal; `0123` leaves `123` behind.
    let (rest, lit) = parse_literal("0123").unwrap();
    assert_eq!(rest, "123");
    assert_eq!(lit, Node::literal(0.0));
}

#[test]
fn test_trailing_point_is_not_consumed() {
    let (rest, lit) = parse_literal("5.").unwrap();
    assert_eq!(rest, ".");
    assert_eq!(lit, Node::literal(5.0));
}

#[test]
fn test_literal_must_start_at_cursor() {
    assert!(matches!(parse_literal("x12"), Err(nom::Err::Error(_))));
    assert!(matches!(parse_literal(" 12"), Err(nom::Err::Error(_))));
    assert!(matches!(parse_literal(""), Err(nom::Err::Error(_))));
    assert!(matches!(parse_literal("."), Err(nom::Err::Error(_))));
}

proptest! {
    #[test]
    fn integers_parse_exactly(n in 0u64..=9_007_199_254_740_992u64) {
        let text = n.to_string();
        let (rest, lit) = parse_literal(&text).unwrap();
        prop_assert_eq!(rest, "");
        prop_assert_eq!(lit, Node::literal(n as f64));
    }

    #[test]
    fn decimals_parse_exactly(int in 0u32..1_000_000u32, frac in "[0-9]{1,6}") {
        let text = format!("{int}.{frac}");
        let (rest, lit) = parse_literal(&text).unwrap();
        prop_assert_eq!(rest, "");
        prop_assert_eq!(lit, Node::literal(text.parse::<f64>().unwrap()));
    }
}
