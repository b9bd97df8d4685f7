use super::*;
use crate::parser::MatchErrorKind;
use newlang_ast::{BinaryOperator::*, Node};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_operator() {
    assert_eq!(parse_operator("+1"), Ok(("1", Add)));
    assert_eq!(parse_operator("-1"), Ok(("1", Sub)));
    assert_eq!(parse_operator("*1"), Ok(("1", Mul)));
    assert_eq!(parse_operator("/1"), Ok(("1", Div)));
    assert!(matches!(parse_operator("%1"), Err(nom::Err::Error(_))));
}

#[test]
fn test_simple_chain() {
    let (rest, node) = parse_binary_chain("1234+5678.9").unwrap();
    assert_eq!(rest, "");
    assert_eq!(
        node,
        Node::chain(Node::literal(1234.0), [(Add, Node::literal(5678.9))])
    );
}

#[test]
fn test_chain_stays_flat() {
    // Precedence is resolved at evaluation time; the matcher only records
    // the left to right sequence.
    let (rest, node) = parse_binary_chain("1+10/2*2").unwrap();
    assert_eq!(rest, "");
    assert_eq!(
        node,
        Node::chain(
            Node::literal(1.0),
            [
                (Add, Node::literal(10.0)),
                (Div, Node::literal(2.0)),
                (Mul, Node::literal(2.0)),
            ]
        )
    );
}

#[test]
fn test_chain_operands_include_variables_and_brackets() {
    let (rest, node) = parse_binary_chain("(5+2)*foo,7").unwrap();
    assert_eq!(rest, ",7");
    assert_eq!(
        node,
        Node::chain(
            Node::chain(Node::literal(5.0), [(Add, Node::literal(2.0))]),
            [(Mul, Node::variable("foo"))]
        )
    );
}

#[test]
fn test_single_operand_is_not_a_chain() {
    let err = parse_binary_chain("42").unwrap_err();
    assert_eq!(
        err,
        nom::Err::Error(MatchError::new("42", MatchErrorKind::Nom(ErrorKind::Many1)))
    );
}

#[test]
fn test_dangling_operator_fails_whole_chain() {
    // The failure is reported at the chain's own starting cursor.
    match parse_binary_chain("1+2+") {
        Err(nom::Err::Error(e)) => assert_eq!(e.input, "1+2+"),
        other => panic!("expected no-match, got {other:?}"),
    }
}

#[test]
fn test_bracket_requires_closing_paren() {
    assert_eq!(parse_bracket("(7)+1"), Ok(("+1", Node::literal(7.0))));
    match parse_bracket("(7+1") {
        Err(nom::Err::Error(e)) => assert_eq!(e.input, "(7+1"),
        other => panic!("expected no-match, got {other:?}"),
    }
    assert!(parse_bracket("()").is_err());
}

#[test]
fn test_base_expr_alternatives() {
    assert_eq!(parse_base_expr("7"), Ok(("", Node::literal(7.0))));
    assert_eq!(parse_base_expr("foo"), Ok(("", Node::variable("foo"))));
    assert_eq!(parse_base_expr("((3))"), Ok(("", Node::literal(3.0))));
    assert_eq!(
        parse_base_expr("a-b"),
        Ok((
            "",
            Node::chain(Node::variable("a"), [(Sub, Node::variable("b"))])
        ))
    );
}

#[test]
fn test_base_expr_falls_back_after_broken_chain() {
    // The chain fails on the dangling `+`; the literal alternative still
    // matches the leading `1` and leaves the rest for the caller.
    assert_eq!(parse_base_expr("1+"), Ok(("+", Node::literal(1.0))));
}

#[test]
fn test_matchers_expect_filtered_input() {
    // Whitespace is not a token: an unfiltered space ends the match.
    assert_eq!(parse_base_expr("1 2+3"), Ok((" 2+3", Node::literal(1.0))));
    assert!(parse_base_expr(" 1").is_err());

    let code = crate::parser::skip_whitespace("1 2+3");
    assert_eq!(
        parse_base_expr(&code),
        Ok((
            "",
            Node::chain(Node::literal(12.0), [(Add, Node::literal(3.0))])
        ))
    );
}
