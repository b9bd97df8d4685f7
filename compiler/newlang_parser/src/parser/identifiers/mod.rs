use nom::bytes::complete::take_while;
use nom::character::complete::satisfy;
use nom::combinator::{map, recognize};
use nom::sequence::pair;

use newlang_ast::Node;

use crate::parser::MatchResult;

/// Matches `[a-zA-Z_][a-zA-Z_0-9]*` anchored at the start of `input`.
pub fn parse_identifier(input: &str) -> MatchResult<'_, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

/// Parse a variable reference
pub fn parse_variable(input: &str) -> MatchResult<'_, Node> {
    map(parse_identifier, |name: &str| Node::variable(name))(input)
}
