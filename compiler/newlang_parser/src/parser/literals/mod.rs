use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{opt, recognize};
use nom::sequence::{pair, tuple};

use newlang_ast::Node;

use crate::parser::{MatchError, MatchResult};

fn nonzero_integer(input: &str) -> MatchResult<'_, &str> {
    recognize(pair(one_of("123456789"), digit0))(input)
}

/// Recognises `(0|[1-9][0-9]*)?.[0-9]+ | [1-9][0-9]* | 0` at position 0,
/// trying the alternatives in that order.
fn decimal_text(input: &str) -> MatchResult<'_, &str> {
    alt((
        recognize(tuple((
            opt(alt((tag("0"), nonzero_integer))),
            char('.'),
            digit1,
        ))),
        nonzero_integer,
        tag("0"),
    ))(input)
}

/// Matches a numeric literal anchored at the start of `input`.
///
/// Text accepted by the grammar that still fails `f64` parsing is a fatal
/// `InvalidNumber` failure, not a no-match.
///
/// # Examples
///
/// ```
/// use newlang_ast::Node;
/// use newlang_parser::parser::literals::parse_literal;
///
/// let (rest, node) = parse_literal("12.5+1").unwrap();
/// assert_eq!(rest, "+1");
/// assert_eq!(node, Node::literal(12.5));
/// ```
pub fn parse_literal(input: &str) -> MatchResult<'_, Node> {
    let (rest, text) = decimal_text(input)?;
    let value = text
        .parse::<f64>()
        .map_err(|_| nom::Err::Failure(MatchError::invalid_number(input, text)))?;
    log::trace!("literal {text:?} -> {value}");
    Ok((rest, Node::literal(value)))
}

#[cfg(test)]
mod tests;
