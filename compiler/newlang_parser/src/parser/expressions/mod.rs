//! Expression matchers: brackets, binary chains and the full expression.
//!
//! Like every matcher, these expect input already passed through
//! `skip_whitespace`; whitespace is not a token.

use nom::branch::alt;
use nom::character::complete::{char, one_of};
use nom::error::ErrorKind;
use nom::sequence::delimited;

use newlang_ast::{BinaryChainNode, BinaryOperator, ChainSlot, Node};

use crate::parser::error::{no_match, reset_to};
use crate::parser::identifiers::parse_variable;
use crate::parser::literals::parse_literal;
use crate::parser::{MatchError, MatchResult};

/// Parse a bracketed expression: `"(" expression ")"`.
///
/// The brackets leave no node behind; the inner expression is returned.
pub fn parse_bracket(input: &str) -> MatchResult<'_, Node> {
    delimited(char('('), parse_base_expr, char(')'))(input)
        .map_err(reset_to(input))
}

/// A single chain operand. Never recurses into the full expression except
/// through brackets, which keeps the chain matcher free of left recursion.
pub fn parse_operand(input: &str) -> MatchResult<'_, Node> {
    alt((parse_bracket, parse_literal, parse_variable))(input)
}

/// Matches whichever operator symbol the cursor starts with.
pub fn parse_operator(input: &str) -> MatchResult<'_, BinaryOperator> {
    let (rest, symbol) = one_of(BinaryOperator::SYMBOLS)(input)?;
    match BinaryOperator::from_symbol(symbol) {
        Some(op) => Ok((rest, op)),
        None => Err(nom::Err::Failure(MatchError::unknown_operator(
            input, symbol,
        ))),
    }
}

/// Greedy `operand (operator operand)+`.
///
/// A lone operand is not a chain, and an operator without a following
/// operand fails the whole chain rather than keeping the prefix.
pub fn parse_binary_chain(input: &str) -> MatchResult<'_, Node> {
    log::debug!("=== parse_binary_chain ===");
    let (mut rest, first) = parse_operand(input).map_err(reset_to(input))?;
    let mut slots = vec![ChainSlot::Operand(first)];

    loop {
        let (after_op, op) = match parse_operator(rest) {
            Ok(matched) => matched,
            Err(nom::Err::Error(_)) => break,
            Err(fatal) => return Err(fatal),
        };
        let (after_operand, operand) = parse_operand(after_op).map_err(reset_to(input))?;
        log::trace!("chain operator {op}");
        slots.push(ChainSlot::Operator(op));
        slots.push(ChainSlot::Operand(operand));
        rest = after_operand;
    }

    if slots.len() < 3 {
        return no_match(input, ErrorKind::Many1);
    }
    log::debug!("Matched chain with {} operands", slots.len() / 2 + 1);
    Ok((rest, Node::BinaryChain(BinaryChainNode { slots })))
}

/// Parse a full expression. The chain is tried first so that `a + b` is
/// not cut short by the literal or variable alternative matching `a`.
///
/// A failed chain leaves its leading bracket to be matched again by the
/// bracket alternative, so parse time doubles with each nesting level.
pub fn parse_base_expr(input: &str) -> MatchResult<'_, Node> {
    alt((
        parse_binary_chain,
        parse_literal,
        parse_variable,
        parse_bracket,
    ))(input)
    .map_err(reset_to(input))
}

#[cfg(test)]
mod tests;
