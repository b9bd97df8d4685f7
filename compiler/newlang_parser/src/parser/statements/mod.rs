use nom::branch::alt;
use nom::character::complete::char;
use nom::sequence::separated_pair;

use newlang_ast::Node;

use crate::parser::error::reset_to;
use crate::parser::expressions::parse_base_expr;
use crate::parser::identifiers::parse_identifier;
use crate::parser::MatchResult;

/// Parse a declaration: `identifier ":" expression`.
pub fn parse_declaration(input: &str) -> MatchResult<'_, Node> {
    let (rest, (name, assignee)) = separated_pair(parse_identifier, char(':'), parse_base_expr)(
        input,
    )
    .map_err(reset_to(input))?;
    log::debug!("Matched declaration of '{name}'");
    Ok((rest, Node::declaration(name, assignee)))
}

/// A declaration or a bare expression. The declaration goes first: the
/// expression matcher would otherwise take the name and strand the `:`.
pub fn parse_command(input: &str) -> MatchResult<'_, Node> {
    alt((parse_declaration, parse_base_expr))(input)
}

/// Parse `command ("," command)*` into a command sequence.
///
/// A comma must be followed by a command; `1,` fails as a whole.
pub fn parse_code(input: &str) -> MatchResult<'_, Node> {
    log::debug!("=== parse_code ===");
    let (mut rest, first) = parse_command(input)?;
    let mut commands = vec![first];

    loop {
        let after_comma = match char(',')(rest) {
            Ok((after_comma, _)) => after_comma,
            Err(nom::Err::Error(_)) => break,
            Err(fatal) => return Err(fatal),
        };
        let (after_command, command) = parse_command(after_comma).map_err(reset_to(input))?;
        commands.push(command);
        rest = after_command;
    }

    log::debug!("Matched {} command(s)", commands.len());
    Ok((rest, Node::commands(commands)))
}
