// Parser implementation for NewLanguage using nom
// Matchers work directly on the remaining source text; there is no token stream

pub mod error;
pub mod expressions;
pub mod identifiers;
pub mod literals;
pub mod scanner;
pub mod statements;

pub use error::{MatchError, MatchErrorKind, MatchResult, ParseError};
pub use expressions::{
    parse_base_expr, parse_binary_chain, parse_bracket, parse_operand, parse_operator,
};
pub use identifiers::{parse_identifier, parse_variable};
pub use literals::parse_literal;
pub use scanner::skip_whitespace;
pub use statements::{parse_code, parse_command, parse_declaration};

use newlang_ast::Node;

/// Parses a whole program into its command sequence.
///
/// Whitespace is filtered out of the entire source first; the matchers
/// themselves never skip it. The program is valid only if the Code matcher
/// consumes all of what remains.
pub fn parse_program(source: &str) -> Result<Node, ParseError> {
    let code = skip_whitespace(source);
    log::debug!("Parsing {} byte(s) of code", code.len());

    match parse_code(&code) {
        Ok(("", root)) => Ok(root),
        Ok((rest, _)) => {
            log::debug!("Code matcher stopped with {} byte(s) left", rest.len());
            Err(ParseError::NoParseableExpression {
                unparsed: rest.to_string(),
            })
        }
        Err(nom::Err::Failure(e)) => Err(ParseError::from_match_error(e)),
        Err(nom::Err::Error(_)) | Err(nom::Err::Incomplete(_)) => {
            Err(ParseError::NoParseableExpression {
                unparsed: code.to_string(),
            })
        }
    }
}
