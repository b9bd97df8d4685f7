pub mod parser;

pub use parser::{parse_program, skip_whitespace, MatchError, MatchErrorKind, MatchResult, ParseError};


// Integration tests are in the tests/ directory
