use nom::error::{ErrorKind, ParseError as NomParseError};

/// Why a matcher did not produce a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchErrorKind {
    /// Ordinary no-match from a nom combinator; callers try another
    /// alternative.
    Nom(ErrorKind),
    /// Text accepted by the literal grammar that does not parse as f64.
    InvalidNumber(String),
    /// An operator symbol with no `BinaryOperator` counterpart.
    UnknownOperator(char),
}

/// Error type threaded through every matcher.
///
/// `input` is the cursor at which the failing matcher was invoked; the
/// caller's own cursor is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchError<'a> {
    pub input: &'a str,
    pub kind: MatchErrorKind,
}

impl<'a> MatchError<'a> {
    pub fn new(input: &'a str, kind: MatchErrorKind) -> Self {
        Self { input, kind }
    }

    pub fn invalid_number(input: &'a str, text: &str) -> Self {
        Self::new(input, MatchErrorKind::InvalidNumber(text.to_string()))
    }

    pub fn unknown_operator(input: &'a str, symbol: char) -> Self {
        Self::new(input, MatchErrorKind::UnknownOperator(symbol))
    }

    /// True for failures no other grammar alternative can recover from.
    pub fn is_fatal(&self) -> bool {
        !matches!(self.kind, MatchErrorKind::Nom(_))
    }
}

impl<'a> NomParseError<&'a str> for MatchError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        Self::new(input, MatchErrorKind::Nom(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

/// Result of every matcher: the remainder cursor and the produced value.
pub type MatchResult<'a, T> = nom::IResult<&'a str, T, MatchError<'a>>;

/// A routine, recoverable no-match reported at `input`.
pub(crate) fn no_match<'a, T>(input: &'a str, kind: ErrorKind) -> MatchResult<'a, T> {
    Err(nom::Err::Error(MatchError::from_error_kind(input, kind)))
}

/// Re-anchors a recoverable error at `input`, so a composite matcher that
/// fails part way reports the cursor it was called with. Fatal errors pass
/// through untouched.
pub(crate) fn reset_to<'a>(
    input: &'a str,
) -> impl Fn(nom::Err<MatchError<'a>>) -> nom::Err<MatchError<'a>> {
    move |err| match err {
        nom::Err::Error(e) => nom::Err::Error(MatchError { input, ..e }),
        other => other,
    }
}

/// Fatal errors surfaced by `parse_program`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no parseable expression found in code (unparsed: {unparsed:?})")]
    NoParseableExpression { unparsed: String },
    #[error("invalid number {text:?}")]
    InvalidNumber { text: String },
    #[error("unknown operator {symbol:?}")]
    UnknownOperator { symbol: char },
}

impl ParseError {
    pub(crate) fn from_match_error(err: MatchError<'_>) -> Self {
        match err.kind {
            MatchErrorKind::InvalidNumber(text) => ParseError::InvalidNumber { text },
            MatchErrorKind::UnknownOperator(symbol) => ParseError::UnknownOperator { symbol },
            MatchErrorKind::Nom(_) => ParseError::NoParseableExpression {
                unparsed: err.input.to_string(),
            },
        }
    }
}
