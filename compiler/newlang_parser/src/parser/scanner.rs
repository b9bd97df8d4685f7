use std::borrow::Cow;

/// Characters that carry no meaning anywhere in the source.
pub const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Removes every whitespace character from the whole remaining input, not
/// only from its front. `"1 2"` therefore reads as `"12"`.
///
/// Borrows when there is nothing to remove.
pub fn skip_whitespace(input: &str) -> Cow<'_, str> {
    if input.contains(WHITESPACE) {
        Cow::Owned(input.chars().filter(|c| !WHITESPACE.contains(c)).collect())
    } else {
        Cow::Borrowed(input)
    }
}
