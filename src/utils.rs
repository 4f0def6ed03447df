//! Lexical splitting helpers
//!
//! [`segments`] is the boundary-token splitter the signature parser is built
//! on: it cuts the input at each boundary token in turn and returns the
//! delineated substrings with the tokens themselves removed.

/// Splits `input` at each of `bounds`, visited in order.
///
/// For every boundary token found, the text preceding it becomes a segment
/// and scanning resumes just past the token; tokens that never occur are
/// skipped. Once at least one token has matched, the remaining text (possibly
/// empty) is emitted as the final segment. An input containing no boundary
/// token at all yields the input as its only segment; an empty input yields
/// no segments.
///
/// ```
/// use ffigen::utils::segments;
///
/// assert_eq!(
///     segments("int add(int a, int b) // adds", &["(", ")", "//"]),
///     vec!["int add", "int a, int b", " ", " adds"]
/// );
/// ```
pub fn segments(input: &str, bounds: &[&str]) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = input;
    let mut matched = false;

    for bound in bounds {
        if let Some(index) = rest.find(bound) {
            pieces.push(rest[..index].to_string());
            rest = &rest[index + bound.len()..];
            matched = true;
        }
    }

    if matched {
        pieces.push(rest.to_string());
    } else if !input.is_empty() {
        pieces.push(input.to_string());
    }

    pieces
}
