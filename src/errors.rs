//! Parse error taxonomy
//!
//! All failures are detected synchronously while parsing a single declaration
//! and are fatal to that declaration — no partial signature is ever returned.
//! The batch driver decides whether to skip the failing line, abort the run,
//! or report and continue.

use thiserror::Error;

/// Failure conditions raised by [`crate::types::parse`] and
/// [`crate::symbol::parse`]. Each carries the offending input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No declaration could be isolated before the parameter list.
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// The declaration did not split into a return type and a function name.
    #[error("Unnamed symbols are not supported: {0}")]
    UnnamedSymbol(String),

    /// The type spelling contains the `...` variadic marker.
    #[error("Variadic types are not supported: {0}")]
    UnsupportedVariadic(String),
}
