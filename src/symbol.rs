//! Declaration signature parsing
//!
//! Turns one raw declaration line into a structured [`Signature`], delegating
//! per-field type resolution to [`crate::types`].
//!
//! # Grammar
//!
//! ```text
//! declaration ::= ["--optional"] ["--nonblocking"] type name "(" params ")" ["//" docstring]
//! params      ::= "void" | param ("," param)*
//! param       ::= type [name]
//! ```
//!
//! Parsing is pure and performs no I/O; it fails only through the three
//! [`ParseError`] conditions.

use crate::errors::ParseError;
use crate::types::{self, ParseResult};
use crate::utils;

const OPTIONAL_CANDIDATE: &str = "--optional";
const NONBLOCKING_CANDIDATE: &str = "--nonblocking";
const PARAMS_START: &str = "(";
const PARAMS_END: &str = ")";
const DOCSTRING_START: &str = "//";
const PARAM_SEPARATOR: char = ',';

/// Signature parsing options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Strip everything up to and including the first underscore from the C
    /// name, if one is present. Applied before the runtime-facing name is
    /// derived, so both names lose the prefix consistently.
    pub strip_prefix: bool,
}

/// One parsed parameter: a resolved type plus the declared identifier, if the
/// declarator carried one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: ParseResult,
    pub c_name: Option<String>,
}

/// A fully parsed declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Runtime-facing name: `c_name` with its first character lower-cased.
    pub lib_name: String,
    /// The C symbol name (after prefix stripping, when enabled).
    pub c_name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: ParseResult,
    pub is_optional: bool,
    pub is_nonblocking: bool,
    pub docstring: Option<String>,
}

/// Parses one declaration line into a [`Signature`].
///
/// Flag markers are recognized in fixed order (`--optional` first, then
/// `--nonblocking`); either, both, or neither may be present. A parameter
/// whose C type is exactly `void` is dropped wherever it appears, which is
/// how a C `(void)` parameter list collapses to zero parameters.
pub fn parse(input: &str, config: &Config) -> Result<Signature, ParseError> {
    let mut input = input.trim();

    let is_optional = input.starts_with(OPTIONAL_CANDIDATE);
    if is_optional {
        input = input[OPTIONAL_CANDIDATE.len()..].trim();
    }
    let is_nonblocking = input.starts_with(NONBLOCKING_CANDIDATE);
    if is_nonblocking {
        input = input[NONBLOCKING_CANDIDATE.len()..].trim();
    }

    let segments = utils::segments(input, &[PARAMS_START, PARAMS_END, DOCSTRING_START]);

    let declaration = segments.first().map(|s| s.trim()).unwrap_or("");
    if declaration.is_empty() {
        return Err(ParseError::InvalidSymbol(input.to_string()));
    }

    let declarator = types::split(declaration);
    let Some(mut c_name) = declarator.c_name else {
        return Err(ParseError::UnnamedSymbol(input.to_string()));
    };
    if config.strip_prefix {
        if let Some(index) = c_name.find('_') {
            c_name = c_name[index + 1..].to_string();
        }
    }

    let return_type = types::parse(&declarator.c_type)?;

    let mut chars = c_name.chars();
    let lib_name = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };

    // The parameter-list segment exists only once both parentheses have been
    // cut, i.e. with three or more segments.
    let mut parameters = Vec::new();
    if segments.len() >= 3 {
        let list = segments[1].trim();
        if !list.is_empty() {
            for piece in list.split(PARAM_SEPARATOR) {
                let field = types::split(piece);
                if field.c_type == "void" {
                    continue;
                }
                parameters.push(Parameter {
                    ty: types::parse(&field.c_type)?,
                    c_name: field.c_name,
                });
            }
        }
    }

    let docstring = match segments.last() {
        Some(last) if segments.len() > 1 => {
            let last = last.trim();
            (!last.is_empty()).then(|| last.to_string())
        }
        _ => None,
    };

    Ok(Signature {
        lib_name,
        c_name,
        parameters,
        return_type,
        is_optional,
        is_nonblocking,
        docstring,
    })
}
