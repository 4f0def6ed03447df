//! # Introduction
//!
//! ffigen parses textual C function declarations and emits the declarative
//! TypeScript manifest that Deno's FFI loader consumes
//! (`Deno.ForeignLibraryInterface`). It is the pure transformation core:
//! reading declaration lists, CLI handling, and writing files are left to the
//! caller.
//!
//! ## Pipeline
//!
//! ```text
//! Declaration line → symbol::parse → Signature → InterfaceWriter → manifest text
//! ```
//!
//! 1. [`types`] — resolves a raw C type spelling to a canonical native type
//!    tag, or defers it to the external `Types` namespace.
//! 2. [`symbol`] — parses one declaration line (flags, return type, name,
//!    parameters, docstring) into a [`symbol::Signature`].
//! 3. [`writer`] — accumulates one manifest block per signature between a
//!    `begin`/`end` framing pair.
//!
//! ## Supported declaration grammar
//!
//! ```text
//! [--optional] [--nonblocking] <return-type> <name> ( <params> ) [// <docstring>]
//! ```
//!
//! Type qualifiers (`const`, `volatile`, `restrict`) are stripped before
//! resolution. A lone `void` parameter list denotes zero parameters.
//! Variadic functions, unions, inline struct definitions, and
//! multi-dimensional arrays are not supported.
//!
//! Every operation is synchronous and pure; the only shared state is the
//! read-only type mapping table, so parsing may run unsynchronized across
//! threads as long as each thread owns its writer.

pub mod errors;
pub mod symbol;
pub mod types;
pub mod utils;
pub mod writer;
