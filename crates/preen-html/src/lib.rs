//! Attribute validation and normalization core for the Preen cleaner.
//!
//! # Scope
//!
//! This crate implements:
//! - **Parsing context**: per-document configuration, dialect-version
//!   tracking, and the identifier grammar predicates
//! - **Attribute checkers**: one validator per attribute semantic class
//!   (URL, script, align, valign, bool, id, name), each of which may rewrite
//!   the attribute's value in place and report diagnostics
//! - **Attribute dictionary and dispatch**: the fixed name-to-class table
//!   and the entry point the tree builder calls per attribute
//!
//! Checkers never fail: every malformed input is a diagnostic, not an error,
//! and parsing always continues.

/// Attribute checkers, dictionary, and dispatch.
pub mod attrs;
/// Per-document parsing context and grammar predicates.
pub mod lexer;

pub use attrs::{AttrCheck, check_attribute, checker_for};
pub use lexer::{Configuration, Lexer};
