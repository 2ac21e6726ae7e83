//! Attribute checkers, the attribute dictionary, and dispatch.

/// Per-class attribute value checkers.
pub mod checks;
/// The attribute name → semantic class dictionary.
pub mod dict;

pub use checks::AttrCheck;
pub use dict::checker_for;

use preen_dom::{AttVal, Node};

use crate::lexer::Lexer;

/// Validate one attribute occurrence on `node`.
///
/// Resolves the attribute's semantic class through the dictionary and runs
/// the matching checker, which may rewrite `attval.value` in place, record
/// diagnostics on `lexer.report`, and narrow `lexer.versions`. Attributes
/// the dictionary does not know pass through untouched.
///
/// This never fails and never stops the cleaning pass: every malformed
/// value is a diagnostic, not an error.
pub fn check_attribute(lexer: &mut Lexer, node: &Node, attval: &mut AttVal) {
    if let Some(checker) = checker_for(&attval.attribute) {
        checker.check(lexer, node, attval);
    }
}
