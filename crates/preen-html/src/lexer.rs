//! Per-document parsing context and identifier grammar predicates.
//!
//! One [`Lexer`] exists per document being cleaned. It carries the only two
//! pieces of state the attribute checkers touch across calls: the behavioral
//! configuration they read, and the dialect-version bitmask they narrow when
//! proprietary markup is detected. Both are owned by exactly one document's
//! cleaning pass, so no synchronization is involved.

use preen_common::report::ReportSink;
use preen_dom::Versions;

// =============================================================================
// Configuration
// =============================================================================

/// Behavioral flags the attribute checkers consume.
///
/// Loading and parsing of configuration happens upstream; the checkers only
/// read the resulting flags.
#[derive(Debug, Clone, Copy)]
pub struct Configuration {
    /// Rewrite backslashes to forward slashes in URL-valued attributes.
    ///
    /// DOS-style paths pasted into `href`/`src` are a common authoring
    /// mistake; with this set, `a\b\c` becomes `a/b/c`.
    pub fix_backslash: bool,
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            fix_backslash: true,
        }
    }
}

// =============================================================================
// Parsing context
// =============================================================================

/// Per-document parsing context.
///
/// Owns the accumulating dialect-version bitmask: it starts at
/// [`Versions::ALL`] and is only ever narrowed (bitwise AND) as constructs
/// rule dialects out. Scope its lifetime to a single document's cleaning
/// pass; it is the one piece of mutable state shared across checker calls.
#[derive(Debug, Default)]
pub struct Lexer {
    /// Behavioral flags read by the checkers.
    pub configuration: Configuration,
    /// Dialects the document still conforms to.
    pub versions: Versions,
    /// Where the checkers record diagnostics.
    pub report: ReportSink,
}

impl Lexer {
    /// Create a context for a fresh document with the given configuration.
    #[must_use]
    pub const fn new(configuration: Configuration) -> Lexer {
        Lexer {
            configuration,
            versions: Versions::ALL,
            report: ReportSink::new(),
        }
    }
}

// =============================================================================
// Identifier grammar
// =============================================================================

/// Is `c` legal as the first character of an HTML identifier?
///
/// [§ 6.2 SGML basic types](https://www.w3.org/TR/html401/types.html#type-name)
/// "ID and NAME tokens must begin with a letter."
#[must_use]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Is `c` legal in the non-initial position of an HTML identifier?
///
/// [§ 6.2 SGML basic types](https://www.w3.org/TR/html401/types.html#type-name)
/// "...and may be followed by any number of letters, digits, hyphens,
/// underscores, colons, and periods."
#[must_use]
pub fn is_namechar(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

// =============================================================================
// Keyword matching
// =============================================================================

/// Case-insensitive membership test for attribute keyword sets.
///
/// Every checker that matches keyword values goes through this one helper so
/// that case-folding semantics cannot drift between them.
#[must_use]
pub fn is_one_of(value: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| value.eq_ignore_ascii_case(keyword))
}
