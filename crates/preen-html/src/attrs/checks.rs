//! Per-class attribute value checkers.
//!
//! Each checker validates (and where appropriate normalizes) the values of
//! one semantic class of attributes. Checkers are fieldless and stateless:
//! [`AttrCheck`] is `Copy`, carries no data, and is safe to share across any
//! number of concurrent cleaning passes. The only mutable state a check
//! touches is the attribute's own value and the owning context's
//! dialect-version mask.
//!
//! A checker never removes an attribute, never moves it to another element,
//! and never replaces an invalid value with a default: invalid values are
//! reported and left as written.

use preen_common::report::DiagnosticCode;
use preen_dom::{AttVal, Node, Versions};
use strum_macros::Display;

use crate::lexer::{Lexer, is_letter, is_namechar, is_one_of};

/// Horizontal alignment keywords.
///
/// [§ 15.1.2 Alignment](https://www.w3.org/TR/html401/present/graphics.html#h-15.1.2)
const ALIGN_KEYWORDS: [&str; 4] = ["left", "center", "right", "justify"];

/// Vertical alignment keywords, valid on any cell or image-like element.
///
/// [§ 11.3.2 Horizontal and vertical alignment](https://www.w3.org/TR/html401/struct/tables.html#h-11.3.2)
const VALIGN_KEYWORDS: [&str; 4] = ["top", "middle", "bottom", "baseline"];

/// Alignment keywords that are only meaningful in the image-like vertical
/// override context (`<img align=left>` floats the image).
const VALIGN_SIDE_KEYWORDS: [&str; 2] = ["left", "right"];

/// Vertical alignment keywords from the Netscape/Microsoft dialects.
/// Recognized, reported, and recorded as proprietary markup.
const VALIGN_PROPRIETARY_KEYWORDS: [&str; 4] =
    ["texttop", "absmiddle", "absbottom", "textbottom"];

/// One attribute semantic class and its validation rule.
///
/// The enumeration doubles as the checker registry: variants are fieldless
/// singletons, so holding the variant *is* holding the checker. Dispatch is
/// the `match` in [`AttrCheck::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AttrCheck {
    /// URL-shaped values: `href`, `src`, `action`, ... May normalize
    /// backslashes to forward slashes.
    Url,
    /// Script values (event handlers). Reserved dispatch point; accepts
    /// anything.
    Script,
    /// Horizontal alignment, reinterpreted as vertical on image-like
    /// elements.
    Align,
    /// Vertical alignment, including the proprietary keyword extensions.
    Valign,
    /// Minimized boolean attributes. Reserved dispatch point; accepts
    /// anything.
    Bool,
    /// HTML identifier grammar (`id`).
    Id,
    /// Name tokens (`name`). Reserved dispatch point; accepts anything.
    Name,
}

impl AttrCheck {
    /// Validate `attval` on `node`.
    ///
    /// Effects are limited to: rewriting `attval.value` in place, recording
    /// diagnostics on `lexer.report`, and narrowing `lexer.versions`.
    /// Malformed input is never fatal.
    pub fn check(self, lexer: &mut Lexer, node: &Node, attval: &mut AttVal) {
        match self {
            AttrCheck::Url => check_url(lexer, node, attval),
            AttrCheck::Script => check_script(lexer, node, attval),
            AttrCheck::Align => check_align(lexer, node, attval),
            AttrCheck::Valign => check_valign(lexer, node, attval),
            AttrCheck::Bool => check_bool(lexer, node, attval),
            AttrCheck::Id => check_id(lexer, node, attval),
            AttrCheck::Name => check_name(lexer, node, attval),
        }
    }
}

// =============================================================================
// URL
// =============================================================================

/// Check a URL-valued attribute.
///
/// No shape validation is attempted; the only rule is the backslash
/// normalization behind `fix_backslash`. Running it twice is the same as
/// running it once.
fn check_url(lexer: &mut Lexer, node: &Node, attval: &mut AttVal) {
    if let Some(value) = attval.value.as_mut() {
        if lexer.configuration.fix_backslash {
            *value = value.replace('\\', "/");
        }
    } else {
        lexer.report.attr_error(
            &node.element,
            &attval.attribute,
            DiagnosticCode::MissingAttrValue,
        );
    }
}

// =============================================================================
// Script / Bool / Name (reserved dispatch points)
// =============================================================================

/// Check a script-valued attribute. Accepts anything.
fn check_script(_lexer: &mut Lexer, _node: &Node, _attval: &mut AttVal) {}

/// Check a minimized boolean attribute. Accepts anything.
fn check_bool(_lexer: &mut Lexer, _node: &Node, _attval: &mut AttVal) {}

/// Check a name-token attribute. Accepts anything.
fn check_name(_lexer: &mut Lexer, _node: &Node, _attval: &mut AttVal) {}

// =============================================================================
// Align / Valign
// =============================================================================

/// Check an `align` attribute.
///
/// `img`, `object`, `applet` and `embed` use align for vertical position,
/// so on an image-like element the whole check is handed to
/// [`AttrCheck::Valign`]. This is a full substitution, not a fallback.
fn check_align(lexer: &mut Lexer, node: &Node, attval: &mut AttVal) {
    if node.is_image_like() {
        AttrCheck::Valign.check(lexer, node, attval);
        return;
    }

    let Some(value) = attval.value.as_deref() else {
        lexer.report.attr_error(
            &node.element,
            &attval.attribute,
            DiagnosticCode::MissingAttrValue,
        );
        return;
    };

    if !is_one_of(value, &ALIGN_KEYWORDS) {
        lexer
            .report
            .attr_error(&node.element, value, DiagnosticCode::BadAttributeValue);
    }
}

/// Check a vertical-alignment value.
///
/// Buckets are tried in a fixed order and the first match wins:
/// standard keywords, then the side keywords (legal only on image-like
/// elements), then the proprietary keywords, then everything else.
fn check_valign(lexer: &mut Lexer, node: &Node, attval: &mut AttVal) {
    let Some(value) = attval.value.as_deref() else {
        lexer.report.attr_error(
            &node.element,
            &attval.attribute,
            DiagnosticCode::MissingAttrValue,
        );
        return;
    };

    if is_one_of(value, &VALIGN_KEYWORDS) {
        // all is fine
    } else if is_one_of(value, &VALIGN_SIDE_KEYWORDS) {
        if !node.is_image_like() {
            lexer
                .report
                .attr_error(&node.element, value, DiagnosticCode::BadAttributeValue);
        }
    } else if is_one_of(value, &VALIGN_PROPRIETARY_KEYWORDS) {
        // The document now provably uses non-standard markup, whatever
        // element this occurred on.
        lexer.versions &= Versions::PROPRIETARY;
        lexer.report.attr_error(
            &node.element,
            value,
            DiagnosticCode::ProprietaryAttrValue,
        );
    } else {
        lexer
            .report
            .attr_error(&node.element, value, DiagnosticCode::BadAttributeValue);
    }
}

// =============================================================================
// Id
// =============================================================================

/// Check an `id` attribute against the HTML identifier grammar.
///
/// [§ 6.2 SGML basic types](https://www.w3.org/TR/html401/types.html#type-name)
/// "ID and NAME tokens must begin with a letter ([A-Za-z]) and may be
/// followed by any number of letters, digits, hyphens, underscores, colons,
/// and periods."
///
/// Only the first violation is reported; the scan stops there.
fn check_id(lexer: &mut Lexer, node: &Node, attval: &mut AttVal) {
    let Some(value) = attval.value.as_deref() else {
        lexer.report.attr_error(
            &node.element,
            &attval.attribute,
            DiagnosticCode::MissingAttrValue,
        );
        return;
    };

    let mut chars = value.chars();
    match chars.next() {
        None => {
            lexer
                .report
                .attr_error(&node.element, value, DiagnosticCode::InvalidIdValue);
        }
        Some(first) if !is_letter(first) => {
            lexer
                .report
                .attr_error(&node.element, value, DiagnosticCode::InvalidIdValue);
        }
        Some(_) => {
            if chars.any(|c| !is_namechar(c)) {
                lexer
                    .report
                    .attr_error(&node.element, value, DiagnosticCode::InvalidIdValue);
            }
        }
    }
}
