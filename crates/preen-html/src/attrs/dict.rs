//! The attribute dictionary: attribute name → semantic class.
//!
//! A fixed table covering the HTML 4 attributes whose values the cleaner
//! validates. Attributes absent from the table have no checker and pass
//! through dispatch untouched.

use super::checks::AttrCheck;

/// Attribute names and the checker class each resolves to.
///
/// [§ index of attributes](https://www.w3.org/TR/html401/index/attributes.html)
static ATTR_DICT: &[(&str, AttrCheck)] = &[
    ("action", AttrCheck::Url),
    ("align", AttrCheck::Align),
    ("background", AttrCheck::Url),
    ("checked", AttrCheck::Bool),
    ("cite", AttrCheck::Url),
    ("classid", AttrCheck::Url),
    ("codebase", AttrCheck::Url),
    ("compact", AttrCheck::Bool),
    ("data", AttrCheck::Url),
    ("declare", AttrCheck::Bool),
    ("defer", AttrCheck::Bool),
    ("disabled", AttrCheck::Bool),
    ("href", AttrCheck::Url),
    ("id", AttrCheck::Id),
    ("ismap", AttrCheck::Bool),
    ("longdesc", AttrCheck::Url),
    ("multiple", AttrCheck::Bool),
    ("name", AttrCheck::Name),
    ("nohref", AttrCheck::Bool),
    ("noresize", AttrCheck::Bool),
    ("noshade", AttrCheck::Bool),
    ("nowrap", AttrCheck::Bool),
    ("onblur", AttrCheck::Script),
    ("onchange", AttrCheck::Script),
    ("onclick", AttrCheck::Script),
    ("onfocus", AttrCheck::Script),
    ("onkeydown", AttrCheck::Script),
    ("onkeypress", AttrCheck::Script),
    ("onkeyup", AttrCheck::Script),
    ("onload", AttrCheck::Script),
    ("onmousedown", AttrCheck::Script),
    ("onmousemove", AttrCheck::Script),
    ("onmouseout", AttrCheck::Script),
    ("onmouseover", AttrCheck::Script),
    ("onmouseup", AttrCheck::Script),
    ("onreset", AttrCheck::Script),
    ("onselect", AttrCheck::Script),
    ("onsubmit", AttrCheck::Script),
    ("onunload", AttrCheck::Script),
    ("profile", AttrCheck::Url),
    ("readonly", AttrCheck::Bool),
    ("selected", AttrCheck::Bool),
    ("src", AttrCheck::Url),
    ("usemap", AttrCheck::Url),
    ("valign", AttrCheck::Valign),
];

/// Resolve an attribute name to its checker class.
///
/// Matching is ASCII case-insensitive; attribute names in HTML are not
/// case-sensitive and tokenizers differ on whether they lowercase.
#[must_use]
pub fn checker_for(attribute: &str) -> Option<AttrCheck> {
    ATTR_DICT
        .iter()
        .find(|(name, _)| attribute.eq_ignore_ascii_case(name))
        .map(|&(_, checker)| checker)
}
