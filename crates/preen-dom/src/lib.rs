//! Tag descriptors, content models, and dialect tracking for the Preen cleaner.
//!
//! This crate holds the read-only data model the attribute checkers consult:
//! which structural categories an element belongs to (its *content model*),
//! and which HTML dialects a construct is legal in (its *versions*). Both are
//! plain bitmasks so that membership tests stay O(1) and descriptors can be
//! shared as `'static` data across every document being cleaned.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

// =============================================================================
// Content model
// =============================================================================

/// Structural categories an element kind belongs to.
///
/// [§ 7.5.3 Block-level and inline elements](https://www.w3.org/TR/html401/struct/global.html#h-7.5.3)
///
/// A tag's content model is the union of the categories it participates in.
/// The one category the attribute checkers care about is [`ContentModel::IMG`]:
/// elements where `align` historically means *vertical* position rather than
/// horizontal (see `preen-html`'s align checker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentModel(u32);

impl ContentModel {
    /// No category.
    pub const NONE: ContentModel = ContentModel(0);
    /// Inline (text-level) content.
    pub const INLINE: ContentModel = ContentModel(1);
    /// Block-level content.
    pub const BLOCK: ContentModel = ContentModel(1 << 1);
    /// Element has no content (void element).
    pub const EMPTY: ContentModel = ContentModel(1 << 2);
    /// Image-like: replaced elements where `align` selects vertical position.
    ///
    /// [§ 13.7.4 Alignment](https://www.w3.org/TR/html401/struct/objects.html#h-13.7.4)
    /// "The align attribute... specifies the position of an IMG, OBJECT, or
    /// APPLET with respect to its context."
    pub const IMG: ContentModel = ContentModel(1 << 3);
    /// Embedded object content.
    pub const OBJECT: ContentModel = ContentModel(1 << 4);
    /// Table structure content.
    pub const TABLE: ContentModel = ContentModel(1 << 5);
    /// Table row group content (thead, tbody, tfoot, tr).
    pub const ROWGRP: ContentModel = ContentModel(1 << 6);
    /// List content.
    pub const LIST: ContentModel = ContentModel(1 << 7);
    /// Heading content (h1..h6).
    pub const HEADING: ContentModel = ContentModel(1 << 8);

    /// Does this model include every category of `other`?
    #[must_use]
    pub const fn contains(self, other: ContentModel) -> bool {
        self.0 & other.0 == other.0
    }

    /// Const union, usable in static initializers where `|` is not.
    #[must_use]
    pub const fn union(self, other: ContentModel) -> ContentModel {
        ContentModel(self.0 | other.0)
    }

    /// True if no category is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ContentModel {
    type Output = ContentModel;

    fn bitor(self, rhs: ContentModel) -> ContentModel {
        ContentModel(self.0 | rhs.0)
    }
}

impl BitOrAssign for ContentModel {
    fn bitor_assign(&mut self, rhs: ContentModel) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ContentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(ContentModel, &str); 9] = [
            (ContentModel::INLINE, "inline"),
            (ContentModel::BLOCK, "block"),
            (ContentModel::EMPTY, "empty"),
            (ContentModel::IMG, "img"),
            (ContentModel::OBJECT, "object"),
            (ContentModel::TABLE, "table"),
            (ContentModel::ROWGRP, "rowgrp"),
            (ContentModel::LIST, "list"),
            (ContentModel::HEADING, "heading"),
        ];
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}

// =============================================================================
// Dialect versions
// =============================================================================

/// Bitmask of HTML dialects a construct is legal in.
///
/// One instance of this mask also lives on each parsing context as the
/// *accumulating* record of which dialects the document still conforms to:
/// it starts at [`Versions::ALL`] and is narrowed (bitwise AND) every time a
/// construct rules a dialect out. Detecting a proprietary alignment keyword,
/// for example, narrows the mask to [`Versions::PROPRIETARY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Versions(u16);

impl Versions {
    /// No dialect.
    pub const NONE: Versions = Versions(0);
    /// HTML 2.0.
    pub const HTML_2_0: Versions = Versions(1);
    /// HTML 3.2.
    pub const HTML_3_2: Versions = Versions(1 << 1);
    /// HTML 4.0 Strict.
    pub const HTML_4_0_STRICT: Versions = Versions(1 << 2);
    /// HTML 4.0 Transitional.
    pub const HTML_4_0_LOOSE: Versions = Versions(1 << 3);
    /// HTML 4.0 Frameset.
    pub const HTML_4_0_FRAMES: Versions = Versions(1 << 4);
    /// XHTML / XML serialization.
    pub const XML: Versions = Versions(1 << 5);
    /// Netscape extensions.
    pub const NETSCAPE: Versions = Versions(1 << 6);
    /// Microsoft extensions.
    pub const MICROSOFT: Versions = Versions(1 << 7);

    /// Every dialect, standard and proprietary. The starting value of a
    /// document's version mask.
    pub const ALL: Versions = Versions(0xFF);

    /// The proprietary dialects only. Masking a document's versions against
    /// this records that the document uses non-standard markup.
    pub const PROPRIETARY: Versions =
        Versions(Versions::NETSCAPE.0 | Versions::MICROSOFT.0);

    /// Does this mask include every dialect of `other`?
    #[must_use]
    pub const fn contains(self, other: Versions) -> bool {
        self.0 & other.0 == other.0
    }

    /// Const union, usable in static initializers where `|` is not.
    #[must_use]
    pub const fn union(self, other: Versions) -> Versions {
        Versions(self.0 | other.0)
    }

    /// Is this mask a subset of `other`? Narrowing a mask always yields a
    /// subset of the pre-narrowing value.
    #[must_use]
    pub const fn is_subset_of(self, other: Versions) -> bool {
        self.0 & other.0 == self.0
    }

    /// True if no dialect remains.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for Versions {
    /// A fresh document conforms to every dialect until narrowed.
    fn default() -> Versions {
        Versions::ALL
    }
}

impl BitAnd for Versions {
    type Output = Versions;

    fn bitand(self, rhs: Versions) -> Versions {
        Versions(self.0 & rhs.0)
    }
}

impl BitAndAssign for Versions {
    fn bitand_assign(&mut self, rhs: Versions) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Versions {
    type Output = Versions;

    fn bitor(self, rhs: Versions) -> Versions {
        Versions(self.0 | rhs.0)
    }
}

impl BitOrAssign for Versions {
    fn bitor_assign(&mut self, rhs: Versions) {
        self.0 |= rhs.0;
    }
}

// =============================================================================
// Tag descriptors
// =============================================================================

/// Immutable description of one element kind.
///
/// Descriptors are `'static` and shared across all nodes of the same tag:
/// the checkers only ever read them.
#[derive(Debug, PartialEq, Eq)]
pub struct TagDescriptor {
    /// Lowercase element name, e.g. `"img"`.
    pub name: &'static str,
    /// Dialects the element is legal in.
    pub versions: Versions,
    /// Structural categories the element belongs to.
    pub model: ContentModel,
}

/// The tag dictionary: the HTML 4 elements the cleaner knows about.
///
/// Ordering is alphabetical; lookup is linear, which is fine for a table of
/// this size on a per-attribute code path that runs once per element.
static TAG_DICT: &[TagDescriptor] = &[
    TagDescriptor {
        name: "a",
        versions: Versions::ALL,
        model: ContentModel::INLINE,
    },
    TagDescriptor {
        name: "applet",
        versions: Versions::HTML_4_0_LOOSE,
        model: ContentModel::INLINE.union(ContentModel::IMG),
    },
    TagDescriptor {
        name: "br",
        versions: Versions::ALL,
        model: ContentModel::INLINE.union(ContentModel::EMPTY),
    },
    TagDescriptor {
        name: "caption",
        versions: Versions::ALL,
        model: ContentModel::TABLE,
    },
    TagDescriptor {
        name: "div",
        versions: Versions::ALL,
        model: ContentModel::BLOCK,
    },
    TagDescriptor {
        name: "embed",
        versions: Versions::PROPRIETARY,
        model: ContentModel::INLINE.union(ContentModel::IMG),
    },
    TagDescriptor {
        name: "h1",
        versions: Versions::ALL,
        model: ContentModel::BLOCK.union(ContentModel::HEADING),
    },
    TagDescriptor {
        name: "hr",
        versions: Versions::ALL,
        model: ContentModel::BLOCK.union(ContentModel::EMPTY),
    },
    TagDescriptor {
        name: "iframe",
        versions: Versions::HTML_4_0_LOOSE,
        model: ContentModel::INLINE,
    },
    TagDescriptor {
        name: "img",
        versions: Versions::ALL,
        model: ContentModel::INLINE
            .union(ContentModel::IMG)
            .union(ContentModel::EMPTY),
    },
    TagDescriptor {
        name: "input",
        versions: Versions::ALL,
        model: ContentModel::INLINE.union(ContentModel::EMPTY),
    },
    TagDescriptor {
        name: "li",
        versions: Versions::ALL,
        model: ContentModel::LIST,
    },
    TagDescriptor {
        name: "object",
        versions: Versions::HTML_4_0_STRICT
            .union(Versions::HTML_4_0_LOOSE)
            .union(Versions::HTML_4_0_FRAMES),
        model: ContentModel::INLINE
            .union(ContentModel::IMG)
            .union(ContentModel::OBJECT),
    },
    TagDescriptor {
        name: "ol",
        versions: Versions::ALL,
        model: ContentModel::BLOCK.union(ContentModel::LIST),
    },
    TagDescriptor {
        name: "p",
        versions: Versions::ALL,
        model: ContentModel::BLOCK,
    },
    TagDescriptor {
        name: "table",
        versions: Versions::ALL,
        model: ContentModel::BLOCK.union(ContentModel::TABLE),
    },
    TagDescriptor {
        name: "tbody",
        versions: Versions::HTML_4_0_STRICT
            .union(Versions::HTML_4_0_LOOSE)
            .union(Versions::HTML_4_0_FRAMES),
        model: ContentModel::TABLE.union(ContentModel::ROWGRP),
    },
    TagDescriptor {
        name: "td",
        versions: Versions::ALL,
        model: ContentModel::TABLE,
    },
    TagDescriptor {
        name: "th",
        versions: Versions::ALL,
        model: ContentModel::TABLE,
    },
    TagDescriptor {
        name: "tr",
        versions: Versions::ALL,
        model: ContentModel::TABLE.union(ContentModel::ROWGRP),
    },
    TagDescriptor {
        name: "ul",
        versions: Versions::ALL,
        model: ContentModel::BLOCK.union(ContentModel::LIST),
    },
];

/// Look up a tag descriptor by its lowercase element name.
///
/// Returns `None` for unknown elements; the checkers treat an unknown
/// element as having no capabilities.
#[must_use]
pub fn lookup_tag(name: &str) -> Option<&'static TagDescriptor> {
    TAG_DICT.iter().find(|tag| tag.name == name)
}

// =============================================================================
// Nodes and attribute occurrences
// =============================================================================

/// An element node, as seen by the attribute checkers.
///
/// The checkers use a node two ways only: as the addressing context for
/// diagnostics (its element name) and as the source of the capability read
/// (its tag descriptor's content model). The attribute list itself is owned
/// by the tree builder, which hands each [`AttVal`] to the checkers by
/// mutable reference alongside its owning node.
#[derive(Debug)]
pub struct Node {
    /// Element name as written in the document, lowercased.
    pub element: String,
    /// Dictionary entry for this element kind, if it is a known tag.
    pub tag: Option<&'static TagDescriptor>,
}

impl Node {
    /// Create a node for `element`, resolving its tag through the dictionary.
    #[must_use]
    pub fn new(element: &str) -> Node {
        Node {
            element: element.to_string(),
            tag: lookup_tag(element),
        }
    }

    /// Does this element's content model include `model`?
    ///
    /// Unknown elements have no content model and answer `false`.
    #[must_use]
    pub fn has_content_model(&self, model: ContentModel) -> bool {
        self.tag.is_some_and(|tag| tag.model.contains(model))
    }

    /// `img`, `object`, `applet` and `embed` use align for vertical position.
    #[must_use]
    pub fn is_image_like(&self) -> bool {
        self.has_content_model(ContentModel::IMG)
    }
}

/// One attribute occurrence on an element.
///
/// `value` is `None` for minimized attributes written without a value
/// (`<input disabled>`). Checkers may rewrite `value` in place; they never
/// touch `attribute` and never detach the occurrence from its element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttVal {
    /// Attribute name, lowercased.
    pub attribute: String,
    /// Attribute value, if one was written.
    pub value: Option<String>,
}

impl AttVal {
    /// Create an attribute occurrence with a value.
    #[must_use]
    pub fn new(attribute: &str, value: &str) -> AttVal {
        AttVal {
            attribute: attribute.to_string(),
            value: Some(value.to_string()),
        }
    }

    /// Create a minimized attribute occurrence (no value).
    #[must_use]
    pub fn minimized(attribute: &str) -> AttVal {
        AttVal {
            attribute: attribute.to_string(),
            value: None,
        }
    }
}
