//! Minimal selectors over entry trees.
//!
//! Supports the three forms the navigator needs: `tag`, `.class`, and
//! `#id`. Matching is depth-first in document order, so [`select_first`]
//! returns the same element a host-side query would.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Empty selector | `""`, `"."`, `"#"` | [`SelectorError`] at parse time |
//! | No match | selector matches nothing | `None` |

use crate::node::{Element, Node};

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by tag name, case-insensitively.
    Tag(String),
    /// Match by class name, exactly.
    Class(String),
    /// Match by id, exactly.
    Id(String),
}

/// Errors from selector parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector string carried no name to match on.
    Empty(String),
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(raw) => write!(f, "empty selector: {raw:?}"),
        }
    }
}

impl std::error::Error for SelectorError {}

impl Selector {
    /// Parse a selector string: `"span"`, `".brand"`, or `"#name"`.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if let Some(rest) = input.strip_prefix('.') {
            non_empty(rest, input).map(Self::Class)
        } else if let Some(rest) = input.strip_prefix('#') {
            non_empty(rest, input).map(Self::Id)
        } else {
            non_empty(input, input).map(Self::Tag)
        }
    }

    /// Whether the selector matches the given element.
    #[must_use]
    pub fn matches(&self, el: &Element) -> bool {
        match self {
            Self::Tag(tag) => el.tag.eq_ignore_ascii_case(tag),
            Self::Class(class) => el.classes.iter().any(|c| c == class),
            Self::Id(id) => el.id.as_deref() == Some(id.as_str()),
        }
    }
}

fn non_empty(name: &str, raw: &str) -> Result<String, SelectorError> {
    if name.is_empty() {
        Err(SelectorError::Empty(raw.to_string()))
    } else {
        Ok(name.to_string())
    }
}

/// First descendant of `root` matching `selector`, in document order.
///
/// The root itself is not a candidate, matching host-side `querySelector`
/// semantics.
#[must_use]
pub fn select_first<'a>(root: &'a Element, selector: &Selector) -> Option<&'a Element> {
    for child in &root.children {
        if let Node::Element(el) = child {
            if selector.matches(el) {
                return Some(el);
            }
            if let Some(found) = select_first(el, selector) {
                return Some(found);
            }
        }
    }
    None
}

/// Find an element by id anywhere in a node sequence.
#[must_use]
pub fn find_by_id<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Element> {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.id.as_deref() == Some(id) {
                return Some(el);
            }
            if let Some(found) = find_by_id(&el.children, id) {
                return Some(found);
            }
        }
    }
    None
}
