//! Entry tree nodes.
//!
//! An entry is either an [`Element`] container, a verbatim text leaf, or a
//! comment. Comments exist so hosts can hand over annotated trees without
//! pre-filtering; extraction skips them.

/// A single node in an entry tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Container with ordered children.
    Element(Element),
    /// Leaf text, returned verbatim by extraction.
    Text(String),
    /// Comment, invisible to extraction.
    Comment(String),
}

impl Node {
    /// Create a text leaf.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a comment node.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment(content.into())
    }

    /// The contained element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// A container node: tag name, optional id, classes, ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name. Compared case-insensitively by selectors.
    pub tag: String,
    /// Optional unique id within a tree.
    pub id: Option<String>,
    /// Class names, matched exactly by selectors.
    pub classes: Vec<String>,
    /// Ordered children.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag and no children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class name.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text leaf child.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    /// Full text content of this element's subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        crate::extract::text_of_nodes(&self.children)
    }
}
