//! Plain-text extraction over entry trees.
//!
//! Mirrors the usual "text content" contract: concatenate every descendant
//! text leaf in document order, skip comments, recurse into containers.
//! The walk is bounded by [`MAX_EXTRACT_DEPTH`] so a hostile or broken
//! input tree cannot blow the stack; anything deeper contributes nothing.

use crate::node::Node;

/// Maximum tree depth the extraction walk descends into.
pub const MAX_EXTRACT_DEPTH: usize = 64;

/// Full text content of a single node.
///
/// Text leaves are returned verbatim, comments are skipped, and element
/// nodes recurse into their children. Never fails; an empty result means
/// the subtree carries no text.
#[must_use]
pub fn text_content(node: &Node) -> String {
    let mut out = String::new();
    collect(node, 0, &mut out);
    out
}

/// Text content of an ordered node sequence, concatenated in order.
#[must_use]
pub fn text_of_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        collect(node, 0, &mut out);
    }
    out
}

fn collect(node: &Node, depth: usize, out: &mut String) {
    if depth > MAX_EXTRACT_DEPTH {
        return;
    }
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Comment(_) => {}
        Node::Element(el) => {
            for child in &el.children {
                collect(child, depth + 1, out);
            }
        }
    }
}
