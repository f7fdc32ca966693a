#![forbid(unsafe_code)]

//! Entry tree and plain-text extraction for AlphaList.
//!
//! Hosts hand the navigator a snapshot of display entries. This crate
//! defines the minimal tree shape those entries take ([`Node`]) and the
//! two read-only walks the navigator needs: full text extraction and
//! first-match descendant selection.
//!
//! # Invariants
//!
//! 1. **Extraction is total**: [`text_content`] never fails. Unsupported
//!    content (comments, subtrees past the depth limit) contributes
//!    nothing instead of aborting the walk.
//!
//! 2. **Extraction is pure**: no node is mutated, and repeated calls on
//!    the same tree return identical strings.
//!
//! 3. **Document order**: concatenation follows child order exactly, for
//!    single nodes and node sequences alike.

pub mod extract;
pub mod node;
pub mod select;

pub use extract::{MAX_EXTRACT_DEPTH, text_content, text_of_nodes};
pub use node::{Element, Node};
pub use select::{Selector, SelectorError, find_by_id, select_first};
