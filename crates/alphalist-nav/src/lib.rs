#![forbid(unsafe_code)]

//! Alphabetical classification and navigation for entry lists.
//!
//! Takes an unordered snapshot of display entries and derives everything a
//! renderer needs to present them grouped by letter with a letter/digit
//! navigation bar: a sparse [`BucketMap`], an ordered grouped view
//! ([`BucketList`]), an ordered control list ([`NavEntry`]), and a
//! [`SelectionState`] machine deciding which group(s) are visible.
//!
//! The crate is the pure core. It never touches a concrete UI surface:
//! entries come in through the [`EntryText`] seam, selection events come in
//! as [`NavTarget`] values, and everything going out is plain data.
//!
//! # Invariants
//!
//! 1. **Totality**: every entry with non-empty extracted text lands in
//!    exactly one bucket; empty-text entries are dropped entirely.
//!
//! 2. **Determinism**: identical text and configuration always classify to
//!    the same key, no matter how many entries were classified before.
//!
//! 3. **One-shot construction**: the bucket map, view, and navigation list
//!    are computed once from one snapshot and never recomputed. The
//!    selection state is the only thing that mutates afterwards, one step
//!    per selection event.
//!
//! 4. **Display order**: realized keys sort by canonical form, digits
//!    bucket first among word characters, the `-` bucket always last.
//!
//! # Example
//!
//! ```
//! use alphalist_nav::{AlphaNavigator, BucketKey, NavConfig, NavTarget};
//! use alphalist_text::{Element, Node};
//!
//! let entries: Vec<Node> = ["Apple", "Banana", "7Eleven"]
//!     .iter()
//!     .map(|name| Element::new("li").text(*name).into())
//!     .collect();
//!
//! let mut nav = AlphaNavigator::from_entries(&entries, NavConfig::default())?;
//! assert!(nav.bucket_map().contains(BucketKey::Letter('a')));
//!
//! nav.select(NavTarget::Key(BucketKey::Letter('b')));
//! assert_eq!(nav.active().keys, vec![BucketKey::Letter('b')]);
//! # Ok::<(), alphalist_nav::NavError>(())
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod key;
pub mod nav;
pub mod navigator;
pub mod prefix;
pub mod state;
pub mod view;

pub use classify::{BucketMap, EntryId, classify};
pub use config::NavConfig;
pub use error::NavError;
pub use key::{BucketKey, NavTarget};
pub use nav::{NavEntry, build_navigation};
pub use navigator::{AlphaNavigator, EntryText};
pub use prefix::{PrefixMatcher, PrefixRule};
pub use state::{ActiveSet, SelectionState, active_set, initial_state, transition};
pub use view::{BucketGroup, BucketList, build_view, heading_text};
