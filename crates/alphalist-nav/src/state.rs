//! Selection state machine.
//!
//! Resolves which bucket(s) are visible: one initial resolution at
//! construction, then exactly one transition per user selection event.
//!
//! # Invariants
//!
//! - At most one real key is active at a time, except the aggregate state,
//!   which activates the union of all populated real buckets.
//! - Transitions are pure: `(state, target) -> state`, no hidden cursor.
//! - A stale or unknown key target never panics and never blanks the
//!   view; it is dropped with a warning and the prior state kept.

use crate::classify::BucketMap;
use crate::config::NavConfig;
use crate::key::{BucketKey, NavTarget};

/// Which bucket(s) are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionState {
    /// No visibility resolved (empty snapshot with nothing selectable).
    Uninitialized,
    /// Every populated real bucket is visible.
    AllActive,
    /// Exactly one real bucket is visible.
    SingleActive(BucketKey),
    /// Nothing but the optional placeholder is visible.
    HiddenInitial,
    /// Only the permanent no-match placeholder is visible.
    NoMatchActive,
}

/// The visible set derived from a state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveSet {
    /// Active bucket keys, in display order.
    pub keys: Vec<BucketKey>,
    /// Whether the permanent no-match group is active.
    pub no_match: bool,
}

/// Resolve the initial state. First matching rule wins:
///
/// 1. a configured initial letter, when it resolves to the aggregate
///    (with the aggregate enabled) or to a populated bucket — otherwise
///    it is logged and the remaining rules apply;
/// 2. the initially-hidden mode;
/// 3. the aggregate default;
/// 4. the first populated candidate, letters before numerals.
#[must_use]
pub fn initial_state(map: &BucketMap, config: &NavConfig) -> SelectionState {
    if let Some(raw) = config.init_letter.as_deref() {
        match NavTarget::parse(raw, config.concatenate_nums) {
            Some(NavTarget::All) if config.include_all => return SelectionState::AllActive,
            Some(NavTarget::Key(key)) if map.contains(key) => {
                return SelectionState::SingleActive(key);
            }
            _ => {
                tracing::warn!(
                    letter = raw,
                    "initial letter resolves to no populated bucket; falling back"
                );
            }
        }
    }
    if config.init_hidden {
        return SelectionState::HiddenInitial;
    }
    if config.include_all {
        return SelectionState::AllActive;
    }
    match first_populated(map, config) {
        Some(key) => SelectionState::SingleActive(key),
        None => SelectionState::Uninitialized,
    }
}

/// First populated candidate in letters-then-numerals order.
fn first_populated(map: &BucketMap, config: &NavConfig) -> Option<BucketKey> {
    let mut candidates: Vec<BucketKey> = ('a'..='z').map(BucketKey::Letter).collect();
    if config.include_nums {
        if config.concatenate_nums {
            candidates.push(BucketKey::Digits);
        } else {
            candidates.extend(('0'..='9').map(BucketKey::Digit));
        }
    }
    if config.include_other {
        candidates.push(BucketKey::Other);
    }
    candidates.into_iter().find(|key| map.contains(*key))
}

/// One user selection step, pure.
///
/// The aggregate target activates every populated real bucket; a key
/// target activates exactly that bucket; the no-match target activates
/// only the permanent placeholder. A key with no realized bucket (stale
/// reference, never-populated initial letter) keeps the prior state.
#[must_use]
pub fn transition(state: SelectionState, target: NavTarget, map: &BucketMap) -> SelectionState {
    match target {
        NavTarget::All => SelectionState::AllActive,
        NavTarget::NoMatch => SelectionState::NoMatchActive,
        NavTarget::Key(key) if key != BucketKey::InitText && map.contains(key) => {
            SelectionState::SingleActive(key)
        }
        NavTarget::Key(key) => {
            tracing::warn!(key = %key, "selection target has no bucket; ignoring");
            state
        }
    }
}

/// The visible set for a state.
#[must_use]
pub fn active_set(state: SelectionState, map: &BucketMap) -> ActiveSet {
    match state {
        SelectionState::Uninitialized => ActiveSet::default(),
        SelectionState::AllActive => ActiveSet {
            keys: map
                .keys_in_display_order()
                .into_iter()
                .filter(|key| *key != BucketKey::InitText)
                .collect(),
            no_match: false,
        },
        SelectionState::SingleActive(key) => ActiveSet {
            keys: vec![key],
            no_match: false,
        },
        SelectionState::HiddenInitial => ActiveSet {
            keys: if map.placeholder().is_some() {
                vec![BucketKey::InitText]
            } else {
                Vec::new()
            },
            no_match: false,
        },
        SelectionState::NoMatchActive => ActiveSet {
            keys: Vec::new(),
            no_match: true,
        },
    }
}
