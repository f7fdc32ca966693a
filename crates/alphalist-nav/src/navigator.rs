//! The navigator: one snapshot in, renderable data out.
//!
//! Construction runs classification, ordering, heading resolution, and
//! navigation-model building to completion before returning; nothing is
//! deferred and a failure produces no partial state. After that, the
//! selection state is the only mutable piece, advanced one step per
//! selection event. One navigator owns all of its state; the host is
//! expected to serialize selection events (there is no internal locking).

use alphalist_text::{Element, Node, Selector, find_by_id, select_first, text_content};

use crate::classify::{BucketMap, classify};
use crate::config::NavConfig;
use crate::error::NavError;
use crate::key::NavTarget;
use crate::nav::{NavEntry, build_navigation};
use crate::state::{ActiveSet, SelectionState, active_set, initial_state, transition};
use crate::view::{BucketList, build_view};

/// Seam between classification and the host's entry representation.
///
/// The core needs exactly one thing from an entry: its display text,
/// optionally restricted to the sub-part matching the configured filter
/// selector. Implementations must be pure; classification assumes
/// repeated extraction yields identical text.
pub trait EntryText {
    /// Full display text of the entry.
    fn full_text(&self) -> String;

    /// Text of the sub-part matching `selector`.
    ///
    /// `None` falls back to [`full_text`](Self::full_text). Hosts without
    /// sub-part selection keep the default.
    fn selected_text(&self, selector: &str) -> Option<String> {
        let _ = selector;
        None
    }
}

impl EntryText for Node {
    fn full_text(&self) -> String {
        text_content(self)
    }

    fn selected_text(&self, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        let el = self.as_element()?;
        select_first(el, &selector).map(Element::text_content)
    }
}

impl<E: EntryText + ?Sized> EntryText for &E {
    fn full_text(&self) -> String {
        (**self).full_text()
    }

    fn selected_text(&self, selector: &str) -> Option<String> {
        (**self).selected_text(selector)
    }
}

/// Classification, navigation model, and selection state for one snapshot
/// of entries.
#[derive(Debug)]
pub struct AlphaNavigator {
    config: NavConfig,
    map: BucketMap,
    view: BucketList,
    nav: Vec<NavEntry>,
    state: SelectionState,
}

impl AlphaNavigator {
    /// Classify `entries` and build the navigation and view models.
    pub fn from_entries<E: EntryText>(entries: &[E], config: NavConfig) -> Result<Self, NavError> {
        Self::build(entries, config).inspect_err(|err| {
            tracing::error!(%err, "navigator construction failed");
        })
    }

    /// Resolve `container_id` in `tree` and classify the container's
    /// element children.
    pub fn from_container(
        tree: &[Node],
        container_id: &str,
        config: NavConfig,
    ) -> Result<Self, NavError> {
        let Some(container) = find_by_id(tree, container_id) else {
            let err = NavError::ContainerNotFound {
                id: container_id.to_string(),
            };
            tracing::error!(%err, "navigator construction failed");
            return Err(err);
        };
        let items: Vec<&Node> = container
            .children
            .iter()
            .filter(|node| node.as_element().is_some())
            .collect();
        Self::from_entries(&items, config)
    }

    fn build<E: EntryText>(entries: &[E], config: NavConfig) -> Result<Self, NavError> {
        if let Some(raw) = config.filter_selector.as_deref() {
            Selector::parse(raw).map_err(|source| NavError::BadFilterSelector {
                selector: raw.to_string(),
                source,
            })?;
        }
        let selector = config.filter_selector.as_deref();
        let texts: Vec<String> = entries
            .iter()
            .map(|entry| match selector {
                Some(sel) => entry
                    .selected_text(sel)
                    .unwrap_or_else(|| entry.full_text()),
                None => entry.full_text(),
            })
            .collect();
        let map = classify(&texts, &config)?;
        let nav = build_navigation(&map, &config);
        let view = build_view(&map, &config);
        let state = initial_state(&map, &config);
        Ok(Self {
            config,
            map,
            view,
            nav,
            state,
        })
    }

    /// Apply one selection event.
    pub fn select(&mut self, target: NavTarget) {
        self.state = transition(self.state, target, &self.map);
    }

    /// The grouped view, in display order.
    #[must_use]
    pub fn view(&self) -> &BucketList {
        &self.view
    }

    /// The ordered navigation controls.
    #[must_use]
    pub fn nav_entries(&self) -> &[NavEntry] {
        &self.nav
    }

    /// The classified bucket map.
    #[must_use]
    pub fn bucket_map(&self) -> &BucketMap {
        &self.map
    }

    /// Current selection state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The currently visible set.
    #[must_use]
    pub fn active(&self) -> ActiveSet {
        active_set(self.state, &self.map)
    }

    /// The configuration this navigator was built with.
    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }
}
