//! Renderable grouped view of a bucket map.
//!
//! Built once at initialization: ordered groups (optionally headed) plus
//! the permanent, normally-empty no-match group. Visibility is NOT part
//! of this structure; renderers combine it with the current
//! [`ActiveSet`](crate::state::ActiveSet).

use crate::classify::{BucketMap, EntryId};
use crate::config::NavConfig;
use crate::key::BucketKey;

/// One renderable group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketGroup {
    /// The group's bucket key.
    pub key: BucketKey,
    /// Group heading, present only when heading production is enabled and
    /// the key produces one.
    pub heading: Option<String>,
    /// Entries in original snapshot order.
    pub entries: Vec<EntryId>,
    /// Placeholder message, only on the synthetic `initText` group.
    pub placeholder: Option<String>,
}

/// The full grouped structure handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketList {
    /// Groups in display order.
    pub groups: Vec<BucketGroup>,
    /// Label of the permanent no-match group.
    pub no_match_label: String,
}

/// Build the grouped view in display order.
#[must_use]
pub fn build_view(map: &BucketMap, config: &NavConfig) -> BucketList {
    let groups = map
        .keys_in_display_order()
        .into_iter()
        .map(|key| BucketGroup {
            key,
            heading: heading_text(key, config),
            entries: map.get(key).map(<[EntryId]>::to_vec).unwrap_or_default(),
            placeholder: if key == BucketKey::InitText {
                map.placeholder().map(str::to_string)
            } else {
                None
            },
        })
        .collect();
    BucketList {
        groups,
        no_match_label: config.no_match_label.clone(),
    }
}

/// Human heading for a bucket key.
///
/// `None` when heading production is disabled, or for the synthetic
/// `initText` group, which never carries one.
#[must_use]
pub fn heading_text(key: BucketKey, config: &NavConfig) -> Option<String> {
    if !config.show_letter_headings {
        return None;
    }
    match key {
        BucketKey::Digits => Some("0 - 9".to_string()),
        BucketKey::Other => Some("Others".to_string()),
        BucketKey::InitText => None,
        BucketKey::Letter(c) => Some(c.to_ascii_uppercase().to_string()),
        BucketKey::Digit(c) => Some(c.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn groups_follow_display_order() {
        let cfg = NavConfig::default();
        let map = classify(["zulu", "Apple", "7Eleven", "_x"], &cfg).unwrap();
        let view = build_view(&map, &cfg);
        let keys: Vec<BucketKey> = view.groups.iter().map(|g| g.key).collect();
        assert_eq!(
            keys,
            vec![
                BucketKey::Digits,
                BucketKey::Letter('a'),
                BucketKey::Letter('z'),
                BucketKey::Other,
            ]
        );
    }

    #[test]
    fn no_match_label_always_present() {
        let cfg = NavConfig::new().no_match_label("Nothing here");
        let map = classify(["Apple"], &cfg).unwrap();
        let view = build_view(&map, &cfg);
        assert_eq!(view.no_match_label, "Nothing here");
    }

    #[test]
    fn headings_gated_by_configuration() {
        let cfg = NavConfig::default();
        let map = classify(["Apple"], &cfg).unwrap();
        let view = build_view(&map, &cfg);
        assert!(view.groups.iter().all(|g| g.heading.is_none()));

        let cfg = NavConfig::new().show_letter_headings(true);
        let map = classify(["Apple", "7Eleven", "_x"], &cfg).unwrap();
        let view = build_view(&map, &cfg);
        let headings: Vec<Option<&str>> =
            view.groups.iter().map(|g| g.heading.as_deref()).collect();
        assert_eq!(headings, vec![Some("0 - 9"), Some("A"), Some("Others")]);
    }

    #[test]
    fn init_text_group_has_placeholder_and_no_heading() {
        let cfg = NavConfig::new()
            .init_hidden(true)
            .init_hidden_text("Pick a letter")
            .show_letter_headings(true);
        let map = classify(["Apple"], &cfg).unwrap();
        let view = build_view(&map, &cfg);
        let init = view
            .groups
            .iter()
            .find(|g| g.key == BucketKey::InitText)
            .unwrap();
        assert_eq!(init.heading, None);
        assert_eq!(init.placeholder.as_deref(), Some("Pick a letter"));
        assert!(init.entries.is_empty());
    }

    #[test]
    fn literal_digit_groups_head_with_their_digit() {
        let cfg = NavConfig::new()
            .concatenate_nums(false)
            .show_letter_headings(true);
        let map = classify(["7Eleven"], &cfg).unwrap();
        let view = build_view(&map, &cfg);
        assert_eq!(view.groups[0].heading.as_deref(), Some("7"));
    }
}
