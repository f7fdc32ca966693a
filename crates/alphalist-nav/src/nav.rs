//! Navigation candidate construction.
//!
//! Candidate order: the aggregate-all control (when configured), then the
//! digit representation (`_` or the ten digits), then `A`..`Z`, then the
//! `-` candidate (when configured). Every candidate resolves to exactly
//! one of: an interactive control targeting its bucket, a disabled inert
//! control, nothing (removed), or an interactive control routed to the
//! permanent no-match placeholder.

use crate::classify::BucketMap;
use crate::config::NavConfig;
use crate::key::{BucketKey, NavTarget};

/// One navigation control candidate, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// What the control stands for.
    pub candidate: NavTarget,
    /// Display label, count-suffixed when `show_counts` is set.
    pub label: String,
    /// Whether the candidate's bucket is populated. The aggregate control
    /// is enabled whenever any real bucket is.
    pub enabled: bool,
    /// Selection target dispatched on activation; `None` for inert
    /// controls, which must not be wired to any event.
    pub target: Option<NavTarget>,
}

/// Build the ordered navigation candidate list from a bucket map.
#[must_use]
pub fn build_navigation(map: &BucketMap, config: &NavConfig) -> Vec<NavEntry> {
    let mut entries = Vec::new();

    if config.include_all {
        entries.push(NavEntry {
            candidate: NavTarget::All,
            label: decorate(config.all_label.clone(), map.total_entries(), config),
            enabled: map.total_entries() > 0,
            target: Some(NavTarget::All),
        });
    }

    for key in candidate_keys(config) {
        let label = decorate(base_label(key), map.count(key), config);
        if map.contains(key) {
            entries.push(NavEntry {
                candidate: NavTarget::Key(key),
                label,
                enabled: true,
                target: Some(NavTarget::Key(key)),
            });
        } else if config.flag_disabled {
            if config.remove_disabled {
                continue;
            }
            entries.push(NavEntry {
                candidate: NavTarget::Key(key),
                label,
                enabled: false,
                target: None,
            });
        } else {
            entries.push(NavEntry {
                candidate: NavTarget::Key(key),
                label,
                enabled: false,
                target: Some(NavTarget::NoMatch),
            });
        }
    }

    entries
}

/// The bucket-key candidates, in navigation order.
fn candidate_keys(config: &NavConfig) -> Vec<BucketKey> {
    let mut keys = Vec::with_capacity(38);
    if config.include_nums {
        if config.concatenate_nums {
            keys.push(BucketKey::Digits);
        } else {
            keys.extend(('0'..='9').map(BucketKey::Digit));
        }
    }
    keys.extend(('a'..='z').map(BucketKey::Letter));
    if config.include_other {
        keys.push(BucketKey::Other);
    }
    keys
}

fn base_label(key: BucketKey) -> String {
    match key {
        BucketKey::Digits => "0 - 9".to_string(),
        BucketKey::Other => "...".to_string(),
        BucketKey::Letter(c) => c.to_ascii_uppercase().to_string(),
        BucketKey::Digit(c) => c.to_string(),
        // Never a navigation candidate.
        BucketKey::InitText => String::new(),
    }
}

fn decorate(label: String, count: usize, config: &NavConfig) -> String {
    if config.show_counts {
        format!("{label} ({count})")
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn sample_map(config: &NavConfig) -> BucketMap {
        classify(["Apple", "apricot", "Banana", "7Eleven"], config).unwrap()
    }

    fn entry<'a>(entries: &'a [NavEntry], candidate: NavTarget) -> &'a NavEntry {
        entries
            .iter()
            .find(|e| e.candidate == candidate)
            .expect("candidate present")
    }

    // ── Candidate order ─────────────────────────────────────────────

    #[test]
    fn all_control_comes_first() {
        let cfg = NavConfig::default();
        let nav = build_navigation(&sample_map(&cfg), &cfg);
        assert_eq!(nav[0].candidate, NavTarget::All);
        assert_eq!(nav[0].target, Some(NavTarget::All));
        assert_eq!(nav[1].candidate, NavTarget::Key(BucketKey::Digits));
        assert_eq!(nav[2].candidate, NavTarget::Key(BucketKey::Letter('a')));
    }

    #[test]
    fn digits_expand_when_not_concatenated() {
        let cfg = NavConfig::new().include_all(false).concatenate_nums(false);
        let nav = build_navigation(&sample_map(&cfg), &cfg);
        let digits: Vec<NavTarget> = nav.iter().take(10).map(|e| e.candidate).collect();
        let expected: Vec<NavTarget> = ('0'..='9')
            .map(|c| NavTarget::Key(BucketKey::Digit(c)))
            .collect();
        assert_eq!(digits, expected);
    }

    #[test]
    fn numerals_absent_when_excluded() {
        let cfg = NavConfig::new().include_nums(false);
        let nav = build_navigation(&sample_map(&cfg), &cfg);
        assert!(
            !nav.iter()
                .any(|e| e.candidate == NavTarget::Key(BucketKey::Digits))
        );
    }

    #[test]
    fn other_candidate_appended_when_included() {
        let cfg = NavConfig::new().include_other(true);
        let map = classify(["_Zebra"], &cfg).unwrap();
        let nav = build_navigation(&map, &cfg);
        let last = nav.last().unwrap();
        assert_eq!(last.candidate, NavTarget::Key(BucketKey::Other));
        assert_eq!(last.label, "...");
        assert!(last.enabled);
    }

    // ── Enabled/disabled policy ─────────────────────────────────────

    #[test]
    fn populated_candidates_are_interactive() {
        let cfg = NavConfig::default();
        let nav = build_navigation(&sample_map(&cfg), &cfg);
        let a = entry(&nav, NavTarget::Key(BucketKey::Letter('a')));
        assert!(a.enabled);
        assert_eq!(a.target, Some(NavTarget::Key(BucketKey::Letter('a'))));
    }

    #[test]
    fn flagged_candidates_are_inert() {
        let cfg = NavConfig::default();
        let nav = build_navigation(&sample_map(&cfg), &cfg);
        let z = entry(&nav, NavTarget::Key(BucketKey::Letter('z')));
        assert!(!z.enabled);
        assert_eq!(z.target, None);
        assert_eq!(z.label, "Z");
    }

    #[test]
    fn removed_candidates_are_omitted() {
        let cfg = NavConfig::new().remove_disabled(true);
        let nav = build_navigation(&sample_map(&cfg), &cfg);
        assert!(
            !nav.iter()
                .any(|e| e.candidate == NavTarget::Key(BucketKey::Letter('z')))
        );
        // Populated candidates survive.
        assert!(
            nav.iter()
                .any(|e| e.candidate == NavTarget::Key(BucketKey::Letter('a')))
        );
    }

    #[test]
    fn unflagged_candidates_route_to_no_match() {
        let cfg = NavConfig::new().flag_disabled(false);
        let nav = build_navigation(&sample_map(&cfg), &cfg);
        let z = entry(&nav, NavTarget::Key(BucketKey::Letter('z')));
        assert!(!z.enabled);
        assert_eq!(z.target, Some(NavTarget::NoMatch));
    }

    // ── Labels ──────────────────────────────────────────────────────

    #[test]
    fn digit_aggregate_label() {
        let cfg = NavConfig::default();
        let nav = build_navigation(&sample_map(&cfg), &cfg);
        assert_eq!(entry(&nav, NavTarget::Key(BucketKey::Digits)).label, "0 - 9");
    }

    #[test]
    fn counts_appended_when_requested() {
        let cfg = NavConfig::new().show_counts(true);
        let map = sample_map(&cfg);
        let nav = build_navigation(&map, &cfg);
        assert_eq!(entry(&nav, NavTarget::All).label, "All (4)");
        assert_eq!(
            entry(&nav, NavTarget::Key(BucketKey::Letter('a'))).label,
            "A (2)"
        );
        assert_eq!(
            entry(&nav, NavTarget::Key(BucketKey::Letter('z'))).label,
            "Z (0)"
        );
    }

    #[test]
    fn all_control_disabled_on_empty_snapshot() {
        let cfg = NavConfig::default();
        let map = classify::<[&str; 0], &str>([], &cfg).unwrap();
        let nav = build_navigation(&map, &cfg);
        assert!(!entry(&nav, NavTarget::All).enabled);
    }
}
