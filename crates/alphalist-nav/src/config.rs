//! Navigator configuration.
//!
//! All options are fixed at construction; the navigator never re-reads
//! them against a changed snapshot.

use crate::prefix::PrefixRule;

/// Immutable option set for one navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavConfig {
    /// Suppress the default visible bucket; start with nothing shown.
    pub init_hidden: bool,
    /// Placeholder surfaced while hidden. `None` (or empty) shows nothing.
    pub init_hidden_text: Option<String>,
    /// Force the initial selection: `"*"` or one classification character.
    pub init_letter: Option<String>,
    /// Whether the aggregate "all" control exists and is the default view.
    pub include_all: bool,
    /// Label of the aggregate control.
    pub all_label: String,
    /// Label of the permanent no-match placeholder group.
    pub no_match_label: String,
    /// Whether digit candidates appear in navigation.
    pub include_nums: bool,
    /// Collapse digits into one `_` bucket vs ten separate buckets.
    pub concatenate_nums: bool,
    /// Whether the `-` bucket is reachable from navigation.
    pub include_other: bool,
    /// Mark unpopulated candidates disabled (vs routing them to no-match).
    pub flag_disabled: bool,
    /// Drop disabled candidates from the output entirely.
    pub remove_disabled: bool,
    /// Prefixes to skip before deriving the classification character.
    pub prefixes: Vec<PrefixRule>,
    /// Restrict text extraction to a matching sub-part of each entry.
    pub filter_selector: Option<String>,
    /// Append populated-entry counts to control labels.
    pub show_counts: bool,
    /// Emit a heading for each bucket group.
    pub show_letter_headings: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            init_hidden: false,
            init_hidden_text: None,
            init_letter: None,
            include_all: true,
            all_label: "All".to_string(),
            no_match_label: "No matching entries".to_string(),
            include_nums: true,
            concatenate_nums: true,
            include_other: false,
            flag_disabled: true,
            remove_disabled: false,
            prefixes: Vec::new(),
            filter_selector: None,
            show_counts: false,
            show_letter_headings: false,
        }
    }
}

impl NavConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn init_hidden(mut self, on: bool) -> Self {
        self.init_hidden = on;
        self
    }

    #[must_use]
    pub fn init_hidden_text(mut self, text: impl Into<String>) -> Self {
        self.init_hidden_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn init_letter(mut self, letter: impl Into<String>) -> Self {
        self.init_letter = Some(letter.into());
        self
    }

    #[must_use]
    pub fn include_all(mut self, on: bool) -> Self {
        self.include_all = on;
        self
    }

    #[must_use]
    pub fn all_label(mut self, label: impl Into<String>) -> Self {
        self.all_label = label.into();
        self
    }

    #[must_use]
    pub fn no_match_label(mut self, label: impl Into<String>) -> Self {
        self.no_match_label = label.into();
        self
    }

    #[must_use]
    pub fn include_nums(mut self, on: bool) -> Self {
        self.include_nums = on;
        self
    }

    #[must_use]
    pub fn concatenate_nums(mut self, on: bool) -> Self {
        self.concatenate_nums = on;
        self
    }

    #[must_use]
    pub fn include_other(mut self, on: bool) -> Self {
        self.include_other = on;
        self
    }

    #[must_use]
    pub fn flag_disabled(mut self, on: bool) -> Self {
        self.flag_disabled = on;
        self
    }

    #[must_use]
    pub fn remove_disabled(mut self, on: bool) -> Self {
        self.remove_disabled = on;
        self
    }

    /// Add one prefix rule, keeping earlier rules.
    #[must_use]
    pub fn prefix(mut self, rule: PrefixRule) -> Self {
        self.prefixes.push(rule);
        self
    }

    /// Replace the prefix rule list.
    #[must_use]
    pub fn prefixes(mut self, rules: Vec<PrefixRule>) -> Self {
        self.prefixes = rules;
        self
    }

    #[must_use]
    pub fn filter_selector(mut self, selector: impl Into<String>) -> Self {
        self.filter_selector = Some(selector.into());
        self
    }

    #[must_use]
    pub fn show_counts(mut self, on: bool) -> Self {
        self.show_counts = on;
        self
    }

    #[must_use]
    pub fn show_letter_headings(mut self, on: bool) -> Self {
        self.show_letter_headings = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let cfg = NavConfig::default();
        assert!(!cfg.init_hidden);
        assert!(cfg.init_hidden_text.is_none());
        assert!(cfg.init_letter.is_none());
        assert!(cfg.include_all);
        assert_eq!(cfg.all_label, "All");
        assert_eq!(cfg.no_match_label, "No matching entries");
        assert!(cfg.include_nums);
        assert!(cfg.concatenate_nums);
        assert!(!cfg.include_other);
        assert!(cfg.flag_disabled);
        assert!(!cfg.remove_disabled);
        assert!(cfg.prefixes.is_empty());
        assert!(cfg.filter_selector.is_none());
        assert!(!cfg.show_counts);
        assert!(!cfg.show_letter_headings);
    }

    #[test]
    fn builder_chains() {
        let cfg = NavConfig::new()
            .init_hidden(true)
            .init_hidden_text("Pick a letter")
            .include_all(false)
            .prefix(PrefixRule::Literal("The".into()))
            .filter_selector(".brand")
            .show_letter_headings(true);
        assert!(cfg.init_hidden);
        assert_eq!(cfg.init_hidden_text.as_deref(), Some("Pick a letter"));
        assert!(!cfg.include_all);
        assert_eq!(cfg.prefixes.len(), 1);
        assert_eq!(cfg.filter_selector.as_deref(), Some(".brand"));
        assert!(cfg.show_letter_headings);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let cfg = NavConfig::new()
            .init_letter("*")
            .prefix(PrefixRule::Literal("The".into()));
        let json = serde_json::to_string(&cfg).unwrap();
        let back: NavConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
