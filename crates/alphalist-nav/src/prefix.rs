//! Prefix rules and the compiled matcher.
//!
//! Rules let classification skip known leading phrases ("The ", "A ",
//! "Les ") so "The Beatles" files under `b`. All configured rules compile
//! into one case-insensitive alternation anchored at the start of the
//! text; each rule implicitly requires a single whitespace character after
//! the prefix.
//!
//! The matcher holds no mutable state. Every call to
//! [`PrefixMatcher::classification_char`] is a fresh anchored match, so
//! identical text always yields an identical result regardless of what was
//! matched before.

use regex::Regex;

use crate::error::NavError;

/// One configured prefix rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrefixRule {
    /// Literal prefix. Metacharacters are escaped at compile time, and
    /// trailing whitespace is dropped in favor of the implicit separator.
    Literal(String),
    /// Regular-expression prefix, used as written.
    Pattern(String),
}

impl PrefixRule {
    fn alternation_fragment(&self) -> String {
        match self {
            Self::Literal(lit) => regex::escape(lit.trim_end()),
            Self::Pattern(pat) => pat.clone(),
        }
    }
}

/// Compiled prefix rules.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    pattern: Option<Regex>,
}

impl PrefixMatcher {
    /// Compile the configured rules into one anchored alternation.
    ///
    /// An empty rule list compiles to a matcher that always falls back to
    /// the first character. A malformed [`PrefixRule::Pattern`] fails the
    /// whole compilation.
    pub fn compile(rules: &[PrefixRule]) -> Result<Self, NavError> {
        if rules.is_empty() {
            return Ok(Self { pattern: None });
        }
        let alternation = rules
            .iter()
            .map(|rule| format!("{}\\s", rule.alternation_fragment()))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!("^(?i:{alternation})");
        let pattern = Regex::new(&source).map_err(|source_err| NavError::BadPrefixPattern {
            pattern: source,
            source: source_err,
        })?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// The classification character for `text`.
    ///
    /// On a prefix match, the character immediately after the matched
    /// span, lower-cased; otherwise the first character. `None` when no
    /// character remains (empty text, or a prefix that consumed all of
    /// it).
    #[must_use]
    pub fn classification_char(&self, text: &str) -> Option<char> {
        let rest = match &self.pattern {
            Some(re) => match re.find(text) {
                Some(m) => &text[m.end()..],
                None => text,
            },
            None => text,
        };
        rest.chars().next().map(|c| c.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(rules: &[PrefixRule]) -> PrefixMatcher {
        PrefixMatcher::compile(rules).unwrap()
    }

    // ── No rules ────────────────────────────────────────────────────

    #[test]
    fn no_rules_takes_first_char() {
        let m = matcher(&[]);
        assert_eq!(m.classification_char("Queen"), Some('q'));
        assert_eq!(m.classification_char("7Eleven"), Some('7'));
        assert_eq!(m.classification_char(""), None);
    }

    // ── Literal rules ───────────────────────────────────────────────

    #[test]
    fn literal_skips_prefix() {
        let m = matcher(&[PrefixRule::Literal("The".into())]);
        assert_eq!(m.classification_char("The Beatles"), Some('b'));
        assert_eq!(m.classification_char("Queen"), Some('q'));
    }

    #[test]
    fn literal_with_trailing_space_matches_single_separator() {
        let m = matcher(&[PrefixRule::Literal("The ".into())]);
        assert_eq!(m.classification_char("The Beatles"), Some('b'));
    }

    #[test]
    fn literal_metacharacters_are_escaped() {
        let m = matcher(&[PrefixRule::Literal("C++".into())]);
        assert_eq!(m.classification_char("C++ Primer"), Some('p'));
        assert_eq!(m.classification_char("Ccc Primer"), Some('c'));
    }

    #[test]
    fn match_is_case_insensitive() {
        let m = matcher(&[PrefixRule::Literal("The".into())]);
        assert_eq!(m.classification_char("THE Kinks"), Some('k'));
        assert_eq!(m.classification_char("the who"), Some('w'));
    }

    #[test]
    fn prefix_only_matches_at_start() {
        let m = matcher(&[PrefixRule::Literal("The".into())]);
        assert_eq!(m.classification_char("Not The Band"), Some('n'));
    }

    #[test]
    fn prefix_requires_whitespace_separator() {
        let m = matcher(&[PrefixRule::Literal("The".into())]);
        // No separator after the prefix, so no rule applies.
        assert_eq!(m.classification_char("Theodore"), Some('t'));
    }

    #[test]
    fn prefix_consuming_whole_text_yields_none() {
        let m = matcher(&[PrefixRule::Literal("The".into())]);
        assert_eq!(m.classification_char("The "), None);
    }

    // ── Pattern rules and alternation ───────────────────────────────

    #[test]
    fn pattern_rules_used_as_written() {
        let m = matcher(&[PrefixRule::Pattern("An?".into())]);
        assert_eq!(m.classification_char("A Tribe"), Some('t'));
        assert_eq!(m.classification_char("An Orchestra"), Some('o'));
    }

    #[test]
    fn rules_combine_into_one_alternation() {
        let m = matcher(&[
            PrefixRule::Literal("The".into()),
            PrefixRule::Literal("Les".into()),
        ]);
        assert_eq!(m.classification_char("The Doors"), Some('d'));
        assert_eq!(m.classification_char("Les Paul"), Some('p'));
    }

    #[test]
    fn malformed_pattern_fails_compilation() {
        let err = PrefixMatcher::compile(&[PrefixRule::Pattern("(".into())]);
        assert!(matches!(err, Err(NavError::BadPrefixPattern { .. })));
    }

    // ── Statelessness ───────────────────────────────────────────────

    #[test]
    fn repeated_calls_classify_identically() {
        let m = matcher(&[PrefixRule::Literal("The".into())]);
        // A cursor-carrying matcher would drift across these calls.
        for _ in 0..10 {
            assert_eq!(m.classification_char("The Beatles"), Some('b'));
            assert_eq!(m.classification_char("Queen"), Some('q'));
        }
    }
}
