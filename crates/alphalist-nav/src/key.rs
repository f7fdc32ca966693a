//! Bucket keys and selection targets.

use std::cmp::Ordering;
use std::fmt;

/// Classification key for one bucket of entries.
///
/// Real keys only: the virtual "all buckets" and "no match" targets live on
/// [`NavTarget`] and never appear in a bucket map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BucketKey {
    /// One of `a`..`z`.
    Letter(char),
    /// A literal digit bucket `0`..`9` (digit concatenation disabled).
    Digit(char),
    /// The digits aggregate, canonical form `_`.
    Digits,
    /// Unclassifiable entries, canonical form `-`. Always sorts last.
    Other,
    /// Synthetic placeholder bucket used by the initially-hidden mode.
    InitText,
}

impl BucketKey {
    /// Canonical string form, the one display ordering is defined over.
    #[must_use]
    pub fn canonical(self) -> String {
        match self {
            Self::Letter(c) | Self::Digit(c) => c.to_string(),
            Self::Digits => "_".to_string(),
            Self::Other => "-".to_string(),
            Self::InitText => "initText".to_string(),
        }
    }

    /// Key for a classification character.
    ///
    /// ASCII letters map to their lower-cased letter bucket, ASCII digits
    /// to the `_` aggregate or their literal digit bucket depending on
    /// `concatenate_digits`, and everything else (punctuation, whitespace,
    /// non-ASCII) to [`BucketKey::Other`].
    #[must_use]
    pub fn classify_char(ch: char, concatenate_digits: bool) -> Self {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_digit() {
            if concatenate_digits {
                Self::Digits
            } else {
                Self::Digit(ch)
            }
        } else if ch.is_ascii_alphabetic() {
            Self::Letter(ch)
        } else {
            Self::Other
        }
    }

    /// Display ordering: canonical-lexicographic, with [`BucketKey::Other`]
    /// forced after every other key regardless of its code point.
    #[must_use]
    pub fn display_cmp(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Other, Self::Other) => Ordering::Equal,
            (Self::Other, _) => Ordering::Greater,
            (_, Self::Other) => Ordering::Less,
            _ => self.canonical().cmp(&other.canonical()),
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// A selection or navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavTarget {
    /// Activate every populated real bucket.
    All,
    /// Activate exactly one real bucket.
    Key(BucketKey),
    /// Activate only the permanent no-match placeholder.
    NoMatch,
}

impl NavTarget {
    /// Parse a configured initial-selection string: `"*"` for the
    /// aggregate, or one classification character (`"b"`, `"7"`, `"_"`,
    /// `"-"`). Returns `None` for anything else.
    #[must_use]
    pub fn parse(raw: &str, concatenate_digits: bool) -> Option<Self> {
        let raw = raw.trim();
        if raw == "*" {
            return Some(Self::All);
        }
        let mut chars = raw.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let key = match ch {
            '_' => BucketKey::Digits,
            '-' => BucketKey::Other,
            c => BucketKey::classify_char(c, concatenate_digits),
        };
        Some(Self::Key(key))
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("*"),
            Self::Key(key) => write!(f, "{key}"),
            Self::NoMatch => f.write_str("no-match"),
        }
    }
}
