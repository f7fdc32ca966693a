//! Bucket assembly: one pass over the entry snapshot.

use ahash::AHashMap;

use crate::config::NavConfig;
use crate::error::NavError;
use crate::key::BucketKey;
use crate::prefix::PrefixMatcher;

/// Stable reference to an entry in the classified snapshot.
///
/// Ids index into the sequence handed to [`classify`]; buckets reference
/// entries, they never own or clone them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

/// Sparse map from bucket key to the entries classified there.
///
/// A key is present only when at least one entry classified there (the
/// synthetic `initText` bucket being the one exception: it carries the
/// placeholder instead of real entries). Bucket contents preserve the
/// original entry order.
#[derive(Debug, Clone, Default)]
pub struct BucketMap {
    buckets: AHashMap<BucketKey, Vec<EntryId>>,
    placeholder: Option<String>,
}

impl BucketMap {
    /// Entries in the bucket at `key`, if realized.
    #[must_use]
    pub fn get(&self, key: BucketKey) -> Option<&[EntryId]> {
        self.buckets.get(&key).map(Vec::as_slice)
    }

    /// Whether `key` is realized in this map.
    #[must_use]
    pub fn contains(&self, key: BucketKey) -> bool {
        self.buckets.contains_key(&key)
    }

    /// Number of real entries in the bucket at `key` (zero if absent).
    #[must_use]
    pub fn count(&self, key: BucketKey) -> usize {
        self.buckets.get(&key).map_or(0, Vec::len)
    }

    /// Total real entries across all buckets.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Realized keys in display order: canonical-lexicographic, `-` last.
    #[must_use]
    pub fn keys_in_display_order(&self) -> Vec<BucketKey> {
        let mut keys: Vec<BucketKey> = self.buckets.keys().copied().collect();
        keys.sort_by(|a, b| a.display_cmp(*b));
        keys
    }

    /// Placeholder message of the synthetic `initText` bucket, when one
    /// was configured.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }
}

/// Classify one snapshot of entry texts into buckets.
///
/// Every non-empty text lands in exactly one bucket keyed by its
/// classification character (after prefix skipping); empty texts are
/// dropped entirely — not counted, not bucketed. When the configuration
/// asks for the initially-hidden mode, the synthetic `initText` bucket is
/// added, independent of (and never merged with) real entries.
pub fn classify<I, S>(texts: I, config: &NavConfig) -> Result<BucketMap, NavError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let matcher = PrefixMatcher::compile(&config.prefixes)?;
    let mut buckets: AHashMap<BucketKey, Vec<EntryId>> = AHashMap::new();
    for (index, text) in texts.into_iter().enumerate() {
        let text = text.as_ref();
        if text.is_empty() {
            continue;
        }
        let key = match matcher.classification_char(text) {
            Some(ch) => BucketKey::classify_char(ch, config.concatenate_nums),
            // A prefix rule swallowed the whole text.
            None => BucketKey::Other,
        };
        buckets.entry(key).or_default().push(EntryId(index));
    }
    let mut placeholder = None;
    if config.init_hidden {
        buckets.entry(BucketKey::InitText).or_default();
        placeholder = config
            .init_hidden_text
            .clone()
            .filter(|text| !text.is_empty());
    }
    Ok(BucketMap {
        buckets,
        placeholder,
    })
}
