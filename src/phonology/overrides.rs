//! Lexical override table.
//!
//! A handful of very common words have casual spellings the phonological
//! rules cannot derive ("yah" is universally typed "yeh", "ham" is "hum").
//! After cleanup, each word is matched case-insensitively against this
//! table; on a hit the table's spelling wins outright.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical casual spellings keyed by the rule-derived form. Identity
/// entries pin spellings that must survive future rule changes.
const OVERRIDES: &[(&str, &str)] = &[
    ("yeh", "yeh"),
    ("yah", "yeh"),
    ("woh", "woh"),
    ("vah", "woh"),
    ("voh", "woh"),
    ("ham", "hum"),
    ("hum", "hum"),
    ("nahi", "nahi"),
    ("nahin", "nahi"),
    ("theek", "theek"),
    ("thik", "theek"),
    ("accha", "accha"),
    ("acchi", "acchi"),
    ("party", "party"),
    ("parti", "party"),
    ("paarti", "party"),
    ("film", "film"),
    ("bhai", "bhai"),
    ("bhaai", "bhai"),
    ("men", "mein"),
    ("dhanyvad", "dhanyavaad"),
    ("dhnyvad", "dhanyavaad"),
    ("to", "toh"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static INSTANCE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INSTANCE.get_or_init(|| OVERRIDES.iter().copied().collect())
}

/// Exact-match substitution; unmatched words pass through unchanged. The
/// table stores the desired output case, so the original case pattern is
/// not reapplied.
pub fn apply(word: &str) -> String {
    match table().get(word.to_lowercase().as_str()) {
        Some(&canonical) => canonical.to_string(),
        None => word.to_string(),
    }
}
