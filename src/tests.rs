//! Crate-level algebraic properties, checked over generated inputs.

use proptest::prelude::*;

use crate::{transliterate, transliterate_batch};

proptest! {
    /// Strings with no Devanagari code points come back verbatim.
    #[test]
    fn prop_non_devanagari_identity(s in "[ -~]{0,40}") {
        prop_assert_eq!(transliterate(&s), s);
    }

    /// Same input, same output, cache or no cache.
    #[test]
    fn prop_deterministic(s in "\\PC{0,20}") {
        let first = transliterate(&s);
        crate::clear_cache();
        let second = transliterate(&s);
        prop_assert_eq!(first, second);
    }

    /// Output length stays within a small multiple of the input length.
    /// The worst per-character expansion is a Devanagari consonant that
    /// romanizes to a digraph plus the inherent vowel.
    #[test]
    fn prop_bounded_expansion(s in "[\u{0900}-\u{097F} a-z]{0,30}") {
        let out = transliterate(&s);
        prop_assert!(out.chars().count() <= 4 * s.chars().count().max(1));
    }

    /// Batch output corresponds to element-wise single calls.
    #[test]
    fn prop_batch_matches_single(texts in proptest::collection::vec("\\PC{0,12}", 0..6)) {
        let batch = transliterate_batch(&texts);
        prop_assert_eq!(batch.len(), texts.len());
        for (t, out) in texts.iter().zip(batch) {
            prop_assert_eq!(out, transliterate(t));
        }
    }
}

/// Diphthong letters must never be reinterpreted as long-vowel markers:
/// the "ai"/"au" sequences of these words survive every stage.
#[test]
fn diphthongs_survive_pipeline() {
    for (input, expected) in [
        ("कैसे", "kaise"),
        ("है", "hai"),
        ("मौसम", "mausam"),
        ("पैसे", "paise"),
        ("और", "aur"),
    ] {
        assert_eq!(transliterate(input), expected, "input: {input}");
    }
}
