//! Long-vowel disambiguation.
//!
//! The romanizer spells long vowels with doubled letters ("aa", "ee",
//! "oo"). Before schwa deletion runs, those spellings are replaced with
//! reserved marker code points so a long vowel can never be confused with
//! the deletable neutral "a". Private-use code points are used because
//! they cannot occur in ordinary text.

/// Long aa (from आ / ा).
pub const LONG_AA: char = '\u{E000}';
/// Long ee (from ई / ी).
pub const LONG_EE: char = '\u{E001}';
/// Long oo (from ऊ / ू).
pub const LONG_OO: char = '\u{E002}';

// Temporary holds for the diphthongs while the doubled-letter substitution
// runs. "ai"/"au" must be protected first: marking long vowels before
// protecting diphthongs corrupts adjacent "a…" sequences.
const HOLD_AI: char = '\u{E003}';
const HOLD_AU: char = '\u{E004}';

/// Replace long-vowel spellings with the reserved markers, preserving the
/// diphthongs "ai" and "au" intact.
pub fn mark_long_vowels(word: &str) -> String {
    let protected = word
        .replace("ai", &HOLD_AI.to_string())
        .replace("au", &HOLD_AU.to_string());
    let marked = protected
        .replace("aa", &LONG_AA.to_string())
        .replace("ee", &LONG_EE.to_string())
        .replace("oo", &LONG_OO.to_string());
    marked
        .replace(HOLD_AI, "ai")
        .replace(HOLD_AU, "au")
}

pub fn is_marker(c: char) -> bool {
    matches!(c, LONG_AA | LONG_EE | LONG_OO)
}

pub fn contains_marker(s: &str) -> bool {
    s.chars().any(is_marker)
}

/// Vowel sounds for syllable-context checks: real vowel letters plus the
/// long-vowel markers.
pub fn is_vowel_sound(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') || is_marker(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(w: &str) -> String {
        mark_long_vowels(w)
    }

    #[test]
    fn test_long_vowels_marked() {
        assert_eq!(mark("naama"), format!("n{LONG_AA}ma"));
        assert_eq!(mark("theeka"), format!("th{LONG_EE}ka"));
        assert_eq!(mark("hoon"), format!("h{LONG_OO}n"));
    }

    #[test]
    fn test_short_vowels_untouched() {
        assert_eq!(mark("namaste"), "namaste");
        assert_eq!(mark("eka"), "eka");
    }

    #[test]
    fn test_diphthongs_protected() {
        assert_eq!(mark("kaise"), "kaise");
        assert_eq!(mark("mausama"), "mausama");
        assert_eq!(mark("hai"), "hai");
    }

    #[test]
    fn test_diphthong_next_to_long_vowel() {
        // "aaee" (आई) is long-aa + long-ee, not "a" + diphthong "ae…".
        assert_eq!(mark("aaee"), format!("{LONG_AA}{LONG_EE}"));
        // "bhaaee" (भाई) likewise.
        assert_eq!(mark("bhaaee"), format!("bh{LONG_AA}{LONG_EE}"));
    }

    #[test]
    fn test_mixed_word() {
        assert_eq!(mark("tumhaaraa"), format!("tumh{LONG_AA}r{LONG_AA}"));
    }
}
