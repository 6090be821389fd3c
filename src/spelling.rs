//! Spelling normalization for Hinglish that arrives already romanized,
//! e.g. from an external transcription service. A whole-word correction
//! table fixes the misspellings those services most often produce. This is
//! a caller-side safety net, independent of the transliteration pipeline.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Frequent transcription misspellings → conventional spellings.
const CORRECTIONS: &[(&str, &str)] = &[
    ("me", "mein"),
    ("mai", "main"),
    ("kyun", "kyu"),
    ("kyunki", "kyuki"),
    ("kyoki", "kyuki"),
    ("chahie", "chahiye"),
    ("jindagi", "zindagi"),
    ("jyada", "zyada"),
    ("fir", "phir"),
    ("phle", "pehle"),
    ("dusra", "doosra"),
    ("aapka", "apka"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static INSTANCE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INSTANCE.get_or_init(|| CORRECTIONS.iter().copied().collect())
}

/// Correct whole words only, case-insensitively, preserving the original
/// case pattern (all-caps stays all-caps, capitalized stays capitalized).
pub fn normalize_spelling(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() {
            word.push(c);
        } else {
            flush_word(&mut out, &mut word);
            out.push(c);
        }
    }
    flush_word(&mut out, &mut word);
    out
}

fn flush_word(out: &mut String, word: &mut String) {
    if word.is_empty() {
        return;
    }
    match table().get(word.to_lowercase().as_str()) {
        Some(&corrected) => out.push_str(&recase(word, corrected)),
        None => out.push_str(word),
    }
    word.clear();
}

fn recase(original: &str, corrected: &str) -> String {
    if original.chars().all(|c| c.is_uppercase() || !c.is_alphabetic()) {
        corrected.to_uppercase()
    } else if original.chars().next().is_some_and(|c| c.is_uppercase()) {
        let mut it = corrected.chars();
        match it.next() {
            Some(first) => first.to_uppercase().chain(it).collect(),
            None => String::new(),
        }
    } else {
        corrected.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_only() {
        assert_eq!(normalize_spelling("mai ghar me hoon"), "main ghar mein hoon");
        // "me" inside a longer word is untouched.
        assert_eq!(normalize_spelling("mela"), "mela");
        assert_eq!(normalize_spelling("time"), "time");
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(normalize_spelling("Mai aaya"), "Main aaya");
        assert_eq!(normalize_spelling("MAI"), "MAIN");
        assert_eq!(normalize_spelling("fir milenge"), "phir milenge");
    }

    #[test]
    fn test_punctuation_boundaries() {
        assert_eq!(normalize_spelling("kyunki, haan"), "kyuki, haan");
        assert_eq!(normalize_spelling("jindagi!"), "zindagi!");
    }

    #[test]
    fn test_clean_text_unchanged() {
        let s = "main theek hoon, aap kaise hain?";
        assert_eq!(normalize_spelling(s), s);
        assert_eq!(normalize_spelling(""), "");
    }
}
