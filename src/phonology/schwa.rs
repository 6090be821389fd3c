//! Schwa deletion.
//!
//! Two rules, in order: drop a word-final inherent "a" after a consonant,
//! then repeatedly delete medial schwas until the word is stable. Only the
//! plain letter "a" is ever a candidate; long-vowel markers count as vowel
//! context but are never deleted.

use crate::unicode::is_roman_consonant;

use super::markers::is_vowel_sound;

pub fn delete_schwas(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();

    // Word-final inherent vowel: not pronounced ("eka" → "ek").
    if chars.len() > 1
        && chars[chars.len() - 1] == 'a'
        && is_roman_consonant(chars[chars.len() - 2])
    {
        chars.pop();
    }

    // Medial deletion to a fixed point. Each pass either removes at least
    // one character or leaves the word unchanged, so the pass count is
    // bounded by the word length.
    for _ in 0..word.chars().count() {
        if !medial_pass(&mut chars) {
            break;
        }
    }

    chars.into_iter().collect()
}

/// One left-to-right scan. A schwa in `C₁ a C₂` is deleted when a vowel
/// sound precedes C₁ somewhere in the word (this is not the first
/// syllable) and the character after C₂ is itself a vowel sound (a further
/// syllable follows). Distinguishes "chalo" (kept) from "chalate" →
/// "chalte" (dropped). Returns true if anything was deleted.
fn medial_pass(chars: &mut Vec<char>) -> bool {
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    let mut seen_vowel = false;
    let mut changed = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let deletable = seen_vowel
            && is_roman_consonant(c)
            && chars.get(i + 1) == Some(&'a')
            && chars.get(i + 2).copied().is_some_and(is_roman_consonant)
            && chars.get(i + 3).copied().is_some_and(is_vowel_sound);
        if deletable {
            out.push(c);
            i += 2; // skip the schwa, resume at C₂
            changed = true;
        } else {
            seen_vowel |= is_vowel_sound(c);
            out.push(c);
            i += 1;
        }
    }

    *chars = out;
    changed
}
