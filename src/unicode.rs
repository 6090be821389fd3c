/// Character-level Unicode classification for Devanagari text.

/// The Devanagari block, U+0900–U+097F. Danda (U+0964), double danda
/// (U+0965) and the Devanagari digits all live inside this range.
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

pub fn is_danda(c: char) -> bool {
    c == '\u{0964}' || c == '\u{0965}'
}

/// Check whether a string contains at least one Devanagari code point.
pub fn contains_devanagari(s: &str) -> bool {
    s.chars().any(is_devanagari)
}

/// Roman consonants as they appear in a romanized word.
pub fn is_roman_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
