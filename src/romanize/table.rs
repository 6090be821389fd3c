//! Static Devanagari → Roman phoneme tables.
//!
//! Long vowels are spelled with doubled letters ("aa", "ee", "oo") at this
//! stage; the long-vowel disambiguator later converts those spellings to
//! reserved markers. The inherent "a" of a bare consonant is NOT part of
//! these tables — the converter appends it based on virama/matra context.

/// Independent (full-form) vowel letters.
pub fn independent_vowel(c: char) -> Option<&'static str> {
    match c {
        'अ' => Some("a"),
        'आ' => Some("aa"),
        'इ' => Some("i"),
        'ई' => Some("ee"),
        'उ' => Some("u"),
        'ऊ' => Some("oo"),
        'ऋ' => Some("ri"),
        'ॠ' => Some("ri"),
        'ऌ' => Some("li"),
        'ॡ' => Some("li"),
        'ऍ' | 'ऎ' | 'ए' => Some("e"),
        'ऐ' => Some("ai"),
        'ऑ' | 'ऒ' | 'ओ' => Some("o"),
        'औ' => Some("au"),
        _ => None,
    }
}

/// Dependent vowel signs (matras). A matra replaces the inherent vowel of
/// the consonant it attaches to.
pub fn matra(c: char) -> Option<&'static str> {
    match c {
        '\u{093E}' => Some("aa"), // ा
        '\u{093F}' => Some("i"),  // ि
        '\u{0940}' => Some("ee"), // ी
        '\u{0941}' => Some("u"),  // ु
        '\u{0942}' => Some("oo"), // ू
        '\u{0943}' => Some("ri"), // ृ
        '\u{0944}' => Some("ri"), // ॄ
        '\u{0962}' => Some("li"), // ॢ
        '\u{0945}' | '\u{0946}' | '\u{0947}' => Some("e"), // ॅ ॆ े
        '\u{0948}' => Some("ai"), // ै
        '\u{0949}' | '\u{094A}' | '\u{094B}' => Some("o"), // ॉ ॊ ो
        '\u{094C}' => Some("au"), // ौ
        _ => None,
    }
}

/// Plain consonant letters.
pub fn consonant(c: char) -> Option<&'static str> {
    match c {
        'क' => Some("k"),
        'ख' => Some("kh"),
        'ग' => Some("g"),
        'घ' => Some("gh"),
        'ङ' => Some("n"),
        'च' => Some("ch"),
        'छ' => Some("chh"),
        'ज' => Some("j"),
        'झ' => Some("jh"),
        'ञ' => Some("n"),
        'ट' => Some("t"),
        'ठ' => Some("th"),
        'ड' => Some("d"),
        'ढ' => Some("dh"),
        'ण' => Some("n"),
        'त' => Some("t"),
        'थ' => Some("th"),
        'द' => Some("d"),
        'ध' => Some("dh"),
        'न' => Some("n"),
        'प' => Some("p"),
        'फ' => Some("ph"),
        'ब' => Some("b"),
        'भ' => Some("bh"),
        'म' => Some("m"),
        'य' => Some("y"),
        'र' => Some("r"),
        'ल' => Some("l"),
        'ळ' => Some("l"),
        'ऴ' => Some("l"),
        'व' => Some("v"),
        'श' => Some("sh"),
        'ष' => Some("sh"),
        'स' => Some("s"),
        'ह' => Some("h"),
        _ => None,
    }
}

/// Precomposed nukta consonants (U+0958–U+095F), used for Perso-Arabic
/// loan sounds. Checked before the plain consonant table.
pub fn nukta_consonant(c: char) -> Option<&'static str> {
    // Written as escapes: NFC text normalizes these to base + combining
    // nukta, so the precomposed forms cannot appear literally in source.
    match c {
        '\u{0958}' => Some("q"),  // क़
        '\u{0959}' => Some("kh"), // ख़
        '\u{095A}' => Some("gh"), // ग़
        '\u{095B}' => Some("z"),  // ज़
        '\u{095C}' => Some("d"),  // ड़
        '\u{095D}' => Some("dh"), // ढ़
        '\u{095E}' => Some("f"),  // फ़
        '\u{095F}' => Some("y"),  // य़
        _ => None,
    }
}

/// Casual spelling of base consonant + combining nukta (U+093C).
/// Falls back to the plain consonant spelling for pairs with no distinct
/// loan sound.
pub fn with_combining_nukta(base: char) -> Option<&'static str> {
    match base {
        'क' => Some("q"),
        'ख' => Some("kh"),
        'ग' => Some("gh"),
        'ज' => Some("z"),
        'ड' => Some("d"),
        'ढ' => Some("dh"),
        'फ' => Some("f"),
        'य' => Some("y"),
        _ => consonant(base),
    }
}

/// Consonants whose onset is labial (प फ ब भ म and the nukta फ़).
/// Anusvara assimilates to "m" in front of these.
pub fn is_labial(c: char) -> bool {
    matches!(c, 'प' | 'फ' | 'ब' | 'भ' | 'म' | '\u{095E}')
}

/// Devanagari digits ०–९ map straight to ASCII digits.
pub fn digit(c: char) -> Option<char> {
    let n = (c as u32).checked_sub('\u{0966}' as u32)?;
    if n <= 9 {
        char::from_u32('0' as u32 + n)
    } else {
        None
    }
}

pub const VIRAMA: char = '\u{094D}';
pub const NUKTA: char = '\u{093C}';
pub const ANUSVARA: char = '\u{0902}';
pub const CHANDRABINDU: char = '\u{0901}';
pub const VISARGA: char = '\u{0903}';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_lengths_distinct() {
        assert_eq!(independent_vowel('अ'), Some("a"));
        assert_eq!(independent_vowel('आ'), Some("aa"));
        assert_eq!(independent_vowel('इ'), Some("i"));
        assert_eq!(independent_vowel('ई'), Some("ee"));
        assert_eq!(independent_vowel('उ'), Some("u"));
        assert_eq!(independent_vowel('ऊ'), Some("oo"));
        assert_eq!(independent_vowel('ऐ'), Some("ai"));
        assert_eq!(independent_vowel('औ'), Some("au"));
    }

    #[test]
    fn test_matra_mirrors_independent() {
        assert_eq!(matra('ा'), Some("aa"));
        assert_eq!(matra('ी'), Some("ee"));
        assert_eq!(matra('ू'), Some("oo"));
        assert_eq!(matra('ै'), Some("ai"));
        assert_eq!(matra('ौ'), Some("au"));
        assert_eq!(matra('क'), None);
    }

    #[test]
    fn test_aspirates() {
        assert_eq!(consonant('ख'), Some("kh"));
        assert_eq!(consonant('छ'), Some("chh"));
        assert_eq!(consonant('भ'), Some("bh"));
        assert_eq!(consonant('ध'), Some("dh"));
    }

    #[test]
    fn test_nukta_consonants() {
        assert_eq!(nukta_consonant('\u{095B}'), Some("z"));
        assert_eq!(nukta_consonant('\u{095E}'), Some("f"));
        assert_eq!(nukta_consonant('\u{0958}'), Some("q"));
        assert_eq!(nukta_consonant('ज'), None);
        assert_eq!(with_combining_nukta('ज'), Some("z"));
        assert_eq!(with_combining_nukta('र'), Some("r"));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit('०'), Some('0'));
        assert_eq!(digit('९'), Some('9'));
        assert_eq!(digit('क'), None);
        assert_eq!(digit('5'), None);
    }
}
