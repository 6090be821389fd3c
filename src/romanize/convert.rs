use crate::unicode::is_danda;

use super::table;

/// Map a Devanagari run to its Roman phoneme spelling, left to right.
///
/// The inherent-vowel rule of the script is applied here: a bare consonant
/// carries a trailing neutral "a" unless the next character is a virama
/// (vowel killed) or a matra (vowel replaced). Anything the tables do not
/// know passes through unchanged — noisy transcription input must not
/// crash the pipeline.
pub fn romanize(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Consonants first; nukta forms (precomposed or base + combining
        // mark) take priority over the plain letter.
        let consonant = table::nukta_consonant(c)
            .map(|r| (r, 1))
            .or_else(|| {
                if chars.get(i + 1) == Some(&table::NUKTA) {
                    table::with_combining_nukta(c).map(|r| (r, 2))
                } else {
                    None
                }
            })
            .or_else(|| table::consonant(c).map(|r| (r, 1)));

        if let Some((roman, consumed)) = consonant {
            out.push_str(roman);
            i += consumed;
            match chars.get(i) {
                // Virama suppresses the inherent vowel.
                Some(&table::VIRAMA) => i += 1,
                Some(&m) => {
                    if let Some(v) = table::matra(m) {
                        // A matra replaces it.
                        out.push_str(v);
                        i += 1;
                    } else {
                        // Otherwise the neutral "a" surfaces.
                        out.push('a');
                    }
                }
                None => out.push('a'),
            }
            continue;
        }

        if let Some(v) = table::independent_vowel(c) {
            out.push_str(v);
        } else if c == table::ANUSVARA {
            // Nasal approximation; assimilates to "m" before a labial.
            let labial = chars.get(i + 1).is_some_and(|&n| table::is_labial(n));
            out.push(if labial { 'm' } else { 'n' });
        } else if c == table::CHANDRABINDU {
            out.push('n');
        } else if c == table::VISARGA {
            out.push('h');
        } else if c == table::VIRAMA || c == table::NUKTA {
            // Bare combining mark with no consonant context: drop it.
        } else if is_danda(c) {
            out.push('.');
        } else if let Some(d) = table::digit(c) {
            out.push(d);
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}
