//! Word-level phonological rewrite stages.
//!
//! A romanized word flows through the stages in a fixed order: long-vowel
//! marking, schwa deletion, casual vowel resolution, cluster cleanup, then
//! the lexical override table. The markers module owns the reserved code
//! points the intermediate stages communicate through.

pub(crate) mod cleanup;
pub(crate) mod markers;
pub(crate) mod overrides;
pub(crate) mod schwa;
pub(crate) mod vowels;

use tracing::debug_span;

use crate::segment::split_trailing_punct;

/// Run one romanized word through every stage. Trailing punctuation is
/// detached first and reattached to the finished word.
pub fn process_word(word: &str) -> String {
    let (core, punct) = split_trailing_punct(word);
    if core.is_empty() {
        return punct.to_string();
    }
    let _span = debug_span!("process_word", word = core).entered();

    let marked = markers::mark_long_vowels(core);
    let reduced = schwa::delete_schwas(&marked);
    let resolved = vowels::resolve(&reduced);
    let cleaned = cleanup::apply(&resolved);
    let finished = overrides::apply(&cleaned);

    debug_assert!(
        !markers::contains_marker(&finished),
        "internal marker leaked past the vowel resolver"
    );

    format!("{finished}{punct}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // End-to-end over single romanized words; the per-stage rules are
    // covered in their own modules.

    #[test]
    fn test_word_pipeline() {
        assert_eq!(process_word("namaste"), "namaste");
        assert_eq!(process_word("doston"), "doston");
        assert_eq!(process_word("tumhaaraa"), "tumhara");
        assert_eq!(process_word("naama"), "naam");
        assert_eq!(process_word("kyaa"), "kya");
        assert_eq!(process_word("chaahie"), "chahiye");
        assert_eq!(process_word("achchhaa"), "accha");
        assert_eq!(process_word("naheen"), "nahi");
    }

    #[test]
    fn test_punctuation_reattached() {
        assert_eq!(process_word("kaise?"), "kaise?");
        assert_eq!(process_word("naama."), "naam.");
        assert_eq!(process_word("..."), "...");
    }

    #[test]
    fn test_empty() {
        assert_eq!(process_word(""), "");
    }
}
