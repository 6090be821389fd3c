//! Script segmentation: split mixed input into alternating Devanagari and
//! non-Devanagari runs so that only Devanagari text is transformed.

use crate::unicode::is_devanagari;

/// A maximal substring that is either entirely Devanagari or entirely not.
///
/// Concatenating the `text` of every run in order reconstructs the original
/// input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRun {
    pub text: String,
    pub is_devanagari: bool,
}

/// Split `input` into maximal same-script runs. Empty input yields no runs.
pub fn segment(input: &str) -> Vec<ScriptRun> {
    let mut runs: Vec<ScriptRun> = Vec::new();
    for c in input.chars() {
        let deva = is_devanagari(c);
        match runs.last_mut() {
            Some(run) if run.is_devanagari == deva => run.text.push(c),
            _ => runs.push(ScriptRun {
                text: c.to_string(),
                is_devanagari: deva,
            }),
        }
    }
    runs
}

/// Split a romanized word into (core, trailing punctuation).
///
/// The punctuation is the maximal non-alphanumeric suffix; it is detached
/// before the phonological stages and reattached afterwards.
pub fn split_trailing_punct(word: &str) -> (&str, &str) {
    let cut = word
        .char_indices()
        .rev()
        .take_while(|(_, c)| !c.is_alphanumeric())
        .last()
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    word.split_at(cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, deva: bool) -> ScriptRun {
        ScriptRun {
            text: text.to_string(),
            is_devanagari: deva,
        }
    }

    #[test]
    fn test_empty() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_pure_latin() {
        assert_eq!(segment("hello"), vec![run("hello", false)]);
    }

    #[test]
    fn test_pure_devanagari() {
        assert_eq!(segment("नमस्ते"), vec![run("नमस्ते", true)]);
    }

    #[test]
    fn test_mixed() {
        assert_eq!(
            segment("मैं एक developer हूं"),
            vec![
                run("मैं", true),
                run(" ", false),
                run("एक", true),
                run(" developer ", false),
                run("हूं", true),
            ]
        );
    }

    #[test]
    fn test_danda_stays_in_devanagari_run() {
        assert_eq!(segment("नमस्ते।"), vec![run("नमस्ते।", true)]);
    }

    #[test]
    fn test_lossless_concatenation() {
        let input = "आज का weather बहुत अच्छा है! 123।";
        let joined: String = segment(input).into_iter().map(|r| r.text).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_split_trailing_punct() {
        assert_eq!(split_trailing_punct("namaste."), ("namaste", "."));
        assert_eq!(split_trailing_punct("ho?!"), ("ho", "?!"));
        assert_eq!(split_trailing_punct("kya"), ("kya", ""));
        assert_eq!(split_trailing_punct("..."), ("", "..."));
        assert_eq!(split_trailing_punct(""), ("", ""));
    }
}
