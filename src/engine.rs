//! Engine front door: segmentation, per-run word processing, memo cache.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use tracing::debug_span;

use crate::phonology::process_word;
use crate::romanize::romanize;
use crate::segment::segment;
use crate::unicode::contains_devanagari;

/// Process-wide memo cache, keyed by exact input. Purely a repeat-call
/// shortcut: the pipeline is deterministic, so a hit and a recompute are
/// always identical.
fn cache() -> &'static Mutex<HashMap<String, String>> {
    static INSTANCE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    INSTANCE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Convert Devanagari (or mixed) text to casual Hinglish.
///
/// Input with no Devanagari code points, including empty or whitespace-only
/// strings, is returned unchanged.
pub fn transliterate(text: &str) -> String {
    if text.trim().is_empty() || !contains_devanagari(text) {
        return text.to_string();
    }

    if let Ok(memo) = cache().lock() {
        if let Some(hit) = memo.get(text) {
            return hit.clone();
        }
    }

    let _span = debug_span!("transliterate", len = text.len()).entered();
    let out = convert(text);

    if let Ok(mut memo) = cache().lock() {
        memo.insert(text.to_string(), out.clone());
    }
    out
}

/// Element-wise [`transliterate`]: `output[i]` corresponds to `texts[i]`.
pub fn transliterate_batch<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts.iter().map(|t| transliterate(t.as_ref())).collect()
}

/// Empty the memo cache. Output is unaffected; exists for tests and for
/// long-lived processes that want to bound memory.
pub fn clear_cache() {
    if let Ok(mut memo) = cache().lock() {
        memo.clear();
    }
}

fn convert(text: &str) -> String {
    segment(text)
        .into_iter()
        .map(|run| {
            if run.is_devanagari {
                process_run(&run.text)
            } else {
                run.text
            }
        })
        .collect()
}

/// Romanize one Devanagari run and push each word through the
/// phonological stages. Words are rejoined with single spaces; in practice
/// a run contains no whitespace (spaces are their own runs), so this only
/// matters for inputs the segmenter never saw.
fn process_run(run: &str) -> String {
    let roman = romanize(run);
    roman
        .split_whitespace()
        .map(process_word)
        .collect::<Vec<_>>()
        .join(" ")
}
