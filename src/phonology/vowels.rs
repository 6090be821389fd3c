//! Casual vowel resolution: convert the reserved long-vowel markers into
//! the spellings people actually type. The rules run once each, in a fixed
//! order, most specific first; a vowel resolved by an earlier rule is not
//! revisited.

use super::markers::{LONG_AA, LONG_EE, LONG_OO};

pub fn resolve(word: &str) -> String {
    let mut w = word.to_string();

    // Long aa. Word-final occurrences shorten ("tumhaaraa" → "tumhara"),
    // word-initial ones keep the full spelling ("aaj", "aap"). What is
    // left depends on word length: short common words keep "aa" ("naam",
    // "baat"), longer words compress to "a" ("khana", "chahiye").
    if w.ends_with(LONG_AA) {
        w.pop();
        w.push('a');
    }
    if w.starts_with(LONG_AA) {
        w = format!("aa{}", &w[LONG_AA.len_utf8()..]);
    }
    if w.contains(LONG_AA) {
        let spelling = if w.chars().count() <= 4 { "aa" } else { "a" };
        w = w.replace(LONG_AA, spelling);
    }

    // Long ee. Word-final → "i" ("ladkee" → "ladki"); a final "-een"
    // collapses to the nasalized "-in" ("naheen" → "nahin"); elsewhere
    // "ee" ("theek", "neela").
    if w.ends_with(LONG_EE) {
        w.pop();
        w.push('i');
    }
    if let Some(stem) = w.strip_suffix(&format!("{LONG_EE}n")) {
        w = format!("{stem}in");
    }
    w = w.replace(LONG_EE, "ee");

    // Long oo is always "oo" ("hoon", "poora").
    w.replace(LONG_OO, "oo")
}
