//! Post-composition cleanup.
//!
//! Composing the earlier stages naively over-generates a few digraph
//! sequences; this stage patches them with plain substring replacement,
//! plus one word-ending fix.

/// Non-overlapping digraph fixes, applied as-is.
const CLUSTER_FIXES: &[(&str, &str)] = &[
    // अच्छ romanizes to "chchh"; the casual spelling is "cch".
    ("chchh", "cch"),
];

pub fn apply(word: &str) -> String {
    let mut w = word.to_string();
    for &(from, to) in CLUSTER_FIXES {
        if w.contains(from) {
            w = w.replace(from, to);
        }
    }

    // चाहिए comes out of the vowel stages as "…hie"; the conventional
    // spelling is "…hiye".
    if let Some(stem) = w.strip_suffix("hie") {
        w = format!("{stem}hiye");
    }

    w
}
