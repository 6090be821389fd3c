//! Devanagari → casual Hinglish transliteration engine.
//!
//! Converts Hindi text in Devanagari script into the informal Roman-script
//! spelling used on messaging apps ("नमस्ते" → "namaste"), leaving embedded
//! English words, digits and punctuation untouched. The pipeline is a pure
//! deterministic function: script segmentation, phonemic romanization,
//! long-vowel disambiguation, schwa deletion, casual vowel resolution,
//! cluster cleanup and a lexical override table.
//!
//! ```
//! use hinglish_engine::transliterate;
//!
//! assert_eq!(transliterate("मैं एक developer हूं"), "main ek developer hoon");
//! assert_eq!(transliterate("no Devanagari here"), "no Devanagari here");
//! ```

mod engine;
pub mod phonology;
pub mod romanize;
pub mod segment;
pub mod spelling;
pub mod unicode;

#[cfg(feature = "enhance")]
pub mod enhance;

pub mod trace_init;

pub use engine::{clear_cache, transliterate, transliterate_batch};
pub use spelling::normalize_spelling;

#[cfg(test)]
mod tests;
