//! Phonemic romanization of Devanagari text.

mod convert;
mod table;

pub use convert::romanize;
