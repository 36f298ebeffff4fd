//! Lexer transformations for processing token streams
//!
//! The transformations turn the raw logos output into the final token vocabulary.
//! They are applied in order:
//! 1. [HexEscapeDetection] - split escape values (`\xHH`, `\uHHHH`, `\UHHHHHHHH`) off the words
//!    following a single backslash
//! 2. [WordClassification] - retype lexicon words (case-insensitive)
//!
//! Order matters: the text left over after an escape value is an ordinary word and still has
//! to be classified.

pub mod hex_escapes;
pub mod interface;
pub mod word_classification;

pub use hex_escapes::HexEscapeDetection;
pub use interface::{SpannedTokens, Transformation};
pub use word_classification::{classify_word, WordClassification};

/// The standard transformation chain, in application order
pub fn standard_transformations() -> Vec<Box<dyn Transformation>> {
    vec![Box::new(HexEscapeDetection), Box::new(WordClassification)]
}
