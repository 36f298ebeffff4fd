//! Lexer
//!
//! This module orchestrates the complete tokenization pipeline for Robot Framework plain-text
//! data. Tokenizing never fails: the data is often mid-edit, so anything unexpected becomes an
//! unknown word and later layers simply find fewer contexts in it.
//!
//! The pipeline consists of:
//! 1. Base tokenization using the logos lexer (./base_tokenization.rs)
//! 2. Transformations over the spanned stream (./transformations):
//!    - escape value detection (`\x41` and friends)
//!    - word classification (header keywords, `Comment`)
//! 3. Positioning: every token gets its 1-based line/column and the stream is indexed into
//!    line windows (./line_indexing.rs)
//!
//! Line Endings
//!
//!     CR and LF are separate tokens, so CRLF is two tokens and only the LF ends the line.
//!     This keeps line splitting the same for every platform while preserving the exact source
//!     text: concatenating all token texts gives back the input.

pub mod base_tokenization;
pub mod line_indexing;
pub mod token_output;
pub mod tokens_core;
pub mod transformations;

pub use line_indexing::{index_lines, LineTokenPosition};
pub use token_output::{FilePosition, Token, TokenOutput};
pub use tokens_core::{TokenFamily, TokenType};

use tracing::{debug, trace};

/// Tokenize Robot Framework source text
pub fn tokenize(source: &str) -> TokenOutput {
    let mut spanned = base_tokenization::tokenize(source);

    for transformation in transformations::standard_transformations() {
        trace!("Applying transformation {}", transformation.name());
        spanned = transformation.transform(source, spanned);
    }

    let output = TokenOutput::from_spanned(source, spanned);

    for token in output.tokens() {
        trace!("Token {} at {}: {:?}", token.token_type, token.start, token.text);
    }
    debug!(
        tokens = output.len(),
        lines = output.lines().len(),
        "Tokenized source"
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(source: &str) -> Vec<TokenType> {
        tokenize(source)
            .tokens()
            .iter()
            .map(|t| t.token_type)
            .collect()
    }

    #[test]
    fn test_table_header() {
        assert_eq!(
            types("*** Test Cases ***\n"),
            vec![
                TokenType::ManyAsterisks,
                TokenType::SingleSpace,
                TokenType::TestWord,
                TokenType::SingleSpace,
                TokenType::CasesWord,
                TokenType::SingleSpace,
                TokenType::ManyAsterisks,
                TokenType::LineFeed,
            ]
        );
    }

    #[test]
    fn test_escape_value_then_classified_word() {
        assert_eq!(
            types("\\x41Test"),
            vec![
                TokenType::SingleEscapeBackslash,
                TokenType::ByteHexValueWord,
                TokenType::TestWord,
            ]
        );
    }

    #[test]
    fn test_round_trip_text() {
        let source = "*** Settings ***\r\nLibrary    OperatingSystem\n\n| ${x} | @{y}[0] |";
        assert_eq!(tokenize(source).text(), source);
    }

    #[test]
    fn test_positions() {
        let output = tokenize("Log\t${x}\nComment  hi");
        let comment = &output.tokens()[7];
        assert_eq!(comment.token_type, TokenType::CommentFromBuiltin);
        assert_eq!(comment.start, FilePosition::new(2, 1));
        let brace = &output.tokens()[3];
        assert_eq!(brace.token_type, TokenType::SingleVariableBeginCurlyBracket);
        assert_eq!(brace.start, FilePosition::new(1, 6));
    }
}
