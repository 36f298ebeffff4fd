//! Positioned tokens and the per-file token output

use super::line_indexing::{index_lines, LineTokenPosition};
use super::tokens_core::TokenType;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A 1-based position in a file
///
/// Columns count characters, so a tab advances the column by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FilePosition {
    pub line: usize,
    pub column: usize,
}

impl FilePosition {
    pub fn new(line: usize, column: usize) -> Self {
        FilePosition { line, column }
    }
}

impl Default for FilePosition {
    fn default() -> Self {
        FilePosition { line: 1, column: 1 }
    }
}

impl fmt::Display for FilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A typed, positioned piece of source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub token_type: TokenType,
    pub text: String,
    pub start: FilePosition,
    /// Byte range in the source
    #[serde(skip)]
    pub span: Range<usize>,
}

impl Token {
    pub fn new(token_type: TokenType, text: impl Into<String>, start: FilePosition) -> Self {
        let text = text.into();
        let span = 0..text.len();
        Token {
            token_type,
            text,
            start,
            span,
        }
    }

    /// Position right after the last character of this token
    pub fn end(&self) -> FilePosition {
        if self.token_type == TokenType::LineFeed {
            FilePosition::new(self.start.line + 1, 1)
        } else {
            FilePosition::new(self.start.line, self.start.column + self.text.chars().count())
        }
    }
}

/// All tokens of one file, in source order, together with the line index
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TokenOutput {
    tokens: Vec<Token>,
    lines: Vec<LineTokenPosition>,
}

impl TokenOutput {
    /// Build the output from already positioned tokens, indexing their lines
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let lines = index_lines(&tokens);
        TokenOutput { tokens, lines }
    }

    /// Position spanned tokens against their source text
    pub fn from_spanned(source: &str, spanned: Vec<(TokenType, Range<usize>)>) -> Self {
        let mut position = FilePosition::default();
        let mut tokens = Vec::with_capacity(spanned.len());

        for (token_type, span) in spanned {
            let token = Token {
                token_type,
                text: source[span.clone()].to_string(),
                start: position,
                span,
            };
            position = token.end();
            tokens.push(token);
        }

        Self::from_tokens(tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn lines(&self) -> &[LineTokenPosition] {
        &self.lines
    }

    /// The tokens of one indexed line
    pub fn line_tokens(&self, line: &LineTokenPosition) -> &[Token] {
        &self.tokens[line.range()]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Concatenated text of all tokens, which is the original source
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_advance_by_characters() {
        let output = TokenOutput::from_spanned(
            "ż\tb\nc",
            vec![
                (TokenType::UnknownWord, 0..2),
                (TokenType::SingleTabulator, 2..3),
                (TokenType::UnknownWord, 3..4),
                (TokenType::LineFeed, 4..5),
                (TokenType::UnknownWord, 5..6),
            ],
        );

        let starts: Vec<_> = output.tokens().iter().map(|t| t.start).collect();
        assert_eq!(
            starts,
            vec![
                FilePosition::new(1, 1),
                FilePosition::new(1, 2),
                FilePosition::new(1, 3),
                FilePosition::new(1, 4),
                FilePosition::new(2, 1),
            ]
        );
        assert_eq!(output.lines().len(), 2);
        assert_eq!(output.text(), "ż\tb\nc");
    }

    #[test]
    fn test_carriage_return_does_not_end_line() {
        let cr = Token::new(TokenType::CarriageReturn, "\r", FilePosition::new(3, 7));
        assert_eq!(cr.end(), FilePosition::new(3, 8));
        let lf = Token::new(TokenType::LineFeed, "\n", FilePosition::new(3, 8));
        assert_eq!(lf.end(), FilePosition::new(4, 1));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(FilePosition::new(2, 14).to_string(), "2:14");
    }
}
