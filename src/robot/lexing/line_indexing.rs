//! Line indexing
//!
//! Splits the flat token sequence into per-line windows. A window is a half-open range of token
//! indexes covering one physical line, line ending included. Recognizers work on one window at
//! a time, which bounds their work and lets several recognizers scan the same line independently.

use super::token_output::Token;
use super::tokens_core::TokenType;
use serde::Serialize;
use std::ops::Range;

/// Half-open range `[start, end)` of token indexes for one physical line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineTokenPosition {
    pub line_number: usize,
    pub start: usize,
    pub end: usize,
}

impl LineTokenPosition {
    pub fn new(line_number: usize, start: usize, end: usize) -> Self {
        LineTokenPosition {
            line_number,
            start,
            end,
        }
    }

    /// A window covering every token of `tokens`, numbered as line 1
    pub fn whole(tokens: &[Token]) -> Self {
        let line_number = tokens.first().map(|t| t.start.line).unwrap_or(1);
        LineTokenPosition::new(line_number, 0, tokens.len())
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `tokens` into line windows
///
/// Only a line feed ends a line; a lone carriage return stays inside it. A line exists only if
/// it has at least one token, so an empty input has no lines and a trailing line feed does not
/// open a new one.
pub fn index_lines(tokens: &[Token]) -> Vec<LineTokenPosition> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (index, token) in tokens.iter().enumerate() {
        if token.token_type == TokenType::LineFeed {
            lines.push(LineTokenPosition::new(
                tokens[start].start.line,
                start,
                index + 1,
            ));
            start = index + 1;
        }
    }

    if start < tokens.len() {
        lines.push(LineTokenPosition::new(
            tokens[start].start.line,
            start,
            tokens.len(),
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::lexing::tokenize;

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(tokenize("").lines().is_empty());
    }

    #[test]
    fn test_lines_are_contiguous() {
        let output = tokenize("a b\r\n\nc");
        assert_eq!(
            output.lines(),
            &[
                LineTokenPosition::new(1, 0, 5),
                LineTokenPosition::new(2, 5, 6),
                LineTokenPosition::new(3, 6, 7),
            ]
        );
    }

    #[test]
    fn test_trailing_line_feed_does_not_open_a_line() {
        let output = tokenize("a\n");
        assert_eq!(output.lines(), &[LineTokenPosition::new(1, 0, 2)]);
    }

    #[test]
    fn test_whole_window() {
        let output = tokenize("x\ny");
        let window = LineTokenPosition::whole(output.tokens());
        assert_eq!(window, LineTokenPosition::new(1, 0, 3));
        assert_eq!(window.len(), 3);
    }
}
