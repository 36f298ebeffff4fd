//! Pipe separator recognizer
//!
//! In the pipe separated format cells are split by `|` with whitespace around it. A pipe counts
//! as a separator when whitespace sits right before it or right after it (or both), and the
//! context covers the pipe plus that one whitespace token on either side. A pipe glued to text
//! on both sides (`a|b`) is cell content.
//!
//! An escaped pipe (`\|`) is text. Whitespace preceded by a single escape backslash is text
//! too, so `\ |` only takes the whitespace after the pipe. Contexts never share tokens: when
//! two pipes are one whitespace apart (`| |`), the whitespace goes to the first one.

use super::{check_window, content_end, is_escaped, ContextRecognizer};
use crate::robot::context::{ContextType, OneLineSingleContext};
use crate::robot::lexing::{LineTokenPosition, Token, TokenType};

#[derive(Debug, Clone, Copy, Default)]
pub struct PipeSeparatorRecognizer;

impl ContextRecognizer for PipeSeparatorRecognizer {
    fn name(&self) -> &str {
        "pipe-separator"
    }

    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>> {
        check_window(tokens, line);
        let end = content_end(tokens, line);
        let is_space = |index: usize| tokens[index].token_type.is_whitespace();

        let mut found = Vec::new();
        let mut consumed_until = line.start;

        for index in line.start..end {
            if index < consumed_until
                || tokens[index].token_type != TokenType::SinglePipe
                || is_escaped(tokens, line.start, index)
            {
                continue;
            }

            let before = index > line.start
                && index - 1 >= consumed_until
                && is_space(index - 1)
                && !is_escaped(tokens, line.start, index - 1);
            let after = index + 1 < end && is_space(index + 1);
            if !before && !after {
                continue;
            }

            let from = if before { index - 1 } else { index };
            let to = if after { index + 2 } else { index + 1 };
            found.push(OneLineSingleContext::new(
                ContextType::PipeSeparated,
                line.line_number,
                &tokens[from..to],
            ));
            consumed_until = to;
        }

        found
    }
}
