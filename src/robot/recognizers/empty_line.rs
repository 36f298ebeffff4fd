//! Empty line recognizer
//!
//! A line is empty when everything before its line ending is whitespace, or when it is nothing
//! but the line ending. The context covers the whole window, line ending included, so that a
//! formatter can drop or normalize the line in one step.

use super::{check_window, content_end, ContextRecognizer};
use crate::robot::context::{ContextType, OneLineSingleContext};
use crate::robot::lexing::{LineTokenPosition, Token};

#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLineRecognizer;

impl ContextRecognizer for EmptyLineRecognizer {
    fn name(&self) -> &str {
        "empty-line"
    }

    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>> {
        check_window(tokens, line);
        if line.is_empty() {
            return Vec::new();
        }

        let end = content_end(tokens, line);
        let blank = tokens[line.start..end]
            .iter()
            .all(|t| t.token_type.is_whitespace());
        if !blank {
            return Vec::new();
        }

        vec![OneLineSingleContext::new(
            ContextType::EmptyLine,
            line.line_number,
            &tokens[line.range()],
        )]
    }
}
