//! Quoted sentence recognizer
//!
//! A quoted sentence runs from an unescaped `"` through the next unescaped `"`, both quotes
//! included. Sentences never overlap; a quote left open at the end of the line is text.

use super::{check_window, content_end, is_escaped, ContextRecognizer};
use crate::robot::context::{ContextType, OneLineSingleContext};
use crate::robot::lexing::{LineTokenPosition, Token, TokenType};

#[derive(Debug, Clone, Copy, Default)]
pub struct QuotesSentenceRecognizer;

impl ContextRecognizer for QuotesSentenceRecognizer {
    fn name(&self) -> &str {
        "quotes-sentence"
    }

    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>> {
        check_window(tokens, line);
        let end = content_end(tokens, line);

        let mut found = Vec::new();
        let mut open: Option<usize> = None;

        for index in line.start..end {
            if tokens[index].token_type != TokenType::SingleQuoteMark
                || is_escaped(tokens, line.start, index)
            {
                continue;
            }
            match open.take() {
                Some(begin) => found.push(OneLineSingleContext::new(
                    ContextType::QuotesSentence,
                    line.line_number,
                    &tokens[begin..index + 1],
                )),
                None => open = Some(index),
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::testing::recognize_pairs;

    fn sentences(source: &str) -> Vec<String> {
        recognize_pairs(&QuotesSentenceRecognizer, source)
            .into_iter()
            .map(|(_, text)| text)
            .collect()
    }

    #[test]
    fn test_quoted_sentence() {
        assert_eq!(
            sentences("Log  \"Hello world\"  INFO"),
            vec!["\"Hello world\""]
        );
    }

    #[test]
    fn test_consecutive_sentences_do_not_overlap() {
        assert_eq!(sentences("\"a\" b \"c\""), vec!["\"a\"", "\"c\""]);
    }

    #[test]
    fn test_escaped_quote_is_text() {
        assert_eq!(sentences("\"a \\\" b\""), vec!["\"a \\\" b\""]);
        assert!(sentences("\\\"a\"").is_empty());
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(sentences("\"open").is_empty());
        assert_eq!(sentences("\"a\" \"b"), vec!["\"a\""]);
    }

    #[test]
    fn test_quote_does_not_cross_lines() {
        assert!(sentences("\"a\n\"").is_empty());
    }
}
