//! Escape sequence recognizers
//!
//! Two families, both anchored on a single escape backslash:
//!
//! - character code escapes (`\x41`, `\u00e9`, `\U0001F600`), which the lexer already split
//!   into a hex value word;
//! - letter escapes (`\n`, `\r`, `\t`), where the backslash is followed by a word starting with
//!   the letter. The word may go on (`\nfoo`), but the context covers the whole word since
//!   the lexer does not split it.
//!
//! A double backslash is a literal backslash and never starts an escape.

use super::sequence::{ExpectedSequenceElement as E, SequenceRecognizer};
use super::{check_window, ContextRecognizer};
use crate::robot::context::{ContextType, OneLineSingleContext};
use crate::robot::lexing::{LineTokenPosition, Token, TokenType};

/// Recognizer for one width of character code escape
#[derive(Debug, Clone)]
pub struct HexValueRecognizer {
    sequence: SequenceRecognizer,
}

impl HexValueRecognizer {
    fn new(name: &'static str, context_type: ContextType, word: TokenType) -> Self {
        HexValueRecognizer {
            sequence: SequenceRecognizer::new(
                name,
                context_type,
                vec![
                    E::mandatory(TokenType::SingleEscapeBackslash),
                    E::mandatory(word),
                ],
            ),
        }
    }

    /// `\xHH`
    pub fn byte() -> Self {
        Self::new(
            "byte-hex-value",
            ContextType::CharWithByteHexValue,
            TokenType::ByteHexValueWord,
        )
    }

    /// `\uHHHH`
    pub fn short() -> Self {
        Self::new(
            "short-hex-value",
            ContextType::CharWithShortHexValue,
            TokenType::ShortHexValueWord,
        )
    }

    /// `\UHHHHHHHH`
    pub fn long() -> Self {
        Self::new(
            "long-hex-value",
            ContextType::CharWithLongHexValue,
            TokenType::LongHexValueWord,
        )
    }
}

impl ContextRecognizer for HexValueRecognizer {
    fn name(&self) -> &str {
        self.sequence.name()
    }

    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>> {
        self.sequence.recognize(tokens, line)
    }
}

/// Recognizer for one letter escape
#[derive(Debug, Clone, Copy)]
pub struct EscapedLetterRecognizer {
    name: &'static str,
    letter: char,
    context_type: ContextType,
}

impl EscapedLetterRecognizer {
    /// `\n`
    pub fn line_feed() -> Self {
        EscapedLetterRecognizer {
            name: "line-feed-text",
            letter: 'n',
            context_type: ContextType::LineFeedText,
        }
    }

    /// `\r`
    pub fn carriage_return() -> Self {
        EscapedLetterRecognizer {
            name: "carriage-return-text",
            letter: 'r',
            context_type: ContextType::CarriageReturnText,
        }
    }

    /// `\t`
    pub fn tabulator() -> Self {
        EscapedLetterRecognizer {
            name: "tabulator-text",
            letter: 't',
            context_type: ContextType::TabulatorText,
        }
    }

    fn starts_with_letter(&self, token: &Token) -> bool {
        token.token_type.is_word()
            && !token.token_type.is_hex_value()
            && token
                .text
                .chars()
                .next()
                .is_some_and(|c| c.eq_ignore_ascii_case(&self.letter))
    }
}

impl ContextRecognizer for EscapedLetterRecognizer {
    fn name(&self) -> &str {
        self.name
    }

    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>> {
        check_window(tokens, line);

        (line.start..line.end.saturating_sub(1))
            .filter(|&index| {
                tokens[index].token_type == TokenType::SingleEscapeBackslash
                    && self.starts_with_letter(&tokens[index + 1])
            })
            .map(|index| {
                OneLineSingleContext::new(
                    self.context_type,
                    line.line_number,
                    &tokens[index..index + 2],
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::testing::recognize_pairs;

    #[test]
    fn test_hex_values_by_width() {
        let source = "Log  \\x41 \\u00e9 \\U0001F600";
        assert_eq!(
            recognize_pairs(&HexValueRecognizer::byte(), source),
            vec![(ContextType::CharWithByteHexValue, "\\x41".into())]
        );
        assert_eq!(
            recognize_pairs(&HexValueRecognizer::short(), source),
            vec![(ContextType::CharWithShortHexValue, "\\u00e9".into())]
        );
        assert_eq!(
            recognize_pairs(&HexValueRecognizer::long(), source),
            vec![(ContextType::CharWithLongHexValue, "\\U0001F600".into())]
        );
    }

    #[test]
    fn test_hex_value_with_trailing_text() {
        assert_eq!(
            recognize_pairs(&HexValueRecognizer::byte(), "\\xffnotNumber"),
            vec![(ContextType::CharWithByteHexValue, "\\xff".into())]
        );
    }

    #[test]
    fn test_malformed_hex_values() {
        assert!(recognize_pairs(&HexValueRecognizer::byte(), "\\xf").is_empty());
        assert!(recognize_pairs(&HexValueRecognizer::short(), "\\u12G4").is_empty());
        assert!(recognize_pairs(&HexValueRecognizer::byte(), "\\\\x41").is_empty());
    }

    #[test]
    fn test_letter_escapes() {
        let source = "a\\nb  \\Tab  \\r";
        assert_eq!(
            recognize_pairs(&EscapedLetterRecognizer::line_feed(), source),
            vec![(ContextType::LineFeedText, "\\nb".into())]
        );
        assert_eq!(
            recognize_pairs(&EscapedLetterRecognizer::tabulator(), source),
            vec![(ContextType::TabulatorText, "\\Tab".into())]
        );
        assert_eq!(
            recognize_pairs(&EscapedLetterRecognizer::carriage_return(), source),
            vec![(ContextType::CarriageReturnText, "\\r".into())]
        );
    }

    #[test]
    fn test_classified_words_count_as_letters() {
        assert_eq!(
            recognize_pairs(&EscapedLetterRecognizer::tabulator(), "\\test"),
            vec![(ContextType::TabulatorText, "\\test".into())]
        );
    }

    #[test]
    fn test_letter_escape_needs_a_single_backslash() {
        assert!(recognize_pairs(&EscapedLetterRecognizer::line_feed(), "\\\\n").is_empty());
        assert!(recognize_pairs(&EscapedLetterRecognizer::line_feed(), "\\ n").is_empty());
        assert!(recognize_pairs(&EscapedLetterRecognizer::line_feed(), "n").is_empty());
    }
}
