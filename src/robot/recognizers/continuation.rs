//! Line continuation recognizer
//!
//! `...` continues the previous row; four or more dots are accepted as well but reported
//! separately so that a formatter can normalize them. Both are escapable: `\...` is text.

use super::sequence::{ExpectedSequenceElement as E, SequenceRecognizer};
use super::{check_window, ContextRecognizer};
use crate::robot::context::{sort_by_position, ContextType, OneLineSingleContext};
use crate::robot::lexing::{LineTokenPosition, Token, TokenType};

#[derive(Debug, Clone)]
pub struct ContinuationRecognizer {
    sequences: [SequenceRecognizer; 2],
}

impl ContinuationRecognizer {
    pub fn new() -> Self {
        ContinuationRecognizer {
            sequences: [
                SequenceRecognizer::new(
                    "continue-previous-line",
                    ContextType::ContinuePreviousLine,
                    vec![E::mandatory(TokenType::ContinuePreviousLineDots)],
                )
                .escapable(),
                SequenceRecognizer::new(
                    "more-than-three-dots",
                    ContextType::MoreThanThreeDotsContinue,
                    vec![E::mandatory(TokenType::MoreThanThreeDots)],
                )
                .escapable(),
            ],
        }
    }
}

impl Default for ContinuationRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextRecognizer for ContinuationRecognizer {
    fn name(&self) -> &str {
        "continuation"
    }

    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>> {
        check_window(tokens, line);

        let mut found: Vec<_> = self
            .sequences
            .iter()
            .flat_map(|sequence| sequence.recognize(tokens, line))
            .collect();
        sort_by_position(&mut found);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::testing::recognize_pairs;

    fn continuations(source: &str) -> Vec<(ContextType, String)> {
        recognize_pairs(&ContinuationRecognizer::new(), source)
    }

    #[test]
    fn test_three_dots() {
        assert_eq!(
            continuations("...  Log"),
            vec![(ContextType::ContinuePreviousLine, "...".into())]
        );
    }

    #[test]
    fn test_more_dots() {
        assert_eq!(
            continuations("    .....  x"),
            vec![(ContextType::MoreThanThreeDotsContinue, ".....".into())]
        );
    }

    #[test]
    fn test_both_kinds_in_position_order() {
        assert_eq!(
            continuations("....  ..."),
            vec![
                (ContextType::MoreThanThreeDotsContinue, "....".into()),
                (ContextType::ContinuePreviousLine, "...".into()),
            ]
        );
    }

    #[test]
    fn test_escaped_and_short_dots() {
        assert!(continuations("\\...").is_empty());
        assert!(continuations(".\\..").is_empty());
        assert!(continuations("..").is_empty());
        assert!(continuations("foo.bar").is_empty());
    }
}
