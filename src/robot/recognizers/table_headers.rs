//! Table header recognizers
//!
//! A table header is a line like `*** Settings ***` introducing a section. The accepted shape
//! is: one or more asterisks, optional decoration whitespace, the header word(s), optional
//! whitespace, optional asterisks. Two-word headers (`Test Cases`, `User Keywords`) need exactly
//! one single space between the words. The same words split by any whitespace run holding a
//! double space or tab are reported as the `*_INCORRECT` variant so that a validator can flag
//! them.
//!
//! Every header is a set of expected sequences on the generic driver, all escapable. A closing
//! asterisk is shared with a header that starts right on it, so `*Test Case*Test Cases` yields
//! two headers.

use super::sequence::{ExpectedSequenceElement as E, SequenceRecognizer};
use super::{check_window, ContextRecognizer};
use crate::robot::context::{sort_by_position, ContextType, OneLineSingleContext};
use crate::robot::lexing::{LineTokenPosition, Token, TokenType};

const ASTERISKS: &[TokenType] = &[TokenType::SingleAsterisk, TokenType::ManyAsterisks];
const DECORATION: &[TokenType] = &[
    TokenType::SingleSpace,
    TokenType::DoubleSpace,
    TokenType::SingleTabulator,
];
const SPLIT: &[TokenType] = &[TokenType::DoubleSpace, TokenType::SingleTabulator];

const SETTING_WORDS: &[TokenType] = &[
    TokenType::SettingWord,
    TokenType::SettingsWord,
    TokenType::MetadataWord,
];
const VARIABLE_WORDS: &[TokenType] = &[TokenType::VariableWord, TokenType::VariablesWord];
const CASE_WORDS: &[TokenType] = &[TokenType::CaseWord, TokenType::CasesWord];
const TASK_WORDS: &[TokenType] = &[TokenType::TaskWord, TokenType::TasksWord];
const KEYWORD_WORDS: &[TokenType] = &[TokenType::KeywordWord, TokenType::KeywordsWord];
const COMMENT_WORDS: &[TokenType] = &[TokenType::CommentFromBuiltin, TokenType::CommentsWord];

/// `*** <words> ***`
fn header_sequence(words: Vec<E>) -> Vec<E> {
    let mut sequence = vec![E::mandatory_any(ASTERISKS), E::optional_any(DECORATION)];
    sequence.extend(words);
    sequence.push(E::optional_any(DECORATION));
    sequence.push(E::optional_any(ASTERISKS));
    sequence
}

/// `first second` joined by exactly one space
fn two_words(first: TokenType, second: &'static [TokenType]) -> Vec<E> {
    vec![
        E::mandatory(first),
        E::mandatory(TokenType::SingleSpace),
        E::mandatory_any(second),
    ]
}

/// `first second` split by whitespace holding at least one double space or tab
fn split_words(first: TokenType, second: &'static [TokenType]) -> Vec<E> {
    vec![
        E::mandatory(first),
        E::optional_repeated_any(&[TokenType::SingleSpace]),
        E::mandatory_any(SPLIT),
        E::optional_repeated_any(DECORATION),
        E::mandatory_any(second),
    ]
}

/// Recognizer for one kind of table header
#[derive(Debug, Clone)]
pub struct TableHeaderRecognizer {
    name: &'static str,
    sequences: Vec<SequenceRecognizer>,
}

impl TableHeaderRecognizer {
    fn new(name: &'static str, sequences: Vec<(ContextType, Vec<E>)>) -> Self {
        let sequences = sequences
            .into_iter()
            .map(|(context_type, sequence)| {
                SequenceRecognizer::new(name, context_type, header_sequence(sequence)).escapable()
            })
            .collect();
        TableHeaderRecognizer { name, sequences }
    }

    /// `Setting(s)` or `Metadata`
    pub fn settings() -> Self {
        Self::new(
            "setting-table-header",
            vec![(
                ContextType::SettingTableHeader,
                vec![E::mandatory_any(SETTING_WORDS)],
            )],
        )
    }

    /// `Variable(s)`
    pub fn variables() -> Self {
        Self::new(
            "variable-table-header",
            vec![(
                ContextType::VariableTableHeader,
                vec![E::mandatory_any(VARIABLE_WORDS)],
            )],
        )
    }

    /// `Test Case(s)` or `Task(s)`
    pub fn test_cases() -> Self {
        Self::new(
            "test-case-table-header",
            vec![
                (
                    ContextType::TestCaseTableHeader,
                    two_words(TokenType::TestWord, CASE_WORDS),
                ),
                (
                    ContextType::TestCaseTableHeader,
                    vec![E::mandatory_any(TASK_WORDS)],
                ),
                (
                    ContextType::TestCaseTableHeaderIncorrect,
                    split_words(TokenType::TestWord, CASE_WORDS),
                ),
            ],
        )
    }

    /// `Keyword(s)` or `User Keyword(s)`
    pub fn keywords() -> Self {
        Self::new(
            "keyword-table-header",
            vec![
                (
                    ContextType::KeywordTableHeader,
                    vec![E::mandatory_any(KEYWORD_WORDS)],
                ),
                (
                    ContextType::KeywordTableHeader,
                    two_words(TokenType::UserWord, KEYWORD_WORDS),
                ),
                (
                    ContextType::KeywordTableHeaderIncorrect,
                    split_words(TokenType::UserWord, KEYWORD_WORDS),
                ),
            ],
        )
    }

    /// `Comment(s)`
    pub fn comments() -> Self {
        Self::new(
            "comment-table-header",
            vec![(
                ContextType::CommentTableHeader,
                vec![E::mandatory_any(COMMENT_WORDS)],
            )],
        )
    }
}

impl ContextRecognizer for TableHeaderRecognizer {
    fn name(&self) -> &str {
        self.name
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
