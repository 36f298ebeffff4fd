//! Context recognizers
//!
//!     A recognizer looks at one line window of a token slice and reports the contexts it finds
//!     there. Recognizers are pure: they hold only immutable configuration, never see each
//!     other's results, and return a fresh list on every call. Running one twice on the same
//!     window gives identical results, and the [ContextBuilder](crate::robot::context::ContextBuilder)
//!     can run them in any order before merging by position.
//!
//!     Most recognizers are built on the generic expected-sequence driver in [sequence]. The
//!     ones that need state across the line (variable nesting, separator/pretty-align policy,
//!     pipe separators, quotes, comments) scan the window themselves.
//!
//!     No Match Is Not An Error
//!
//!         Malformed constructs (unterminated variables, escaped markers, interrupted dots)
//!         simply produce no context. The only failure is programmer error: asking for a window
//!         outside the token slice panics.

pub mod comment;
pub mod continuation;
pub mod empty_line;
pub mod escapes;
pub mod pipe_separator;
pub mod quotes;
pub mod separators;
pub mod sequence;
pub mod table_headers;
pub mod variables;

pub use comment::DeclaredCommentRecognizer;
pub use continuation::ContinuationRecognizer;
pub use empty_line::EmptyLineRecognizer;
pub use escapes::{EscapedLetterRecognizer, HexValueRecognizer};
pub use pipe_separator::PipeSeparatorRecognizer;
pub use quotes::QuotesSentenceRecognizer;
pub use separators::DoubleSpaceOrTabulatorSeparatorRecognizer;
pub use sequence::{
    was_all_mandatory_found, Expected, ExpectedSequenceElement, Priority, SequenceRecognizer,
};
pub use table_headers::TableHeaderRecognizer;
pub use variables::{VariableKind, VariableRecognizer};

use crate::robot::context::OneLineSingleContext;
use crate::robot::lexing::{LineTokenPosition, Token, TokenType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognizer of one family of contexts
pub trait ContextRecognizer: Send + Sync {
    /// Short kebab-case name, used in logs
    fn name(&self) -> &str;

    /// Find all contexts inside `line` (a window into `tokens`)
    ///
    /// # Panics
    ///
    /// If the window does not lie inside `tokens`.
    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>>;
}

/// The closed set of available recognizers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecognizerKind {
    SettingTableHeader,
    VariableTableHeader,
    TestCaseTableHeader,
    KeywordTableHeader,
    CommentTableHeader,
    ScalarVariable,
    ListVariable,
    DictionaryVariable,
    EnvironmentVariable,
    DeclaredComment,
    Separator,
    PipeSeparator,
    Continuation,
    QuotesSentence,
    ByteHexValue,
    ShortHexValue,
    LongHexValue,
    LineFeedText,
    CarriageReturnText,
    TabulatorText,
    EmptyLine,
}

impl RecognizerKind {
    pub const ALL: [RecognizerKind; 21] = [
        RecognizerKind::SettingTableHeader,
        RecognizerKind::VariableTableHeader,
        RecognizerKind::TestCaseTableHeader,
        RecognizerKind::KeywordTableHeader,
        RecognizerKind::CommentTableHeader,
        RecognizerKind::ScalarVariable,
        RecognizerKind::ListVariable,
        RecognizerKind::DictionaryVariable,
        RecognizerKind::EnvironmentVariable,
        RecognizerKind::DeclaredComment,
        RecognizerKind::Separator,
        RecognizerKind::PipeSeparator,
        RecognizerKind::Continuation,
        RecognizerKind::QuotesSentence,
        RecognizerKind::ByteHexValue,
        RecognizerKind::ShortHexValue,
        RecognizerKind::LongHexValue,
        RecognizerKind::LineFeedText,
        RecognizerKind::CarriageReturnText,
        RecognizerKind::TabulatorText,
        RecognizerKind::EmptyLine,
    ];

    pub fn name(&self) -> &'static str {
        use RecognizerKind::*;
        match self {
            SettingTableHeader => "setting-table-header",
            VariableTableHeader => "variable-table-header",
            TestCaseTableHeader => "test-case-table-header",
            KeywordTableHeader => "keyword-table-header",
            CommentTableHeader => "comment-table-header",
            ScalarVariable => "scalar-variable",
            ListVariable => "list-variable",
            DictionaryVariable => "dictionary-variable",
            EnvironmentVariable => "environment-variable",
            DeclaredComment => "declared-comment",
            Separator => "separator",
            PipeSeparator => "pipe-separator",
            Continuation => "continuation",
            QuotesSentence => "quotes-sentence",
            ByteHexValue => "byte-hex-value",
            ShortHexValue => "short-hex-value",
            LongHexValue => "long-hex-value",
            LineFeedText => "line-feed-text",
            CarriageReturnText => "carriage-return-text",
            TabulatorText => "tabulator-text",
            EmptyLine => "empty-line",
        }
    }

    /// Instantiate the recognizer
    pub fn create(&self) -> Box<dyn ContextRecognizer> {
        use RecognizerKind::*;
        match self {
            SettingTableHeader => Box::new(TableHeaderRecognizer::settings()),
            VariableTableHeader => Box::new(TableHeaderRecognizer::variables()),
            TestCaseTableHeader => Box::new(TableHeaderRecognizer::test_cases()),
            KeywordTableHeader => Box::new(TableHeaderRecognizer::keywords()),
            CommentTableHeader => Box::new(TableHeaderRecognizer::comments()),
            ScalarVariable => Box::new(VariableRecognizer::new(VariableKind::Scalar)),
            ListVariable => Box::new(VariableRecognizer::new(VariableKind::List)),
            DictionaryVariable => Box::new(VariableRecognizer::new(VariableKind::Dictionary)),
            EnvironmentVariable => Box::new(VariableRecognizer::new(VariableKind::Environment)),
            DeclaredComment => Box::new(DeclaredCommentRecognizer),
            Separator => Box::new(DoubleSpaceOrTabulatorSeparatorRecognizer),
            PipeSeparator => Box::new(PipeSeparatorRecognizer),
            Continuation => Box::new(ContinuationRecognizer::new()),
            QuotesSentence => Box::new(QuotesSentenceRecognizer),
            ByteHexValue => Box::new(HexValueRecognizer::byte()),
            ShortHexValue => Box::new(HexValueRecognizer::short()),
            LongHexValue => Box::new(HexValueRecognizer::long()),
            LineFeedText => Box::new(EscapedLetterRecognizer::line_feed()),
            CarriageReturnText => Box::new(EscapedLetterRecognizer::carriage_return()),
            TabulatorText => Box::new(EscapedLetterRecognizer::tabulator()),
            EmptyLine => Box::new(EmptyLineRecognizer),
        }
    }
}

impl fmt::Display for RecognizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assert that `line` is a valid window into `tokens`
pub(crate) fn check_window(tokens: &[Token], line: &LineTokenPosition) {
    assert!(
        line.start <= line.end && line.end <= tokens.len(),
        "line window {}..{} is outside of {} tokens",
        line.start,
        line.end,
        tokens.len()
    );
}

/// End of the line content, i.e. the window end without its trailing CR/LF tokens
pub(crate) fn content_end(tokens: &[Token], line: &LineTokenPosition) -> usize {
    let mut end = line.end;
    while end > line.start && tokens[end - 1].token_type.is_line_end() {
        end -= 1;
    }
    end
}

/// Check if the token at `index` is directly preceded by a single escape backslash
/// inside the window starting at `start`
pub(crate) fn is_escaped(tokens: &[Token], start: usize, index: usize) -> bool {
    index > start && tokens[index - 1].token_type == TokenType::SingleEscapeBackslash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::lexing::tokenize;

    #[test]
    fn test_all_kinds_have_unique_names() {
        let mut names: Vec<_> = RecognizerKind::ALL.iter().map(|k| k.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), RecognizerKind::ALL.len());
    }

    #[test]
    fn test_kind_serde_uses_name() {
        for kind in RecognizerKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_content_end_skips_crlf() {
        let output = tokenize("a b\r\n");
        let line = output.lines()[0];
        assert_eq!(content_end(output.tokens(), &line), 3);
    }

    #[test]
    #[should_panic(expected = "outside of")]
    fn test_window_outside_tokens_panics() {
        let output = tokenize("a");
        let line = LineTokenPosition::new(1, 0, 5);
        DeclaredCommentRecognizer.recognize(output.tokens(), &line);
    }
}
