//! Recognized contexts
//!
//!     A context is a tagged group of contiguous tokens that form one syntactic construct:
//!     a table header, a variable reference, a comment, a cell separator and so on. Contexts
//!     never copy tokens; they borrow a slice of the [TokenOutput](crate::robot::lexing::TokenOutput)
//!     they were recognized in, so they cannot outlive it.
//!
//!     Context Variants
//!
//!         [OneLineSingleContext] is what recognizers produce: one construct on one line.
//!         [AggregatedOneLineContexts] is what the [ContextBuilder](builder::ContextBuilder)
//!         produces: every single context found on one line, in position order. Both are
//!         wrapped by [ContextElement] when they need to be handled together.
//!
//!     Parents
//!
//!         A single context may point back at the aggregated element that holds it. The link is
//!         an index into the builder's output list, never an owning reference: children are
//!         created before their parent exists.

pub mod builder;
pub mod comparator;

pub use builder::{ContextBuilder, ContextOutput};
pub use comparator::{compare_by_position, sort_by_position, Positioned, SENTINEL_POSITION};

use crate::robot::lexing::{FilePosition, Token};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a context was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContextType {
    SettingTableHeader,
    VariableTableHeader,
    TestCaseTableHeader,
    /// A two-word test case header split by more than one space
    TestCaseTableHeaderIncorrect,
    KeywordTableHeader,
    /// A `User Keywords` header split by more than one space
    KeywordTableHeaderIncorrect,
    CommentTableHeader,
    ScalarVariable,
    ListVariable,
    DictionaryVariable,
    EnvironmentVariable,
    DeclaredComment,
    ContinuePreviousLine,
    MoreThanThreeDotsContinue,
    /// The first cell separator on a line
    DoubleSpaceOrTabulatorSeparated,
    PrettyAlign,
    PipeSeparated,
    QuotesSentence,
    CharWithByteHexValue,
    CharWithShortHexValue,
    CharWithLongHexValue,
    LineFeedText,
    CarriageReturnText,
    TabulatorText,
    EmptyLine,
}

impl ContextType {
    /// Check if this context marks a cell boundary
    pub fn is_separator(&self) -> bool {
        matches!(
            self,
            ContextType::DoubleSpaceOrTabulatorSeparated | ContextType::PipeSeparated
        )
    }

    /// Check if this context is a table header, canonical or not
    pub fn is_table_header(&self) -> bool {
        matches!(
            self,
            ContextType::SettingTableHeader
                | ContextType::VariableTableHeader
                | ContextType::TestCaseTableHeader
                | ContextType::TestCaseTableHeaderIncorrect
                | ContextType::KeywordTableHeader
                | ContextType::KeywordTableHeaderIncorrect
                | ContextType::CommentTableHeader
        )
    }

    pub fn name(&self) -> &'static str {
        use ContextType::*;
        match self {
            SettingTableHeader => "SETTING_TABLE_HEADER",
            VariableTableHeader => "VARIABLE_TABLE_HEADER",
            TestCaseTableHeader => "TEST_CASE_TABLE_HEADER",
            TestCaseTableHeaderIncorrect => "TEST_CASE_TABLE_HEADER_INCORRECT",
            KeywordTableHeader => "KEYWORD_TABLE_HEADER",
            KeywordTableHeaderIncorrect => "KEYWORD_TABLE_HEADER_INCORRECT",
            CommentTableHeader => "COMMENT_TABLE_HEADER",
            ScalarVariable => "SCALAR_VARIABLE",
            ListVariable => "LIST_VARIABLE",
            DictionaryVariable => "DICTIONARY_VARIABLE",
            EnvironmentVariable => "ENVIRONMENT_VARIABLE",
            DeclaredComment => "DECLARED_COMMENT",
            ContinuePreviousLine => "CONTINUE_PREVIOUS_LINE",
            MoreThanThreeDotsContinue => "MORE_THAN_THREE_DOTS_CONTINUE",
            DoubleSpaceOrTabulatorSeparated => "DOUBLE_SPACE_OR_TABULATOR_SEPARATED",
            PrettyAlign => "PRETTY_ALIGN",
            PipeSeparated => "PIPE_SEPARATED",
            QuotesSentence => "QUOTES_SENTENCE",
            CharWithByteHexValue => "CHAR_WITH_BYTE_HEX_VALUE",
            CharWithShortHexValue => "CHAR_WITH_SHORT_HEX_VALUE",
            CharWithLongHexValue => "CHAR_WITH_LONG_HEX_VALUE",
            LineFeedText => "LINE_FEED_TEXT",
            CarriageReturnText => "CARRIAGE_RETURN_TEXT",
            TabulatorText => "TABULATOR_TEXT",
            EmptyLine => "EMPTY_LINE",
        }
    }
}

impl fmt::Display for ContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One construct recognized on one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneLineSingleContext<'a> {
    context_type: ContextType,
    line_number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<usize>,
    tokens: &'a [Token],
}

impl<'a> OneLineSingleContext<'a> {
    pub fn new(context_type: ContextType, line_number: usize, tokens: &'a [Token]) -> Self {
        OneLineSingleContext {
            context_type,
            line_number,
            parent: None,
            tokens,
        }
    }

    /// Same context, pointing back at the aggregated element at `parent`
    pub fn with_parent(mut self, parent: usize) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn context_type(&self) -> ContextType {
        self.context_type
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    /// Source text covered by this context
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// All contexts of one line, in position order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedOneLineContexts<'a> {
    line_number: usize,
    contexts: Vec<OneLineSingleContext<'a>>,
}

impl<'a> AggregatedOneLineContexts<'a> {
    pub fn new(line_number: usize, contexts: Vec<OneLineSingleContext<'a>>) -> Self {
        AggregatedOneLineContexts {
            line_number,
            contexts,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn contexts(&self) -> &[OneLineSingleContext<'a>] {
        &self.contexts
    }

    /// The contexts that mark cell boundaries on this line
    pub fn separators(&self) -> impl Iterator<Item = &OneLineSingleContext<'a>> {
        self.contexts
            .iter()
            .filter(|c| c.context_type().is_separator())
    }

    /// The contexts of one type on this line
    pub fn of_type(
        &self,
        context_type: ContextType,
    ) -> impl Iterator<Item = &OneLineSingleContext<'a>> {
        self.contexts
            .iter()
            .filter(move |c| c.context_type() == context_type)
    }
}

/// Any context element, single or aggregated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContextElement<'a> {
    OneLineSingle(OneLineSingleContext<'a>),
    AggregatedOneLine(AggregatedOneLineContexts<'a>),
}

impl<'a> ContextElement<'a> {
    pub fn line_number(&self) -> usize {
        match self {
            ContextElement::OneLineSingle(context) => context.line_number(),
            ContextElement::AggregatedOneLine(aggregated) => aggregated.line_number(),
        }
    }

    pub fn as_single(&self) -> Option<&OneLineSingleContext<'a>> {
        match self {
            ContextElement::OneLineSingle(context) => Some(context),
            ContextElement::AggregatedOneLine(_) => None,
        }
    }

    pub fn as_aggregated(&self) -> Option<&AggregatedOneLineContexts<'a>> {
        match self {
            ContextElement::OneLineSingle(_) => None,
            ContextElement::AggregatedOneLine(aggregated) => Some(aggregated),
        }
    }
}

impl<'a> From<OneLineSingleContext<'a>> for ContextElement<'a> {
    fn from(context: OneLineSingleContext<'a>) -> Self {
        ContextElement::OneLineSingle(context)
    }
}

impl<'a> From<AggregatedOneLineContexts<'a>> for ContextElement<'a> {
    fn from(aggregated: AggregatedOneLineContexts<'a>) -> Self {
        ContextElement::AggregatedOneLine(aggregated)
    }
}

impl Positioned for OneLineSingleContext<'_> {
    fn first_position(&self) -> Option<FilePosition> {
        self.tokens.first().map(|t| t.start)
    }
}

impl Positioned for AggregatedOneLineContexts<'_> {
    fn first_position(&self) -> Option<FilePosition> {
        None
    }
}

impl Positioned for ContextElement<'_> {
    fn first_position(&self) -> Option<FilePosition> {
        match self {
            ContextElement::OneLineSingle(context) => context.first_position(),
            ContextElement::AggregatedOneLine(aggregated) => aggregated.first_position(),
        }
    }
}
