//! Core token vocabulary for Robot Framework plain-text data.
//!
//!     The vocabulary is closed: every token the lexer produces has one of the [TokenType]
//!     variants below, and nothing extends it at runtime. The variants fall into three
//!     families (see [TokenFamily]):
//!
//!     Single Character:
//!         One source character each: asterisk, dot, colon, equal sign, pipe, the variable
//!         sigils (`$ @ & %`), curly and square brackets, quote mark, space, tab, CR, LF,
//!         escape backslash and hash.
//!
//!     Multi Character:
//!         Runs of identical markers. Spaces are paired, so four spaces are two
//!         [TokenType::DoubleSpace] tokens while three spaces are a double space followed by
//!         a single one. Dots are split by run length because a run of exactly three dots is
//!         the continuation marker.
//!
//!     Words:
//!         Maximal runs of non-special characters. The lexer classifies a fixed lexicon
//!         case-insensitively (`Settings`, `SETTINGS` and `settings` are all
//!         [TokenType::SettingsWord]) and escape values such as `\x41` get their own word
//!         types. Anything else is [TokenType::UnknownWord].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which family a token type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenFamily {
    SingleChar,
    MultiChar,
    Word,
}

/// All token types produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // Single character markers
    SingleAsterisk,
    SingleDot,
    SingleColon,
    SingleEqual,
    SinglePipe,
    SingleSpace,
    SingleTabulator,
    SingleEscapeBackslash,
    SingleCommentHash,
    SingleScalarBeginDollar,
    SingleListBeginAt,
    SingleDictionaryBeginAmpersand,
    SingleEnvironmentBeginPercent,
    SingleVariableBeginCurlyBracket,
    SingleVariableEndCurlyBracket,
    SinglePositionIndexBeginSquareBracket,
    SinglePositionIndexEndSquareBracket,
    SingleQuoteMark,
    CarriageReturn,
    LineFeed,

    // Multi character markers
    ManyAsterisks,
    DoubleSpace,
    DoubleEscapeBackslash,
    ManyCommentHashes,
    EmptyCellDots,
    ContinuePreviousLineDots,
    MoreThanThreeDots,

    // Words
    KeywordWord,
    KeywordsWord,
    UserWord,
    SettingWord,
    SettingsWord,
    MetadataWord,
    VariableWord,
    VariablesWord,
    TestWord,
    CaseWord,
    CasesWord,
    TaskWord,
    TasksWord,
    CommentFromBuiltin,
    CommentsWord,
    ByteHexValueWord,
    ShortHexValueWord,
    LongHexValueWord,
    UnknownWord,
}

impl TokenType {
    /// The family this token type belongs to
    pub fn family(&self) -> TokenFamily {
        use TokenType::*;
        match self {
            SingleAsterisk
            | SingleDot
            | SingleColon
            | SingleEqual
            | SinglePipe
            | SingleSpace
            | SingleTabulator
            | SingleEscapeBackslash
            | SingleCommentHash
            | SingleScalarBeginDollar
            | SingleListBeginAt
            | SingleDictionaryBeginAmpersand
            | SingleEnvironmentBeginPercent
            | SingleVariableBeginCurlyBracket
            | SingleVariableEndCurlyBracket
            | SinglePositionIndexBeginSquareBracket
            | SinglePositionIndexEndSquareBracket
            | SingleQuoteMark
            | CarriageReturn
            | LineFeed => TokenFamily::SingleChar,
            ManyAsterisks
            | DoubleSpace
            | DoubleEscapeBackslash
            | ManyCommentHashes
            | EmptyCellDots
            | ContinuePreviousLineDots
            | MoreThanThreeDots => TokenFamily::MultiChar,
            _ => TokenFamily::Word,
        }
    }

    /// Check if this token is a word (recognized or unknown)
    pub fn is_word(&self) -> bool {
        self.family() == TokenFamily::Word
    }

    /// Check if this token is one of the escape value words (`xHH`, `uHHHH`, `UHHHHHHHH`)
    pub fn is_hex_value(&self) -> bool {
        matches!(
            self,
            TokenType::ByteHexValueWord | TokenType::ShortHexValueWord | TokenType::LongHexValueWord
        )
    }

    /// Check if this token is in-line whitespace (space, double space or tab)
    pub fn is_whitespace(&self) -> bool {
        matches!(
            self,
            TokenType::SingleSpace | TokenType::DoubleSpace | TokenType::SingleTabulator
        )
    }

    /// Check if this token is a cell separator candidate (double space or tab)
    pub fn is_separator_candidate(&self) -> bool {
        matches!(self, TokenType::DoubleSpace | TokenType::SingleTabulator)
    }

    /// Check if this token ends (or is part of the ending of) a line
    pub fn is_line_end(&self) -> bool {
        matches!(self, TokenType::CarriageReturn | TokenType::LineFeed)
    }

    /// Check if this token is a variable sigil (`$`, `@`, `&`, `%`)
    pub fn is_sigil(&self) -> bool {
        matches!(
            self,
            TokenType::SingleScalarBeginDollar
                | TokenType::SingleListBeginAt
                | TokenType::SingleDictionaryBeginAmpersand
                | TokenType::SingleEnvironmentBeginPercent
        )
    }

    /// Check if this token is a hash or a run of hashes
    pub fn is_hash(&self) -> bool {
        matches!(
            self,
            TokenType::SingleCommentHash | TokenType::ManyCommentHashes
        )
    }

    /// Upper snake case name, stable across releases
    pub fn name(&self) -> &'static str {
        use TokenType::*;
        match self {
            SingleAsterisk => "SINGLE_ASTERISK",
            SingleDot => "SINGLE_DOT",
            SingleColon => "SINGLE_COLON",
            SingleEqual => "SINGLE_EQUAL",
            SinglePipe => "SINGLE_PIPE",
            SingleSpace => "SINGLE_SPACE",
            SingleTabulator => "SINGLE_TABULATOR",
            SingleEscapeBackslash => "SINGLE_ESCAPE_BACKSLASH",
            SingleCommentHash => "SINGLE_COMMENT_HASH",
            SingleScalarBeginDollar => "SINGLE_SCALAR_BEGIN_DOLLAR",
            SingleListBeginAt => "SINGLE_LIST_BEGIN_AT",
            SingleDictionaryBeginAmpersand => "SINGLE_DICTIONARY_BEGIN_AMPERSAND",
            SingleEnvironmentBeginPercent => "SINGLE_ENVIRONMENT_BEGIN_PERCENT",
            SingleVariableBeginCurlyBracket => "SINGLE_VARIABLE_BEGIN_CURLY_BRACKET",
            SingleVariableEndCurlyBracket => "SINGLE_VARIABLE_END_CURLY_BRACKET",
            SinglePositionIndexBeginSquareBracket => "SINGLE_POSITION_INDEX_BEGIN_SQUARE_BRACKET",
            SinglePositionIndexEndSquareBracket => "SINGLE_POSITION_INDEX_END_SQUARE_BRACKET",
            SingleQuoteMark => "SINGLE_QUOTE_MARK",
            CarriageReturn => "CARRIAGE_RETURN",
            LineFeed => "LINE_FEED",
            ManyAsterisks => "MANY_ASTERISKS",
            DoubleSpace => "DOUBLE_SPACE",
            DoubleEscapeBackslash => "DOUBLE_ESCAPE_BACKSLASH",
            ManyCommentHashes => "MANY_COMMENT_HASHES",
            EmptyCellDots => "EMPTY_CELL_DOTS",
            ContinuePreviousLineDots => "CONTINUE_PREVIOUS_LINE_DOTS",
            MoreThanThreeDots => "MORE_THAN_THREE_DOTS",
            KeywordWord => "KEYWORD_WORD",
            KeywordsWord => "KEYWORDS_WORD",
            UserWord => "USER_WORD",
            SettingWord => "SETTING_WORD",
            SettingsWord => "SETTINGS_WORD",
            MetadataWord => "METADATA_WORD",
            VariableWord => "VARIABLE_WORD",
            VariablesWord => "VARIABLES_WORD",
            TestWord => "TEST_WORD",
            CaseWord => "CASE_WORD",
            CasesWord => "CASES_WORD",
            TaskWord => "TASK_WORD",
            TasksWord => "TASKS_WORD",
            CommentFromBuiltin => "COMMENT_FROM_BUILTIN",
            CommentsWord => "COMMENTS_WORD",
            ByteHexValueWord => "BYTE_HEX_VALUE_WORD",
            ShortHexValueWord => "SHORT_HEX_VALUE_WORD",
            LongHexValueWord => "LONG_HEX_VALUE_WORD",
            UnknownWord => "UNKNOWN_WORD",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
