//! Base tokenization using the logos lexer library
//!
//! This is where source strings become token streams. Logos only knows the character-level
//! shapes; word classification and escape value detection are transformations applied to
//! the stream afterwards (see [transformations](super::transformations)).

use crate::robot::lexing::tokens_core::TokenType;
use logos::Logos;
use std::ops::Range;

/// Raw token shapes recognized by logos
///
/// Every character of the input is covered: the `Word` pattern matches everything that is not
/// one of the special characters listed in the other variants.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    #[token("*")]
    Asterisk,
    #[regex(r"\*\*+")]
    Asterisks,

    #[token(".")]
    Dot,
    #[token("..")]
    TwoDots,
    #[token("...")]
    ThreeDots,
    #[regex(r"\.\.\.\.+")]
    ManyDots,

    #[token(":")]
    Colon,
    #[token("=")]
    Equal,
    #[token("|")]
    Pipe,

    #[token(" ")]
    Space,
    #[token("  ")]
    DoubleSpace,
    #[token("\t")]
    Tab,

    #[token("\\")]
    Backslash,
    #[token("\\\\")]
    DoubleBackslash,

    #[token("#")]
    Hash,
    #[regex(r"##+")]
    Hashes,

    #[token("$")]
    Dollar,
    #[token("@")]
    At,
    #[token("&")]
    Ampersand,
    #[token("%")]
    Percent,

    #[token("{")]
    OpenCurly,
    #[token("}")]
    CloseCurly,
    #[token("[")]
    OpenSquare,
    #[token("]")]
    CloseSquare,

    #[token("\"")]
    Quote,

    #[token("\r")]
    CarriageReturn,
    #[token("\n")]
    LineFeed,

    #[regex(r#"[^*.:=| \t\\#$@&%{}\[\]"\r\n]+"#)]
    Word,
}

impl From<RawToken> for TokenType {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Asterisk => TokenType::SingleAsterisk,
            RawToken::Asterisks => TokenType::ManyAsterisks,
            RawToken::Dot => TokenType::SingleDot,
            RawToken::TwoDots => TokenType::EmptyCellDots,
            RawToken::ThreeDots => TokenType::ContinuePreviousLineDots,
            RawToken::ManyDots => TokenType::MoreThanThreeDots,
            RawToken::Colon => TokenType::SingleColon,
            RawToken::Equal => TokenType::SingleEqual,
            RawToken::Pipe => TokenType::SinglePipe,
            RawToken::Space => TokenType::SingleSpace,
            RawToken::DoubleSpace => TokenType::DoubleSpace,
            RawToken::Tab => TokenType::SingleTabulator,
            RawToken::Backslash => TokenType::SingleEscapeBackslash,
            RawToken::DoubleBackslash => TokenType::DoubleEscapeBackslash,
            RawToken::Hash => TokenType::SingleCommentHash,
            RawToken::Hashes => TokenType::ManyCommentHashes,
            RawToken::Dollar => TokenType::SingleScalarBeginDollar,
            RawToken::At => TokenType::SingleListBeginAt,
            RawToken::Ampersand => TokenType::SingleDictionaryBeginAmpersand,
            RawToken::Percent => TokenType::SingleEnvironmentBeginPercent,
            RawToken::OpenCurly => TokenType::SingleVariableBeginCurlyBracket,
            RawToken::CloseCurly => TokenType::SingleVariableEndCurlyBracket,
            RawToken::OpenSquare => TokenType::SinglePositionIndexBeginSquareBracket,
            RawToken::CloseSquare => TokenType::SinglePositionIndexEndSquareBracket,
            RawToken::Quote => TokenType::SingleQuoteMark,
            RawToken::CarriageReturn => TokenType::CarriageReturn,
            RawToken::LineFeed => TokenType::LineFeed,
            RawToken::Word => TokenType::UnknownWord,
        }
    }
}

/// Tokenize source text into raw token types with byte spans
///
/// Anything logos cannot match degrades to [TokenType::UnknownWord] so that the output
/// always covers the whole input.
pub fn tokenize(source: &str) -> Vec<(TokenType, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token_type = match result {
            Ok(raw) => TokenType::from(raw),
            Err(()) => TokenType::UnknownWord,
        };
        tokens.push((token_type, lexer.span()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(source: &str) -> Vec<TokenType> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_spaces_are_paired() {
        assert_eq!(
            types("      "),
            vec![
                TokenType::DoubleSpace,
                TokenType::DoubleSpace,
                TokenType::DoubleSpace
            ]
        );
        assert_eq!(
            types("   "),
            vec![TokenType::DoubleSpace, TokenType::SingleSpace]
        );
    }

    #[test]
    fn test_tabs_are_single() {
        assert_eq!(
            types("\t\t\t"),
            vec![
                TokenType::SingleTabulator,
                TokenType::SingleTabulator,
                TokenType::SingleTabulator
            ]
        );
    }

    #[test]
    fn test_dot_runs() {
        assert_eq!(types("."), vec![TokenType::SingleDot]);
        assert_eq!(types(".."), vec![TokenType::EmptyCellDots]);
        assert_eq!(types("..."), vec![TokenType::ContinuePreviousLineDots]);
        assert_eq!(types("...."), vec![TokenType::MoreThanThreeDots]);
        assert_eq!(types("........"), vec![TokenType::MoreThanThreeDots]);
    }

    #[test]
    fn test_backslash_interrupted_dots() {
        assert_eq!(
            types(".\\.."),
            vec![
                TokenType::SingleDot,
                TokenType::SingleEscapeBackslash,
                TokenType::EmptyCellDots
            ]
        );
    }

    #[test]
    fn test_backslashes() {
        assert_eq!(types("\\"), vec![TokenType::SingleEscapeBackslash]);
        assert_eq!(types("\\\\"), vec![TokenType::DoubleEscapeBackslash]);
        assert_eq!(
            types("\\\\\\"),
            vec![
                TokenType::DoubleEscapeBackslash,
                TokenType::SingleEscapeBackslash
            ]
        );
    }

    #[test]
    fn test_crlf_is_two_tokens() {
        assert_eq!(
            types("\r\n"),
            vec![TokenType::CarriageReturn, TokenType::LineFeed]
        );
    }

    #[test]
    fn test_word_is_split_on_special_characters() {
        let tokens = tokenize("foobar*");
        assert_eq!(
            tokens,
            vec![
                (TokenType::UnknownWord, 0..6),
                (TokenType::SingleAsterisk, 6..7)
            ]
        );
    }

    #[test]
    fn test_variable_shapes() {
        assert_eq!(
            types("${x}[0]"),
            vec![
                TokenType::SingleScalarBeginDollar,
                TokenType::SingleVariableBeginCurlyBracket,
                TokenType::UnknownWord,
                TokenType::SingleVariableEndCurlyBracket,
                TokenType::SinglePositionIndexBeginSquareBracket,
                TokenType::UnknownWord,
                TokenType::SinglePositionIndexEndSquareBracket,
            ]
        );
        assert_eq!(
            types("@&%"),
            vec![
                TokenType::SingleListBeginAt,
                TokenType::SingleDictionaryBeginAmpersand,
                TokenType::SingleEnvironmentBeginPercent,
            ]
        );
    }

    #[test]
    fn test_non_ascii_words() {
        let tokens = tokenize("zażółć\u{a0}gęślą");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, TokenType::UnknownWord);
    }
}
