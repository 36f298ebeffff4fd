//! Escape value detection
//!
//! Robot Framework lets a cell spell a character by its code point: `\x41`, `\u00e9` or
//! `\U0001F600`. This transformation looks at every word that directly follows a single escape
//! backslash and, when the word starts with a well-formed escape value, retypes that prefix as
//! a hex value word. Whatever follows the escape value inside the same word is split off as a
//! separate word, so `\xffnotNumber` becomes `\`, `xff`, `notNumber`.
//!
//! Malformed escapes (too few digits, non-hex digits) are left untouched and stay unknown words.

use super::interface::{SpannedTokens, Transformation};
use crate::robot::lexing::tokens_core::TokenType;

/// Splits and retypes escape values following a single backslash
pub struct HexEscapeDetection;

impl Transformation for HexEscapeDetection {
    fn name(&self) -> &str {
        "hex_escape_detection"
    }

    fn description(&self) -> &str {
        "Retype \\xHH, \\uHHHH and \\UHHHHHHHH escape values and split them from trailing text"
    }

    fn transform(&self, source: &str, tokens: SpannedTokens) -> SpannedTokens {
        let mut result = Vec::with_capacity(tokens.len());
        let mut previous: Option<TokenType> = None;

        for (token_type, span) in tokens {
            let after_escape = previous == Some(TokenType::SingleEscapeBackslash);
            previous = Some(token_type);

            if !after_escape || token_type != TokenType::UnknownWord {
                result.push((token_type, span));
                continue;
            }

            match escape_value_length(&source[span.clone()]) {
                Some((hex_type, length)) => {
                    let split = span.start + length;
                    result.push((hex_type, span.start..split));
                    if split < span.end {
                        result.push((TokenType::UnknownWord, split..span.end));
                    }
                }
                None => result.push((token_type, span)),
            }
        }

        result
    }
}

/// Returns the escape value type and its byte length if `text` starts with one
pub fn escape_value_length(text: &str) -> Option<(TokenType, usize)> {
    let (hex_type, digits) = match text.chars().next()? {
        'x' => (TokenType::ByteHexValueWord, 2),
        'u' => (TokenType::ShortHexValueWord, 4),
        'U' => (TokenType::LongHexValueWord, 8),
        _ => return None,
    };

    let candidate = text.get(1..1 + digits)?;
    if is_hex(candidate) {
        Some((hex_type, 1 + digits))
    } else {
        None
    }
}

/// Check that every character is an ASCII hex digit (0-9, a-f, A-F)
pub fn is_hex(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_hexdigit())
}
