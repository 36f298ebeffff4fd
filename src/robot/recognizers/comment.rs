//! Declared comment recognizer
//!
//! A comment starts at an unescaped hash (or hash run) or at the builtin `Comment` keyword and
//! runs to the end of the line, line ending excluded. Hashes inside an open comment belong to it;
//! there is at most one comment per line. A `Comment` word right after header asterisks is the
//! `*** Comment ***` table header, not a comment.

use super::{check_window, content_end, is_escaped, ContextRecognizer};
use crate::robot::context::{ContextType, OneLineSingleContext};
use crate::robot::lexing::{LineTokenPosition, Token, TokenType};

#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredCommentRecognizer;

impl DeclaredCommentRecognizer {
    fn is_trigger(tokens: &[Token], start: usize, index: usize) -> bool {
        let token_type = tokens[index].token_type;
        if token_type.is_hash() {
            !is_escaped(tokens, start, index)
        } else {
            token_type == TokenType::CommentFromBuiltin
                && !Self::follows_asterisks(tokens, start, index)
        }
    }

    fn follows_asterisks(tokens: &[Token], start: usize, index: usize) -> bool {
        tokens[start..index]
            .iter()
            .rev()
            .find(|t| !t.token_type.is_whitespace())
            .map_or(false, |t| {
                matches!(
                    t.token_type,
                    TokenType::SingleAsterisk | TokenType::ManyAsterisks
                )
            })
    }
}

impl ContextRecognizer for DeclaredCommentRecognizer {
    fn name(&self) -> &str {
        "declared-comment"
    }

    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>> {
        check_window(tokens, line);
        let end = content_end(tokens, line);

        (line.start..end)
            .find(|&index| Self::is_trigger(tokens, line.start, index))
            .map(|begin| {
                OneLineSingleContext::new(
                    ContextType::DeclaredComment,
                    line.line_number,
                    &tokens[begin..end],
                )
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::lexing::FilePosition;
    use crate::robot::testing::{recognize_source, FoundContext};

    fn comments(source: &str) -> Vec<FoundContext> {
        recognize_source(&DeclaredCommentRecognizer, source)
    }

    #[test]
    fn test_builtin_comment_after_tab() {
        let found = comments("\tComment escaped\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Comment escaped");
        assert_eq!(found[0].start, Some(FilePosition::new(1, 2)));
    }

    #[test]
    fn test_builtin_comment_after_escaped_space() {
        let found = comments("foobar\\ Comment ####escaped");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Comment ####escaped");
        assert_eq!(
            found[0].token_types,
            vec![
                TokenType::CommentFromBuiltin,
                TokenType::SingleSpace,
                TokenType::ManyCommentHashes,
                TokenType::UnknownWord,
            ]
        );
    }

    #[test]
    fn test_hash_comment() {
        let found = comments("#escaped\r\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "#escaped");
    }

    #[test]
    fn test_nested_hashes_are_absorbed() {
        let found = comments("Log  x  # one # two");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "# one # two");
    }

    #[test]
    fn test_escaped_hash() {
        assert!(comments("foobar\\# escaped").is_empty());
        assert_eq!(comments("a\\#b #c")[0].text, "#c");
    }

    #[test]
    fn test_one_comment_per_line() {
        let found = comments("# a\n  # b\nc");
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].line, 2);
        assert_eq!(found[1].text, "# b");
    }

    #[test]
    fn test_comment_table_header_is_not_a_comment() {
        assert!(comments("*** Comment ***").is_empty());
        assert!(comments("*Comments").is_empty());
        assert_eq!(comments("*** Comment ***  # note")[0].text, "# note");
        assert_eq!(comments("*x Comment y")[0].text, "Comment y");
    }

    #[test]
    fn test_no_comment() {
        assert!(comments("foobar foobar").is_empty());
    }
}
