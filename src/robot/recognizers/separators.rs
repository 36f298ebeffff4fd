//! Double space / tabulator separator recognizer
//!
//! In the space separated format a cell boundary is two or more spaces or a tab. The whitespace
//! tokens between two cells form a run; a run qualifies as a boundary when it holds at least one
//! double space or tabulator token (a lone single space is part of the cell text).
//!
//! Only the first boundary of a line is reported as the separator, narrowed to its first double
//! space or tabulator token. Whatever follows that token in the same run, and every later
//! qualifying run as a whole, is reported as pretty align: padding that exists only to line up
//! columns. This is a single pass in column order, so the first separator is never hidden by a
//! later one.

use super::{check_window, content_end, ContextRecognizer};
use crate::robot::context::{ContextType, OneLineSingleContext};
use crate::robot::lexing::{LineTokenPosition, Token};
use std::ops::Range;

#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSpaceOrTabulatorSeparatorRecognizer;

/// Maximal runs of whitespace tokens in `range`
fn whitespace_runs(tokens: &[Token], range: Range<usize>) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut run_start: Option<usize> = None;

    for index in range.clone() {
        match (tokens[index].token_type.is_whitespace(), run_start) {
            (true, None) => run_start = Some(index),
            (false, Some(begin)) => {
                runs.push(begin..index);
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(begin) = run_start {
        runs.push(begin..range.end);
    }

    runs
}

impl ContextRecognizer for DoubleSpaceOrTabulatorSeparatorRecognizer {
    fn name(&self) -> &str {
        "separator"
    }

    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>> {
        check_window(tokens, line);
        let end = content_end(tokens, line);

        let mut found = Vec::new();
        let mut separator_seen = false;

        for run in whitespace_runs(tokens, line.start..end) {
            let Some(first) = run
                .clone()
                .find(|&index| tokens[index].token_type.is_separator_candidate())
            else {
                continue;
            };

            if separator_seen {
                found.push(OneLineSingleContext::new(
                    ContextType::PrettyAlign,
                    line.line_number,
                    &tokens[run],
                ));
                continue;
            }

            separator_seen = true;
            found.push(OneLineSingleContext::new(
                ContextType::DoubleSpaceOrTabulatorSeparated,
                line.line_number,
                &tokens[first..first + 1],
            ));
            if first + 1 < run.end {
                found.push(OneLineSingleContext::new(
                    ContextType::PrettyAlign,
                    line.line_number,
                    &tokens[first + 1..run.end],
                ));
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::lexing::FilePosition;
    use crate::robot::testing::{recognize_pairs, recognize_source};

    fn separators(source: &str) -> Vec<(ContextType, String)> {
        recognize_pairs(&DoubleSpaceOrTabulatorSeparatorRecognizer, source)
    }

    #[test]
    fn test_first_double_space_is_the_separator() {
        assert_eq!(
            separators("Library  OperatingSystem"),
            vec![(ContextType::DoubleSpaceOrTabulatorSeparated, "  ".into())]
        );
    }

    #[test]
    fn test_tabulator_separator() {
        let found = recognize_source(&DoubleSpaceOrTabulatorSeparatorRecognizer, "Log\tINFO\n");
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].context_type,
            ContextType::DoubleSpaceOrTabulatorSeparated
        );
        assert_eq!(found[0].start, Some(FilePosition::new(1, 4)));
    }

    #[test]
    fn test_rest_of_the_run_is_pretty_align() {
        assert_eq!(
            separators("Log     INFO"),
            vec![
                (ContextType::DoubleSpaceOrTabulatorSeparated, "  ".into()),
                (ContextType::PrettyAlign, "   ".into()),
            ]
        );
    }

    #[test]
    fn test_leading_single_space_stays_out() {
        assert_eq!(
            separators("Log \t INFO"),
            vec![
                (ContextType::DoubleSpaceOrTabulatorSeparated, "\t".into()),
                (ContextType::PrettyAlign, " ".into()),
            ]
        );
    }

    #[test]
    fn test_later_boundaries_are_pretty_align() {
        assert_eq!(
            separators("Log  foo bar\tbaz    x"),
            vec![
                (ContextType::DoubleSpaceOrTabulatorSeparated, "  ".into()),
                (ContextType::PrettyAlign, "\t".into()),
                (ContextType::PrettyAlign, "    ".into()),
            ]
        );
    }

    #[test]
    fn test_leading_indentation_is_the_separator() {
        let found = separators("    Log  x");
        assert_eq!(found[0], (ContextType::DoubleSpaceOrTabulatorSeparated, "  ".into()));
        assert_eq!(found[1], (ContextType::PrettyAlign, "  ".into()));
        assert_eq!(found[2], (ContextType::PrettyAlign, "  ".into()));
    }

    #[test]
    fn test_single_spaces_only() {
        assert!(separators("Log this message").is_empty());
        assert!(separators("\n").is_empty());
    }

    #[test]
    fn test_line_ending_is_not_part_of_a_run() {
        assert_eq!(
            separators("a  \r\n"),
            vec![(ContextType::DoubleSpaceOrTabulatorSeparated, "  ".into())]
        );
    }
}
