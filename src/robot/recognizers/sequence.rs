//! Generic expected-sequence driver
//!
//!     A recognizer built on this driver is described by a [ContextType] and an ordered list of
//!     [ExpectedSequenceElement]s. Each element expects one token type (or one of a set) and is
//!     either mandatory or optional. A repeated optional element consumes as many matching
//!     tokens in a row as there are, possibly none.
//!
//!     Matching
//!
//!         From each candidate start offset the driver walks the window and the expected list
//!         together. A matching token is consumed and both advance. An optional element that
//!         does not match is skipped without consuming input, so the same token is checked
//!         against the next expected element. A mandatory element that does not match aborts
//!         the attempt, and the driver retries one token later (sliding window). This is what
//!         lets `foobar*** Settings ***` match despite the leading trash.
//!
//!         An attempt is accepted when the whole expected list was processed, or when the
//!         window ran out and [was_all_mandatory_found] holds for what is left. Accepted
//!         matches are emitted and scanning resumes right after them, so several occurrences
//!         on one line are all reported. When the last token of a match was taken by a trailing
//!         optional element and can also open the sequence, it is shared: scanning resumes on
//!         it. `*Test Case*Test Cases` thus gives `*Test Case*` and `*Test Cases`.
//!
//!     Escaping
//!
//!         An escapable recognizer ignores start offsets preceded by a single escape
//!         backslash: `\*** Settings ***` is text, not a header.

use super::{check_window, is_escaped, ContextRecognizer};
use crate::robot::context::{ContextType, OneLineSingleContext};
use crate::robot::lexing::{LineTokenPosition, Token, TokenType};
use serde::Serialize;
use tracing::trace;

/// Whether an expected element must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Mandatory,
    Optional,
}

/// What an expected element accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expected {
    Type(TokenType),
    AnyOf(&'static [TokenType]),
}

impl Expected {
    pub fn matches(&self, token_type: TokenType) -> bool {
        match self {
            Expected::Type(expected) => *expected == token_type,
            Expected::AnyOf(expected) => expected.contains(&token_type),
        }
    }
}

/// One step of an expected sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectedSequenceElement {
    pub expected: Expected,
    pub priority: Priority,
    pub repeated: bool,
}

impl ExpectedSequenceElement {
    pub fn mandatory(token_type: TokenType) -> Self {
        ExpectedSequenceElement {
            expected: Expected::Type(token_type),
            priority: Priority::Mandatory,
            repeated: false,
        }
    }

    pub fn optional(token_type: TokenType) -> Self {
        ExpectedSequenceElement {
            expected: Expected::Type(token_type),
            priority: Priority::Optional,
            repeated: false,
        }
    }

    pub fn mandatory_any(token_types: &'static [TokenType]) -> Self {
        ExpectedSequenceElement {
            expected: Expected::AnyOf(token_types),
            priority: Priority::Mandatory,
            repeated: false,
        }
    }

    pub fn optional_any(token_types: &'static [TokenType]) -> Self {
        ExpectedSequenceElement {
            expected: Expected::AnyOf(token_types),
            priority: Priority::Optional,
            repeated: false,
        }
    }

    /// Zero or more tokens of any of `token_types`
    pub fn optional_repeated_any(token_types: &'static [TokenType]) -> Self {
        ExpectedSequenceElement {
            repeated: true,
            ..Self::optional_any(token_types)
        }
    }

    pub fn matches(&self, token_type: TokenType) -> bool {
        self.expected.matches(token_type)
    }

    pub fn is_optional(&self) -> bool {
        self.priority == Priority::Optional
    }
}

/// Check that every element from `index` onward is optional
///
/// An index out of range in either direction (including `-1`) counts as "all found", and so
/// does an empty list.
pub fn was_all_mandatory_found(elements: &[ExpectedSequenceElement], index: isize) -> bool {
    if index < 0 || index as usize >= elements.len() {
        return true;
    }
    elements[index as usize..]
        .iter()
        .all(ExpectedSequenceElement::is_optional)
}

/// Recognizer driven by one expected sequence
#[derive(Debug, Clone)]
pub struct SequenceRecognizer {
    name: String,
    context_type: ContextType,
    sequence: Vec<ExpectedSequenceElement>,
    escapable: bool,
}

impl SequenceRecognizer {
    pub fn new(
        name: impl Into<String>,
        context_type: ContextType,
        sequence: Vec<ExpectedSequenceElement>,
    ) -> Self {
        SequenceRecognizer {
            name: name.into(),
            context_type,
            sequence,
            escapable: false,
        }
    }

    /// Ignore matches starting right after a single escape backslash
    pub fn escapable(mut self) -> Self {
        self.escapable = true;
        self
    }

    pub fn context_type(&self) -> ContextType {
        self.context_type
    }

    pub fn sequence(&self) -> &[ExpectedSequenceElement] {
        &self.sequence
    }

    /// Try to match the sequence at `start`
    ///
    /// Returns the end of the match and the offset scanning resumes from.
    fn match_at(&self, tokens: &[Token], start: usize, end: usize) -> Option<(usize, usize)> {
        let mut position = start;
        let mut expected_index = 0;
        let mut last_matched = None;

        while expected_index < self.sequence.len() && position < end {
            let element = &self.sequence[expected_index];
            if element.matches(tokens[position].token_type) {
                position += 1;
                last_matched = Some(expected_index);
                if !element.repeated {
                    expected_index += 1;
                }
            } else if element.is_optional() {
                expected_index += 1;
            } else {
                return None;
            }
        }

        let complete = expected_index >= self.sequence.len()
            || was_all_mandatory_found(&self.sequence, expected_index as isize);
        if complete && position > start {
            Some((position, self.resume_offset(tokens, start, position, last_matched)))
        } else {
            None
        }
    }

    /// Where to continue after a match of `start..end`
    fn resume_offset(
        &self,
        tokens: &[Token],
        start: usize,
        end: usize,
        last_matched: Option<usize>,
    ) -> usize {
        let trailing_optional = last_matched
            .map_or(false, |index| was_all_mandatory_found(&self.sequence, index as isize));
        let opens_sequence = self
            .sequence
            .first()
            .map_or(false, |first| first.matches(tokens[end - 1].token_type));
        if end - start > 1 && trailing_optional && opens_sequence {
            end - 1
        } else {
            end
        }
    }
}

impl ContextRecognizer for SequenceRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>> {
        check_window(tokens, line);

        let mut found = Vec::new();
        let mut start = line.start;

        while start < line.end {
            if self.escapable && is_escaped(tokens, line.start, start) {
                start += 1;
                continue;
            }

            match self.match_at(tokens, start, line.end) {
                Some((end, resume)) => {
                    trace!(
                        "{} matched {} at {}",
                        self.name,
                        self.context_type,
                        tokens[start].start
                    );
                    found.push(OneLineSingleContext::new(
                        self.context_type,
                        line.line_number,
                        &tokens[start..end],
                    ));
                    start = resume;
                }
                None => start += 1,
            }
        }

        found
    }
}
