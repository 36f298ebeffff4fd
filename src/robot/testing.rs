//! Testing utilities for recognizer assertions
//!
//! Contexts borrow the token output they were found in, which makes them awkward to return
//! from test helpers. [FoundContext] is an owned summary of one context: everything a test
//! usually asserts on, detached from the tokens.
//!
//! ```rust-example
//! use robolex::robot::testing::recognize_source;
//! use robolex::robot::recognizers::DeclaredCommentRecognizer;
//!
//! let found = recognize_source(&DeclaredCommentRecognizer, "Log  x  # note");
//! assert_eq!(found[0].text, "# note");
//! ```

use crate::robot::context::{ContextOutput, ContextType, OneLineSingleContext};
use crate::robot::lexing::{tokenize, FilePosition, TokenType};
use crate::robot::recognizers::ContextRecognizer;

/// Owned summary of a recognized context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundContext {
    pub context_type: ContextType,
    pub line: usize,
    pub start: Option<FilePosition>,
    pub text: String,
    pub token_types: Vec<TokenType>,
}

impl From<&OneLineSingleContext<'_>> for FoundContext {
    fn from(context: &OneLineSingleContext<'_>) -> Self {
        FoundContext {
            context_type: context.context_type(),
            line: context.line_number(),
            start: context.tokens().first().map(|t| t.start),
            text: context.text(),
            token_types: context.tokens().iter().map(|t| t.token_type).collect(),
        }
    }
}

/// Tokenize `source` and run `recognizer` on every line
pub fn recognize_source(recognizer: &dyn ContextRecognizer, source: &str) -> Vec<FoundContext> {
    let output = tokenize(source);
    output
        .lines()
        .iter()
        .flat_map(|line| recognizer.recognize(output.tokens(), line))
        .map(|context| FoundContext::from(&context))
        .collect()
}

/// `(type, text)` pairs of everything `recognizer` finds in `source`
pub fn recognize_pairs(
    recognizer: &dyn ContextRecognizer,
    source: &str,
) -> Vec<(ContextType, String)> {
    recognize_source(recognizer, source)
        .into_iter()
        .map(|found| (found.context_type, found.text))
        .collect()
}

/// Flatten a builder output into owned summaries, in output order
pub fn summarize(output: &ContextOutput<'_>) -> Vec<FoundContext> {
    output.contexts().map(FoundContext::from).collect()
}

/// Token types of `source`, in order
pub fn token_types(source: &str) -> Vec<TokenType> {
    tokenize(source)
        .tokens()
        .iter()
        .map(|t| t.token_type)
        .collect()
}
