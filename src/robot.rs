//! Robot Framework plain-text recognition
//!
//! Two stages turn source text into tagged structure:
//!
//! 1. [lexing] splits the text into typed, positioned tokens and indexes them by line.
//! 2. [recognizers] find contexts (headers, variables, comments, separators, escapes and so on)
//!    inside each line; the [context] builder merges them per line in position order.
//!
//! The [pipeline] makes the recognizer set configurable and [formats] renders either stage as
//! text, JSON or YAML.
//!
//! ```rust-example
//! let output = robolex::robot::lexing::tokenize("*** Settings ***\nLibrary  OS\n");
//! let contexts = robolex::robot::recognize(&output);
//! for context in contexts.contexts() {
//!     println!("{} {}", context.context_type(), context.text());
//! }
//! ```

pub mod context;
pub mod formats;
pub mod lexing;
pub mod pipeline;
pub mod recognizers;
pub mod testing;

pub use context::{ContextBuilder, ContextElement, ContextOutput, ContextType, OneLineSingleContext};
pub use lexing::{tokenize, Token, TokenOutput, TokenType};
pub use recognizers::{ContextRecognizer, RecognizerKind};

/// Run every recognizer over `output`
pub fn recognize(output: &TokenOutput) -> ContextOutput<'_> {
    ContextBuilder::with_all().build(output)
}
