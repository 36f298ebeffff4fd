//! Transformation interface for token stream transformations
//!
//! A transformation is a pure function from a token stream to a token stream. The source text
//! is passed alongside because tokens carry only their byte spans at this stage.

use crate::robot::lexing::tokens_core::TokenType;
use std::ops::Range;

/// A token stream paired with source byte spans
pub type SpannedTokens = Vec<(TokenType, Range<usize>)>;

/// A transformation that processes a token stream
///
/// Transformations must keep the stream covering the whole source: they may retype tokens or
/// split one token into adjacent ones, but never drop or reorder source text.
pub trait Transformation {
    /// Returns the name of this transformation
    ///
    /// Names should be lowercase with underscores (e.g., "word_classification")
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this transformation does
    fn description(&self) -> &str;

    /// Apply this transformation to a token stream
    fn transform(&self, source: &str, tokens: SpannedTokens) -> SpannedTokens;
}
