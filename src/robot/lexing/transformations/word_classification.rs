//! Word classification
//!
//! Assigns the recognized word types (table header keywords, `Comment`) to unknown words.
//! Matching is case-insensitive, so header recognizers never need to care about letter case.

use super::interface::{SpannedTokens, Transformation};
use crate::robot::lexing::tokens_core::TokenType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Lower-cased lexicon of recognized words
static LEXICON: Lazy<HashMap<&'static str, TokenType>> = Lazy::new(|| {
    HashMap::from([
        ("keyword", TokenType::KeywordWord),
        ("keywords", TokenType::KeywordsWord),
        ("user", TokenType::UserWord),
        ("setting", TokenType::SettingWord),
        ("settings", TokenType::SettingsWord),
        ("metadata", TokenType::MetadataWord),
        ("variable", TokenType::VariableWord),
        ("variables", TokenType::VariablesWord),
        ("test", TokenType::TestWord),
        ("case", TokenType::CaseWord),
        ("cases", TokenType::CasesWord),
        ("task", TokenType::TaskWord),
        ("tasks", TokenType::TasksWord),
        ("comment", TokenType::CommentFromBuiltin),
        ("comments", TokenType::CommentsWord),
    ])
});

/// Look up the word type for `text`, ignoring letter case
pub fn classify_word(text: &str) -> TokenType {
    LEXICON
        .get(text.to_lowercase().as_str())
        .copied()
        .unwrap_or(TokenType::UnknownWord)
}

/// Retypes unknown words found in the lexicon
pub struct WordClassification;

impl Transformation for WordClassification {
    fn name(&self) -> &str {
        "word_classification"
    }

    fn description(&self) -> &str {
        "Assign recognized word types to lexicon words, ignoring letter case"
    }

    fn transform(&self, source: &str, tokens: SpannedTokens) -> SpannedTokens {
        tokens
            .into_iter()
            .map(|(token_type, span)| {
                if token_type == TokenType::UnknownWord {
                    (classify_word(&source[span.clone()]), span)
                } else {
                    (token_type, span)
                }
            })
            .collect()
    }
}
