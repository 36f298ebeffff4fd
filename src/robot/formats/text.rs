//! Line-oriented text format
//!
//! One token or context per line, position first, so the output can be grepped and diffed:
//!
//! ```text
//! line 2
//!   2:8 DOUBLE_SPACE_OR_TABULATOR_SEPARATED "  "
//! ```
//!
//! Texts are printed with Rust debug escaping, which keeps tabs and line endings visible.

use super::registry::{FormatError, Formatter};
use crate::robot::context::{ContextOutput, OneLineSingleContext};
use crate::robot::lexing::{Token, TokenOutput};

pub struct TextFormatter;

fn token_line(token: &Token) -> String {
    format!("{} {} {:?}", token.start, token.token_type, token.text)
}

fn context_line(context: &OneLineSingleContext<'_>) -> String {
    let position = context
        .tokens()
        .first()
        .map(|t| t.start.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{} {} {:?}",
        position,
        context.context_type(),
        context.text()
    )
}

/// Render tokens, one per line
pub fn tokens_to_text(output: &TokenOutput) -> String {
    let mut result = String::new();
    for token in output.tokens() {
        result.push_str(&token_line(token));
        result.push('\n');
    }
    result
}

/// Render contexts grouped under a `line N` heading per source line
pub fn contexts_to_text(output: &ContextOutput<'_>) -> String {
    let mut result = String::new();
    for element in output.elements() {
        result.push_str(&format!("line {}\n", element.line_number()));
        match element.as_aggregated() {
            Some(aggregated) => {
                for context in aggregated.contexts() {
                    result.push_str("  ");
                    result.push_str(&context_line(context));
                    result.push('\n');
                }
            }
            None => {
                if let Some(context) = element.as_single() {
                    result.push_str("  ");
                    result.push_str(&context_line(context));
                    result.push('\n');
                }
            }
        }
    }
    result
}

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize_tokens(&self, output: &TokenOutput) -> Result<String, FormatError> {
        Ok(tokens_to_text(output))
    }

    fn serialize_contexts(&self, output: &ContextOutput<'_>) -> Result<String, FormatError> {
        Ok(contexts_to_text(output))
    }

    fn description(&self) -> &str {
        "One token or context per line with its position and type"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::context::ContextBuilder;
    use crate::robot::lexing::tokenize;

    #[test]
    fn test_tokens_to_text() {
        let output = tokenize("Log\t${x}\n");
        assert_eq!(
            tokens_to_text(&output),
            concat!(
                "1:1 UNKNOWN_WORD \"Log\"\n",
                "1:4 SINGLE_TABULATOR \"\\t\"\n",
                "1:5 SINGLE_SCALAR_BEGIN_DOLLAR \"$\"\n",
                "1:6 SINGLE_VARIABLE_BEGIN_CURLY_BRACKET \"{\"\n",
                "1:7 UNKNOWN_WORD \"x\"\n",
                "1:8 SINGLE_VARIABLE_END_CURLY_BRACKET \"}\"\n",
                "1:9 LINE_FEED \"\\n\"\n",
            )
        );
    }

    #[test]
    fn test_contexts_to_text() {
        let output = tokenize("*** Settings ***\nLibrary  OS\n");
        let contexts = ContextBuilder::with_all().build(&output);
        assert_eq!(
            contexts_to_text(&contexts),
            concat!(
                "line 1\n",
                "  1:1 SETTING_TABLE_HEADER \"*** Settings ***\"\n",
                "line 2\n",
                "  2:8 DOUBLE_SPACE_OR_TABULATOR_SEPARATED \"  \"\n",
            )
        );
    }
}
