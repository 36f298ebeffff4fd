//! JSON format (`serde_json`, pretty printed)

use super::registry::{FormatError, Formatter};
use crate::robot::context::ContextOutput;
use crate::robot::lexing::TokenOutput;
use serde::Serialize;

pub struct JsonFormatter;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    serde_json::to_string_pretty(value).map_err(|e| FormatError::SerializationError(e.to_string()))
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize_tokens(&self, output: &TokenOutput) -> Result<String, FormatError> {
        to_json(output)
    }

    fn serialize_contexts(&self, output: &ContextOutput<'_>) -> Result<String, FormatError> {
        to_json(output)
    }

    fn description(&self) -> &str {
        "Pretty printed JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::context::ContextBuilder;
    use crate::robot::lexing::tokenize;
    use serde_json::Value;

    #[test]
    fn test_tokens_json() {
        let output = tokenize("a  b");
        let json: Value =
            serde_json::from_str(&JsonFormatter.serialize_tokens(&output).unwrap()).unwrap();
        let tokens = json["tokens"].as_array().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1]["token_type"], "DOUBLE_SPACE");
        assert_eq!(tokens[1]["start"]["column"], 2);
        assert_eq!(json["lines"][0]["line_number"], 1);
    }

    #[test]
    fn test_contexts_json() {
        let output = tokenize("${x}\n");
        let contexts = ContextBuilder::with_all().build(&output);
        let json: Value =
            serde_json::from_str(&JsonFormatter.serialize_contexts(&contexts).unwrap()).unwrap();
        let element = &json["elements"][0];
        assert_eq!(element["kind"], "aggregated_one_line");
        assert_eq!(element["line_number"], 1);
        let context = &element["contexts"][0];
        assert_eq!(context["context_type"], "SCALAR_VARIABLE");
        assert_eq!(context["parent"], 0);
        assert_eq!(context["tokens"].as_array().unwrap().len(), 4);
    }
}
