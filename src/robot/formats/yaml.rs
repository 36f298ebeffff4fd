//! YAML format (`serde_yaml`)

use super::registry::{FormatError, Formatter};
use crate::robot::context::ContextOutput;
use crate::robot::lexing::TokenOutput;
use serde::Serialize;

pub struct YamlFormatter;

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    serde_yaml::to_string(value).map_err(|e| FormatError::SerializationError(e.to_string()))
}

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize_tokens(&self, output: &TokenOutput) -> Result<String, FormatError> {
        to_yaml(output)
    }

    fn serialize_contexts(&self, output: &ContextOutput<'_>) -> Result<String, FormatError> {
        to_yaml(output)
    }

    fn description(&self) -> &str {
        "YAML document"
    }
}
