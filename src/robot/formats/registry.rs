//! Format registry for token and context serialization
//!
//! This module provides a pluggable registry of output formats. Each format implements the
//! `Formatter` trait and can be registered with `FormatRegistry`.

use crate::robot::context::ContextOutput;
use crate::robot::lexing::TokenOutput;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for output formatters
///
/// A formatter renders both stages of the pipeline: the token stream and the recognized
/// contexts.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "text", "json")
    fn name(&self) -> &str;

    /// Serialize a token stream to this format
    fn serialize_tokens(&self, output: &TokenOutput) -> Result<String, FormatError>;

    /// Serialize recognized contexts to this format
    fn serialize_contexts(&self, output: &ContextOutput<'_>) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of output formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    fn require(&self, format: &str) -> Result<&dyn Formatter, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))
    }

    /// Serialize a token stream using the specified format
    pub fn serialize_tokens(&self, output: &TokenOutput, format: &str) -> Result<String, FormatError> {
        self.require(format)?.serialize_tokens(output)
    }

    /// Serialize contexts using the specified format
    pub fn serialize_contexts(
        &self,
        output: &ContextOutput<'_>,
        format: &str,
    ) -> Result<String, FormatError> {
        self.require(format)?.serialize_contexts(output)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TextFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
