//! Pipeline executor that runs recognition profiles

use crate::robot::context::{ContextBuilder, ContextOutput};
use crate::robot::formats::{FormatError, FormatRegistry};
use crate::robot::lexing::{tokenize, TokenOutput};
use crate::robot::pipeline::config::{ConfigError, ConfigRegistry, RecognitionProfile};
use thiserror::Error;
use tracing::debug;

/// Errors during pipeline execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Config '{0}' not found")]
    ConfigNotFound(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Output from pipeline execution
///
/// Owns the token stream; contexts borrow it, so they are built on request.
#[derive(Debug)]
pub struct ExecutionOutput {
    profile: RecognitionProfile,
    tokens: TokenOutput,
}

impl ExecutionOutput {
    pub fn profile(&self) -> &RecognitionProfile {
        &self.profile
    }

    pub fn tokens(&self) -> &TokenOutput {
        &self.tokens
    }

    /// Run the profile's recognizers over the tokens
    pub fn contexts(&self) -> ContextOutput<'_> {
        ContextBuilder::from_kinds(&self.profile.recognizers).build(&self.tokens)
    }
}

/// Executes recognition profiles
pub struct PipelineExecutor {
    registry: ConfigRegistry,
    formats: FormatRegistry,
}

impl PipelineExecutor {
    /// Create executor with default profiles and formats
    pub fn new() -> Self {
        Self::with_registry(ConfigRegistry::with_defaults())
    }

    /// Create executor with custom registry
    pub fn with_registry(registry: ConfigRegistry) -> Self {
        Self {
            registry,
            formats: FormatRegistry::with_defaults(),
        }
    }

    /// Look up a profile by name
    pub fn profile(&self, config_name: &str) -> Result<&RecognitionProfile, ExecutionError> {
        self.registry
            .get(config_name)
            .ok_or_else(|| ExecutionError::ConfigNotFound(config_name.to_string()))
    }

    /// Execute a named configuration
    pub fn execute(&self, config_name: &str, source: &str) -> Result<ExecutionOutput, ExecutionError> {
        let profile = self.profile(config_name)?.clone();
        Ok(self.execute_profile(profile, source))
    }

    /// Execute a profile that is not (necessarily) registered
    pub fn execute_profile(&self, profile: RecognitionProfile, source: &str) -> ExecutionOutput {
        debug!(
            "executing profile '{}' with {} recognizers",
            profile.name,
            profile.recognizers.len()
        );
        ExecutionOutput {
            profile,
            tokens: tokenize(source),
        }
    }

    /// Execute a named configuration and serialize its contexts
    pub fn execute_and_serialize(
        &self,
        config_name: &str,
        source: &str,
        format: &str,
    ) -> Result<String, ExecutionError> {
        let output = self.execute(config_name, source)?;
        Ok(self.formats.serialize_contexts(&output.contexts(), format)?)
    }

    /// Execute a loaded profile and serialize its contexts
    pub fn execute_profile_and_serialize(
        &self,
        profile: RecognitionProfile,
        source: &str,
        format: &str,
    ) -> Result<String, ExecutionError> {
        let output = self.execute_profile(profile, source);
        Ok(self.formats.serialize_contexts(&output.contexts(), format)?)
    }

    /// Tokenize only and serialize the token stream
    pub fn tokens_and_serialize(&self, source: &str, format: &str) -> Result<String, ExecutionError> {
        let tokens = tokenize(source);
        Ok(self.formats.serialize_tokens(&tokens, format)?)
    }

    /// List all available configurations
    pub fn list_configs(&self) -> Vec<&RecognitionProfile> {
        self.registry.list_all()
    }

    /// List all available output formats
    pub fn list_formats(&self) -> Vec<String> {
        self.formats.list_formats()
    }

    /// Get the registry
    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    /// Get the format registry
    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::context::ContextType;
    use crate::robot::recognizers::RecognizerKind;

    #[test]
    fn test_executor_creation() {
        let executor = PipelineExecutor::new();
        assert!(!executor.list_configs().is_empty());
        assert_eq!(executor.list_formats(), vec!["json", "text", "yaml"]);
    }

    #[test]
    fn test_execute_default_config() {
        let executor = PipelineExecutor::default();
        let output = executor.execute("default", "*** Variables ***\n${X}  1\n").unwrap();
        assert_eq!(output.profile().name, "default");
        assert_eq!(output.tokens().lines().len(), 2);

        let contexts = output.contexts();
        let types: Vec<_> = contexts.contexts().map(|c| c.context_type()).collect();
        assert_eq!(
            types,
            vec![
                ContextType::VariableTableHeader,
                ContextType::ScalarVariable,
                ContextType::DoubleSpaceOrTabulatorSeparated,
            ]
        );
    }

    #[test]
    fn test_execute_narrow_profile() {
        let executor = PipelineExecutor::new();
        let output = executor.execute("headers", "*** Keywords ***\nLog  ${x}\n").unwrap();
        let contexts = output.contexts();
        assert_eq!(contexts.len(), 1);
        assert_eq!(
            contexts.contexts().next().unwrap().context_type(),
            ContextType::KeywordTableHeader
        );
    }

    #[test]
    fn test_execute_nonexistent_config() {
        let executor = PipelineExecutor::new();
        match executor.execute("nonexistent", "Hello") {
            Err(ExecutionError::ConfigNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_and_serialize_unknown_format() {
        let executor = PipelineExecutor::new();
        let result = executor.execute_and_serialize("default", "a", "xml");
        assert!(matches!(
            result,
            Err(ExecutionError::Format(FormatError::FormatNotFound(_)))
        ));
    }

    #[test]
    fn test_execute_custom_profile() {
        let executor = PipelineExecutor::new();
        let profile = RecognitionProfile::new("quotes", "", vec![RecognizerKind::QuotesSentence]);
        let text = executor
            .execute_profile_and_serialize(profile, "Log  \"hi\"\n", "text")
            .unwrap();
        assert_eq!(text, "line 1\n  1:6 QUOTES_SENTENCE \"\\\"hi\\\"\"\n");
    }

    #[test]
    fn test_tokens_and_serialize() {
        let executor = PipelineExecutor::new();
        let text = executor.tokens_and_serialize("a b", "text").unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_with_custom_registry() {
        let mut registry = ConfigRegistry::new();
        registry.register(RecognitionProfile::new("custom", "Custom", vec![]));

        let executor = PipelineExecutor::with_registry(registry);
        assert!(executor.registry().has("custom"));
        assert!(!executor.registry().has("default"));
        assert!(executor.execute("custom", "*** Settings ***").unwrap().contexts().is_empty());
    }

    #[test]
    fn test_execution_error_display() {
        let err = ExecutionError::ConfigNotFound("test".into());
        assert_eq!(format!("{}", err), "Config 'test' not found");

        let err = ExecutionError::from(FormatError::FormatNotFound("xml".into()));
        assert_eq!(format!("{}", err), "Format 'xml' not found");
    }
}
