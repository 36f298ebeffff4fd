//! Recognition profiles for robot pipelines
//!
//! A profile names the set of recognizers to run over a file. The registry ships a handful of
//! built-in profiles; more can be registered in code or loaded from a JSON file:
//!
//! ```json
//! {
//!   "name": "vars",
//!   "description": "Variables only",
//!   "recognizers": ["scalar-variable", "list-variable"]
//! }
//! ```

use crate::robot::recognizers::RecognizerKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors while loading a profile
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A named set of recognizers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionProfile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub recognizers: Vec<RecognizerKind>,
}

impl RecognitionProfile {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        recognizers: Vec<RecognizerKind>,
    ) -> Self {
        RecognitionProfile {
            name: name.into(),
            description: description.into(),
            recognizers,
        }
    }

    /// Parse a profile from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a profile from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Registry of recognition profiles
pub struct ConfigRegistry {
    configs: HashMap<String, RecognitionProfile>,
}

impl ConfigRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConfigRegistry {
            configs: HashMap::new(),
        }
    }

    /// Register a profile, replacing any profile with the same name
    pub fn register(&mut self, config: RecognitionProfile) {
        self.configs.insert(config.name.clone(), config);
    }

    /// Get a profile by name
    pub fn get(&self, name: &str) -> Option<&RecognitionProfile> {
        self.configs.get(name)
    }

    /// Check if a profile exists
    pub fn has(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// List all profiles (sorted by name)
    pub fn list_all(&self) -> Vec<&RecognitionProfile> {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    /// Create registry with the built-in profiles
    pub fn with_defaults() -> Self {
        use RecognizerKind::*;
        let mut registry = Self::new();

        registry.register(RecognitionProfile::new(
            "default",
            "Every recognizer",
            RecognizerKind::ALL.to_vec(),
        ));

        registry.register(RecognitionProfile::new(
            "headers",
            "Table headers only",
            vec![
                SettingTableHeader,
                VariableTableHeader,
                TestCaseTableHeader,
                KeywordTableHeader,
                CommentTableHeader,
            ],
        ));

        registry.register(RecognitionProfile::new(
            "variables",
            "Scalar, list, dictionary and environment variables",
            vec![
                ScalarVariable,
                ListVariable,
                DictionaryVariable,
                EnvironmentVariable,
            ],
        ));

        registry.register(RecognitionProfile::new(
            "separators",
            "Cell separators, pretty align, continuation and empty lines",
            vec![Separator, PipeSeparator, Continuation, EmptyLine],
        ));

        registry.register(RecognitionProfile::new(
            "escapes",
            "Character code and letter escapes",
            vec![
                ByteHexValue,
                ShortHexValue,
                LongHexValue,
                LineFeedText,
                CarriageReturnText,
                TabulatorText,
            ],
        ));

        // Everything an editor colors; layout-only contexts are left out
        registry.register(RecognitionProfile::new(
            "highlighting",
            "Every recognizer except separators and empty lines",
            RecognizerKind::ALL
                .into_iter()
                .filter(|kind| !matches!(kind, Separator | PipeSeparator | EmptyLine))
                .collect(),
        ));

        registry
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = ConfigRegistry::new();
        assert!(registry.list_all().is_empty());
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = ConfigRegistry::with_defaults();
        let names: Vec<_> = registry.list_all().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "default",
                "escapes",
                "headers",
                "highlighting",
                "separators",
                "variables"
            ]
        );
        assert_eq!(
            registry.get("default").unwrap().recognizers.len(),
            RecognizerKind::ALL.len()
        );
    }

    #[test]
    fn test_highlighting_leaves_layout_out() {
        let registry = ConfigRegistry::with_defaults();
        let highlighting = &registry.get("highlighting").unwrap().recognizers;
        assert!(!highlighting.contains(&RecognizerKind::Separator));
        assert!(!highlighting.contains(&RecognizerKind::EmptyLine));
        assert!(highlighting.contains(&RecognizerKind::DeclaredComment));
        assert_eq!(highlighting.len(), RecognizerKind::ALL.len() - 3);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ConfigRegistry::new();
        registry.register(RecognitionProfile::new("p", "first", vec![]));
        registry.register(RecognitionProfile::new(
            "p",
            "second",
            vec![RecognizerKind::QuotesSentence],
        ));
        assert!(registry.has("p"));
        assert_eq!(registry.get("p").unwrap().description, "second");
        assert_eq!(registry.list_all().len(), 1);
    }

    #[test]
    fn test_profile_from_json() {
        let profile = RecognitionProfile::from_json(
            r#"{"name": "vars", "recognizers": ["scalar-variable", "list-variable"]}"#,
        )
        .unwrap();
        assert_eq!(profile.name, "vars");
        assert_eq!(profile.description, "");
        assert_eq!(
            profile.recognizers,
            vec![RecognizerKind::ScalarVariable, RecognizerKind::ListVariable]
        );
    }

    #[test]
    fn test_profile_from_json_rejects_unknown_recognizer() {
        let result =
            RecognitionProfile::from_json(r#"{"name": "x", "recognizers": ["no-such-thing"]}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_profile_from_missing_file() {
        let result = RecognitionProfile::from_file("/nonexistent/profile.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
