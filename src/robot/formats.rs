//! Output format implementations for tokens and contexts
//!
//! This module contains the format implementations for serializing:
//! - Token streams (text, json, yaml)
//! - Recognized contexts (text, json, yaml)

pub mod json;
pub mod registry;
pub mod text;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use text::{contexts_to_text, tokens_to_text, TextFormatter};
pub use yaml::YamlFormatter;
