//! Configurable recognition pipeline
//!
//! Tokenization is fixed; what varies between runs is which recognizers run afterwards. A
//! [RecognitionProfile](config::RecognitionProfile) names that set, the
//! [ConfigRegistry](config::ConfigRegistry) holds the known profiles, and the
//! [PipelineExecutor](executor::PipelineExecutor) runs one over a source string and hands the
//! result to a formatter.

pub mod config;
pub mod executor;

pub use config::{ConfigError, ConfigRegistry, RecognitionProfile};
pub use executor::{ExecutionError, ExecutionOutput, PipelineExecutor};
