//! # robolex
//!
//! Tokenizer and context recognizer for Robot Framework plain-text test data.
//!
//! The input is treated as possibly invalid and mid-edit: nothing here fails on bad data.
//! Malformed constructs just produce fewer contexts. See the [robot] module for the pipeline.

pub mod robot;
