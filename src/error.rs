//! Error type for the parse surface.
//!
//! The analysis engine itself never fails on well-formed input: unknown
//! operation types, dangling edges and cycles all degrade to neutral
//! results. The only fallible operation is deserializing a flow snapshot.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AnalyzerError {
    #[error("Failed to parse flow JSON: {0}")]
    Parse(String),
}
