//! Error types for normscope-core.
//!
//! Missing data is never an error here: an undetected pattern is the
//! `not_detected` convention and an empty tally falls through the resolution
//! chain. Only caller misuse is reported.

use crate::types::{Category, Convention};
use thiserror::Error;

/// Caller errors raised by the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Category name outside the fixed enumeration
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// Metric name outside the fixed enumeration
    #[error("unknown metric: {0:?}")]
    UnknownMetric(String),

    /// Convention label outside every category's enumeration
    #[error("unknown convention: {0:?}")]
    UnknownConvention(String),

    /// Convention label that exists, but not for this category
    #[error("convention {value} is not a {category} value")]
    ConventionOutOfRange { category: Category, value: Convention },
}

/// Result type alias for normscope-core operations.
pub type Result<T> = std::result::Result<T, Error>;
