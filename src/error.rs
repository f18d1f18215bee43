//! Error types for preset construction and validation

use thiserror::Error;

use crate::types::Timeframe;

/// Errors raised while building or querying a preset table
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PresetError {
    #[error("unknown timeframe: '{0}'")]
    UnknownTimeframe(String),

    #[error("invalid {kind} code: {code}")]
    InvalidCode { kind: &'static str, code: i32 },

    #[error("duplicate {schema} record for {key}")]
    Duplicate { schema: &'static str, key: String },

    #[error("indicator timeframe {indicator} does not match record key timeframe {key}")]
    TimeframeMismatch { key: Timeframe, indicator: Timeframe },
}

/// Domain violations found in a parameter set
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} ({value}) must be >= 1")]
    NonPositivePeriod { field: &'static str, value: u32 },

    #[error("{field} ({value}) must be >= 0")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} ({value}) must be >= 0")]
    NegativeCode { field: &'static str, value: i32 },

    #[error("legacy record mixes price-limit and trailing fields")]
    MixedLegacyLayout,

    #[error("legacy record has neither price-limit nor trailing fields")]
    MissingLegacyLayout,
}
