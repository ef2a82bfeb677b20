//! Error types for rusty-pairs

use thiserror::Error;

/// Raised when raw text cannot be turned into a pair with two non-empty legs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedPairError {
    #[error("Empty delimiter given for pair {input:?}")]
    EmptyDelimiter { input: String },

    #[error("Delimiter {delimiter:?} not found in pair {input:?}")]
    MissingDelimiter { input: String, delimiter: String },

    #[error("Pair {input:?} splits into {parts} parts on {delimiter:?}, expected 2")]
    WrongPartCount {
        input: String,
        delimiter: String,
        parts: usize,
    },

    #[error("Empty index token given for pair {input:?}")]
    EmptyIndex { input: String },

    #[error("Index token {index:?} not found in pair {input:?}")]
    IndexNotFound { input: String, index: String },

    #[error("Pair {input:?} is too short: {len} characters, need at least {min}")]
    TooShort { input: String, len: usize, min: usize },

    #[error("Pair {input:?} has an empty currency")]
    EmptyCurrency { input: String },

    #[error("Delimiter {delimiter:?} occurs inside currency {currency:?}")]
    DelimiterInCurrency { delimiter: String, currency: String },
}

impl MalformedPairError {
    /// The raw text (or offending currency) that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            MalformedPairError::EmptyDelimiter { input }
            | MalformedPairError::MissingDelimiter { input, .. }
            | MalformedPairError::WrongPartCount { input, .. }
            | MalformedPairError::EmptyIndex { input }
            | MalformedPairError::IndexNotFound { input, .. }
            | MalformedPairError::TooShort { input, .. }
            | MalformedPairError::EmptyCurrency { input } => input,
            MalformedPairError::DelimiterInCurrency { currency, .. } => currency,
        }
    }
}

/// Result type alias for pair parsing
pub type Result<T> = std::result::Result<T, MalformedPairError>;
