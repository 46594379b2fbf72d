//! Error types for summary evaluation.

use thiserror::Error;

/// Errors encountered while building or feeding a summary engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    #[error("Ordering violation: sim_time {current} s precedes previous {previous} s")]
    OrderingViolation { previous: f64, current: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown summary keyword: {keyword}")]
    UnknownKeyword { keyword: String },

    #[error("Unsupported summary keyword: {keyword} ({reason})")]
    UnsupportedKeyword {
        keyword: String,
        reason: &'static str,
    },

    #[error("Summary already flushed; no further steps accepted")]
    Flushed,

    #[error("Transport error: {message}")]
    Transport { message: String },
}

pub type SummaryResult<T> = Result<T, SummaryError>;

impl From<ws_core::WsError> for SummaryError {
    fn from(e: ws_core::WsError) -> Self {
        match e {
            ws_core::WsError::InvalidArg { what } | ws_core::WsError::NonFinite { what, .. } => {
                SummaryError::InvalidArg { what }
            }
        }
    }
}

impl From<ws_results::ResultsError> for SummaryError {
    fn from(e: ws_results::ResultsError) -> Self {
        SummaryError::Transport {
            message: e.to_string(),
        }
    }
}
