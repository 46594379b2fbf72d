use thiserror::Error;

pub type WsResult<T> = Result<T, WsError>;

/// Argument errors raised by the numeric helpers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WsError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
