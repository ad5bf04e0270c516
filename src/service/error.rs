//! Errors at the HTTP boundary and the errors a user gets to see.

use thiserror::Error;

/// Message shown when the arithmetic service cannot be reached.
pub const UNREACHABLE_MESSAGE: &str = "Error connecting to calculator service";

/// Failures talking to the calculator API.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The service answered with an error payload.
    #[error("Service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The service answered with a non-success status and no usable payload.
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// No response: connection refused, DNS failure and the like.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived but its body was not what the API promises.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Why an evaluation did not produce a result.
///
/// This is what the presentation layer shows; either way the calculator
/// has already fallen back to the first operand.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvaluateError {
    /// The service refused the calculation; the message is shown verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The service could not be reached or answered nonsense.
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,
}

impl From<ServiceError> for EvaluateError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Rejected { message, .. } => Self::Rejected(message),
            ServiceError::UnexpectedStatus { .. }
            | ServiceError::Transport(_)
            | ServiceError::Decode(_) => Self::Unreachable,
        }
    }
}
