//! Checkpoint error types.

use crate::core::StateViolation;
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint was written by an incompatible version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The saved calculator state breaks its invariants
    #[error("Checkpoint holds an invalid state: {}", describe(.0))]
    InvalidState(Vec<StateViolation>),

    /// Reading or writing the session file failed
    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe(violations: &[StateViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
