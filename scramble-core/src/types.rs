//! Core types for the scramble library
//!
//! This module defines the status code shared with C callers, the error type
//! used by the Rust API and the record of one scramble cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for scramble operations
pub type Result<T> = std::result::Result<T, ScrambleError>;

/// Status returned by a message callback
///
/// Layout matches the `Result` enum of `scramble.h`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrambleStatus {
    Success = 0,
    Failure = 1,
}

impl ScrambleStatus {
    /// True if the callback reported success
    pub fn is_success(self) -> bool {
        self == ScrambleStatus::Success
    }
}

impl fmt::Display for ScrambleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrambleStatus::Success => write!(f, "Success"),
            ScrambleStatus::Failure => write!(f, "Failure"),
        }
    }
}

/// Errors that can occur while scrambling a message
#[derive(Debug, thiserror::Error)]
pub enum ScrambleError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Callback failed on message: {0:?}")]
    CallbackFailed(String),

    #[error("Message contains an interior NUL byte at position {0}")]
    InteriorNul(usize),
}

impl From<std::ffi::NulError> for ScrambleError {
    fn from(err: std::ffi::NulError) -> Self {
        ScrambleError::InteriorNul(err.nul_position())
    }
}

/// Outcome of one receive/callback/transmit cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transmission {
    /// Message as received, before the callback ran
    pub received: String,
    /// Message as transmitted, after the callback ran
    pub transmitted: String,
    /// Status reported by the callback
    pub status: ScrambleStatus,
    /// Number of characters the callback changed
    pub swaps: usize,
}

impl Transmission {
    /// Build a transmission record, counting changed characters
    pub fn new(received: String, transmitted: String, status: ScrambleStatus) -> Self {
        let swaps = received
            .bytes()
            .zip(transmitted.bytes())
            .filter(|(before, after)| before != after)
            .count();

        Self {
            received,
            transmitted,
            status,
            swaps,
        }
    }
}
