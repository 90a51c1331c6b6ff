//! Scrambler configuration types
//!
//! This module defines the minimal configuration needed by the scramble host:
//! which message it "receives" and whether the callback is traced.

use serde::{Deserialize, Serialize};

/// Message received by a default-configured scrambler
pub const DEFAULT_MESSAGE: &str = "the cat in the hat";

/// Configuration for the scramble host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Message handed to the callback
    #[serde(default = "default_message")]
    pub message: String,

    /// Log the message before and after the callback runs
    ///
    /// Only covers the host-side trace in [`Scrambler`](crate::Scrambler).
    /// The built-in C callback logs its own `cb start`/`cb finish` lines at
    /// debug level regardless of this flag.
    #[serde(default = "default_true")]
    pub trace: bool,
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            trace: true,
        }
    }
}

impl ScrambleConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the message to scramble
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Builder method: enable or disable the before/after trace
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }
}
