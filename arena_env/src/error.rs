//! Error types for the multi-agent arena.

use thiserror::Error;

/// Errors that can occur when configuring or driving an arena.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// Malformed per-agent input (missing agent, extra keys, unknown action)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Arena configuration rejected (zero-sized grid, zero timestep limit, bad JSON)
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl ArenaError {
    /// Creates an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
