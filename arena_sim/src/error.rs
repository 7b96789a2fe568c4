//! Errors raised while driving episodes.

use arena_env::ArenaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Arena rejected config or input
    #[error("Arena error: {0}")]
    Arena(#[from] ArenaError),

    /// Rendering or export I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Export serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
