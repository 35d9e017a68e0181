//! Error types raised by the roster layer.

use score_core::ValidationError;
use thiserror::Error;

/// Errors surfaced by repositories and the roster service.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("character already on the roster: {0}")]
    DuplicateCharacter(String),

    #[error("character not found: {0}")]
    CharacterNotFound(String),

    #[error("invalid stat record: {0}")]
    Validation(#[from] ValidationError),

    #[error("score config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
