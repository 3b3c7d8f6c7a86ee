//! Errors returned by the quiz and round engines.
//!
//! Every refused operation leaves the engine exactly as it was before the
//! call. Nothing here is fatal to the host; the caller decides how to show it.

use thiserror::Error;

/// Malformed input handed to an engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("quiz needs at least one item")]
    EmptyItemList,

    #[error("item {item} has no options")]
    NoOptions { item: usize },

    #[error("item {item} must have exactly one correct option, found {found}")]
    CorrectOptionCount { item: usize, found: usize },

    #[error("option {option} is out of range, item has {available} options")]
    OptionOutOfRange { option: usize, available: usize },

    #[error("win threshold must be positive")]
    ZeroWinThreshold,

    #[error("scripted move sequence is empty")]
    EmptyScript,
}

/// Operation invoked in a state that forbids it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("item {index} was already answered")]
    AlreadyAnswered { index: usize },

    #[error("item {index} has not been answered yet")]
    NotAnswered { index: usize },

    #[error("quiz is already completed")]
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid state: {0}")]
    InvalidState(#[from] InvalidState),

    #[error("game over at {player_score}-{opponent_score}, reset to play again")]
    GameOver {
        player_score: u32,
        opponent_score: u32,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
