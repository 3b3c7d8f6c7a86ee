//! Synchronous state machines behind the quiz and the round game.
//!
//! Engines own their state outright. Callers feed them one event at a time
//! and render whatever comes back; nothing here touches the terminal.

mod error;
mod quiz;
mod rounds;
mod source;

pub use error::{EngineError, InvalidState, Result, ValidationError};
pub use quiz::{AnswerOutcome, Presented, QuizEngine, QuizSnapshot};
pub use rounds::{DEFAULT_WIN_THRESHOLD, RoundGameEngine, RoundReport, RoundSnapshot};
pub use source::{MoveSource, RandomMoves, ScriptedMoves};
