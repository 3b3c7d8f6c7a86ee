mod item;
mod moves;

pub use item::{QuizItem, QuizOption};
pub use moves::{Move, Outcome, ParseMoveError, Side};
