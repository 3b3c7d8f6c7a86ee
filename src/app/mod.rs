mod quiz;
mod rounds;

pub use quiz::{QuizScreen, QuizView};
pub use rounds::{BoxedRoundGame, RoundsScreen};

use crate::engine::QuizEngine;

pub enum Activity {
    Quiz(QuizScreen),
    Rounds(RoundsScreen),
}

pub struct App {
    pub activity: Activity,
}

impl App {
    pub fn quiz(engine: QuizEngine) -> Self {
        Self {
            activity: Activity::Quiz(QuizScreen::new(engine)),
        }
    }

    pub fn rounds(engine: BoxedRoundGame) -> Self {
        Self {
            activity: Activity::Rounds(RoundsScreen::new(engine)),
        }
    }
}
