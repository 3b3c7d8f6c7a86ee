use crate::engine::{MoveSource, RoundGameEngine, RoundReport, RoundSnapshot};
use crate::models::{Move, Side};

const HISTORY_LEN: usize = 5;

pub type BoxedRoundGame = RoundGameEngine<Box<dyn MoveSource>>;

pub struct RoundsScreen {
    engine: BoxedRoundGame,
    last: Option<RoundReport>,
    history: Vec<RoundReport>,
    notice: Option<String>,
}

impl RoundsScreen {
    pub fn new(engine: BoxedRoundGame) -> Self {
        Self {
            engine,
            last: None,
            history: Vec::with_capacity(HISTORY_LEN),
            notice: None,
        }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.engine.snapshot()
    }

    pub fn winner(&self) -> Option<Side> {
        self.engine.winner()
    }

    pub fn last_round(&self) -> Option<&RoundReport> {
        self.last.as_ref()
    }

    /// Most recent rounds, newest first.
    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn play(&mut self, player_move: Move) {
        match self.engine.resolve(player_move) {
            Ok(report) => {
                self.last = Some(report);
                self.history.insert(0, report);
                self.history.truncate(HISTORY_LEN);
                self.notice = None;
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    pub fn play_again(&mut self) {
        self.engine.reset();
        self.last = None;
        self.history.clear();
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptedMoves;

    fn screen(threshold: u32, script: &[Move]) -> RoundsScreen {
        let source: Box<dyn MoveSource> = Box::new(ScriptedMoves::new(script.to_vec()).unwrap());
        RoundsScreen::new(RoundGameEngine::new(threshold, source).unwrap())
    }

    #[test]
    fn test_play_records_history() {
        let mut screen = screen(10, &[Move::Rock]);
        for _ in 0..7 {
            screen.play(Move::Paper);
        }
        assert_eq!(screen.history().len(), HISTORY_LEN);
        assert_eq!(screen.history()[0].round, 7);
        assert_eq!(screen.last_round().unwrap().player_score, 7);
    }

    #[test]
    fn test_play_after_game_over_sets_notice() {
        let mut screen = screen(1, &[Move::Rock]);
        screen.play(Move::Scissors);
        assert_eq!(screen.winner(), Some(Side::Opponent));

        screen.play(Move::Paper);
        assert!(screen.notice().unwrap().contains("game over"));
        assert_eq!(screen.snapshot().rounds_played, 1);

        screen.play_again();
        assert!(screen.notice().is_none());
        assert!(screen.last_round().is_none());
        assert!(!screen.snapshot().game_over);
    }
}
