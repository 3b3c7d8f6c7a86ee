//! First-to-N rock-paper-scissors scorer.

use serde::Serialize;

use super::error::{EngineError, Result, ValidationError};
use super::source::MoveSource;
use crate::models::{Move, Outcome, Side};

/// Rounds a side must win to take the match.
pub const DEFAULT_WIN_THRESHOLD: u32 = 3;

/// Everything the presentation layer needs to show one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub round: u32,
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
    pub player_score: u32,
    pub opponent_score: u32,
    pub game_over: bool,
}

impl RoundReport {
    pub fn headline(&self) -> String {
        match self.outcome {
            Outcome::Tie => "It's a tie!".to_string(),
            Outcome::Win => format!(
                "You win this round! {} beats {}",
                self.player_move, self.opponent_move
            ),
            Outcome::Lose => format!(
                "You lose this round! {} beats {}",
                self.opponent_move, self.player_move
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub player_score: u32,
    pub opponent_score: u32,
    pub win_threshold: u32,
    pub rounds_played: u32,
    pub game_over: bool,
}

pub struct RoundGameEngine<S> {
    source: S,
    win_threshold: u32,
    player_score: u32,
    opponent_score: u32,
    rounds_played: u32,
}

impl<S: MoveSource> RoundGameEngine<S> {
    pub fn new(win_threshold: u32, source: S) -> Result<Self> {
        if win_threshold == 0 {
            return Err(ValidationError::ZeroWinThreshold.into());
        }

        tracing::info!(win_threshold, "round game started");

        Ok(Self {
            source,
            win_threshold,
            player_score: 0,
            opponent_score: 0,
            rounds_played: 0,
        })
    }

    /// Play one round against the next opponent move.
    ///
    /// Refused with [`EngineError::GameOver`] once either side has reached the
    /// threshold; the opponent source is not consulted in that case.
    pub fn resolve(&mut self, player_move: Move) -> Result<RoundReport> {
        if self.is_over() {
            tracing::debug!(%player_move, "move refused, game over");
            return Err(EngineError::GameOver {
                player_score: self.player_score,
                opponent_score: self.opponent_score,
            });
        }

        let opponent_move = self.source.next_move();
        let outcome = Outcome::decide(player_move, opponent_move);

        match outcome {
            Outcome::Win => self.player_score += 1,
            Outcome::Lose => self.opponent_score += 1,
            Outcome::Tie => {}
        }
        self.rounds_played += 1;

        let game_over = self.is_over();
        tracing::debug!(
            round = self.rounds_played,
            %player_move,
            %opponent_move,
            ?outcome,
            player_score = self.player_score,
            opponent_score = self.opponent_score,
            "round resolved"
        );
        if let Some(winner) = self.winner() {
            tracing::info!(?winner, rounds = self.rounds_played, "match over");
        }

        Ok(RoundReport {
            round: self.rounds_played,
            player_move,
            opponent_move,
            outcome,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            game_over,
        })
    }

    pub fn reset(&mut self) {
        self.player_score = 0;
        self.opponent_score = 0;
        self.rounds_played = 0;
        tracing::info!(win_threshold = self.win_threshold, "round game reset");
    }
}

impl<S> RoundGameEngine<S> {
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        if self.player_score >= self.win_threshold {
            Some(Side::Player)
        } else if self.opponent_score >= self.win_threshold {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            win_threshold: self.win_threshold,
            rounds_played: self.rounds_played,
            game_over: self.is_over(),
        }
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn opponent_score(&self) -> u32 {
        self.opponent_score
    }

    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptedMoves;

    fn scripted(threshold: u32, moves: &[Move]) -> RoundGameEngine<ScriptedMoves> {
        RoundGameEngine::new(threshold, ScriptedMoves::new(moves.to_vec()).unwrap()).unwrap()
    }

    #[test]
    fn test_scripted_sequence() {
        let mut game = scripted(3, &[Move::Rock, Move::Rock, Move::Paper]);

        let outcomes: Vec<Outcome> = [Move::Paper, Move::Scissors, Move::Rock]
            .into_iter()
            .map(|m| game.resolve(m).unwrap().outcome)
            .collect();

        assert_eq!(outcomes, vec![Outcome::Win, Outcome::Lose, Outcome::Lose]);
        assert_eq!(game.player_score(), 1);
        assert_eq!(game.opponent_score(), 2);
    }

    #[test]
    fn test_tie_changes_nothing_but_round_count() {
        let mut game = scripted(3, &[Move::Rock]);
        let report = game.resolve(Move::Rock).unwrap();
        assert_eq!(report.outcome, Outcome::Tie);
        assert_eq!((report.player_score, report.opponent_score), (0, 0));
        assert_eq!(report.round, 1);
        assert!(!report.game_over);
    }

    #[test]
    fn test_game_over_refuses_moves_until_reset() {
        let mut game = scripted(2, &[Move::Scissors]);
        assert!(!game.resolve(Move::Rock).unwrap().game_over);
        assert!(game.resolve(Move::Rock).unwrap().game_over);
        assert_eq!(game.winner(), Some(Side::Player));

        let err = game.resolve(Move::Rock).unwrap_err();
        assert_eq!(
            err,
            EngineError::GameOver {
                player_score: 2,
                opponent_score: 0,
            }
        );
        assert_eq!(game.player_score(), 2);

        game.reset();
        assert!(!game.is_over());
        assert!(game.resolve(Move::Rock).is_ok());
    }

    #[test]
    fn test_opponent_can_win() {
        let mut game = scripted(1, &[Move::Paper]);
        let report = game.resolve(Move::Rock).unwrap();
        assert_eq!(report.outcome, Outcome::Lose);
        assert!(report.game_over);
        assert_eq!(game.winner(), Some(Side::Opponent));
    }

    #[test]
    fn test_zero_threshold_is_rejected() {
        let source = ScriptedMoves::new([Move::Rock]).unwrap();
        let err = RoundGameEngine::new(0, source).err().unwrap();
        assert_eq!(err, EngineError::Validation(ValidationError::ZeroWinThreshold));
    }

    #[test]
    fn test_reset_matches_fresh_game() {
        let fresh = scripted(3, &[Move::Rock]);
        let mut game = scripted(3, &[Move::Rock, Move::Scissors]);
        game.resolve(Move::Paper).unwrap();
        game.resolve(Move::Paper).unwrap();

        game.reset();
        assert_eq!(game.snapshot(), fresh.snapshot());
    }

    #[test]
    fn test_headlines() {
        let mut game = scripted(3, &[Move::Rock, Move::Paper, Move::Scissors]);
        assert_eq!(
            game.resolve(Move::Paper).unwrap().headline(),
            "You win this round! paper beats rock"
        );
        assert_eq!(
            game.resolve(Move::Rock).unwrap().headline(),
            "You lose this round! paper beats rock"
        );
        assert_eq!(game.resolve(Move::Scissors).unwrap().headline(), "It's a tie!");
    }
}
