//! Round game behaviour through the public API.

use proptest::prelude::*;
use quiz_arcade::engine::{EngineError, RandomMoves, RoundGameEngine, ScriptedMoves};
use quiz_arcade::models::{Move, Outcome, Side};

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

fn play(opponent: &[Move], player: &[Move], threshold: u32) -> (Vec<Outcome>, u32, u32) {
    let source = ScriptedMoves::new(opponent.to_vec()).unwrap();
    let mut game = RoundGameEngine::new(threshold, source).unwrap();
    let outcomes = player
        .iter()
        .map(|&m| game.resolve(m).unwrap().outcome)
        .collect();
    (outcomes, game.player_score(), game.opponent_score())
}

#[test]
fn test_scripted_opponent_follows_outcome_rule() {
    // Scissors loses to rock and rock loses to paper.
    let (outcomes, player, opponent) = play(
        &[Move::Rock, Move::Rock, Move::Paper],
        &[Move::Paper, Move::Scissors, Move::Rock],
        3,
    );
    assert_eq!(outcomes, vec![Outcome::Win, Outcome::Lose, Outcome::Lose]);
    assert_eq!((player, opponent), (1, 2));
}

#[test]
fn test_two_wins_then_a_loss() {
    let (outcomes, player, opponent) = play(
        &[Move::Rock, Move::Paper, Move::Paper],
        &[Move::Paper, Move::Scissors, Move::Rock],
        3,
    );
    assert_eq!(outcomes, vec![Outcome::Win, Outcome::Win, Outcome::Lose]);
    assert_eq!((player, opponent), (2, 1));
}

#[test]
fn test_first_to_three() {
    let source = ScriptedMoves::new([Move::Scissors]).unwrap();
    let mut game = RoundGameEngine::new(3, source).unwrap();

    for _ in 0..2 {
        assert!(!game.resolve(Move::Rock).unwrap().game_over);
    }
    let last = game.resolve(Move::Rock).unwrap();
    assert!(last.game_over);
    assert_eq!(game.winner(), Some(Side::Player));
    assert!(matches!(
        game.resolve(Move::Rock),
        Err(EngineError::GameOver { player_score: 3, opponent_score: 0 })
    ));
}

proptest! {
    #[test]
    fn prop_scores_bounded_and_game_over_sticks(
        threshold in 1u32..6,
        seed in any::<u64>(),
        moves in prop::collection::vec(any_move(), 0..80),
    ) {
        let mut game = RoundGameEngine::new(threshold, RandomMoves::seeded(seed)).unwrap();

        for m in moves {
            let before = game.snapshot();
            match game.resolve(m) {
                Ok(report) => {
                    prop_assert!(!before.game_over);
                    prop_assert_eq!(report.outcome, Outcome::decide(m, report.opponent_move));
                    prop_assert_eq!(report.game_over, game.is_over());
                    let gained = (report.player_score - before.player_score)
                        + (report.opponent_score - before.opponent_score);
                    prop_assert_eq!(gained, u32::from(report.outcome != Outcome::Tie));
                }
                Err(err) => {
                    prop_assert!(before.game_over);
                    let is_game_over = matches!(err, EngineError::GameOver { .. });
                    prop_assert!(is_game_over);
                    prop_assert_eq!(game.snapshot(), before);
                }
            }

            let now = game.snapshot();
            prop_assert!(now.player_score <= threshold);
            prop_assert!(now.opponent_score <= threshold);
            prop_assert!(!(now.player_score == threshold && now.opponent_score == threshold));
        }

        game.reset();
        let reset = game.snapshot();
        prop_assert_eq!((reset.player_score, reset.opponent_score, reset.rounds_played), (0, 0, 0));
        prop_assert!(!reset.game_over);
    }

    #[test]
    fn prop_seeded_matches_replay(seed in any::<u64>(), moves in prop::collection::vec(any_move(), 1..20)) {
        let mut a = RoundGameEngine::new(100, RandomMoves::seeded(seed)).unwrap();
        let mut b = RoundGameEngine::new(100, RandomMoves::seeded(seed)).unwrap();
        for m in moves {
            prop_assert_eq!(a.resolve(m).unwrap(), b.resolve(m).unwrap());
        }
    }
}
