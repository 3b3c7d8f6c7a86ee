//! Opponent move sources.
//!
//! The round engine never reaches for a global random generator; it asks the
//! [`MoveSource`] it was built with. Tests and replays use [`ScriptedMoves`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::error::ValidationError;
use crate::models::Move;

pub trait MoveSource {
    fn next_move(&mut self) -> Move;
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

/// Uniform random moves drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomMoves<R = ChaCha8Rng> {
    rng: R,
}

impl RandomMoves<ChaCha8Rng> {
    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomMoves<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomMoves<R> {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}

/// A fixed move sequence that repeats once exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedMoves {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Result<Self, ValidationError> {
        let moves: Vec<Move> = moves.into_iter().collect();
        if moves.is_empty() {
            return Err(ValidationError::EmptyScript);
        }
        Ok(Self { moves, next: 0 })
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        let chosen = self.moves[self.next];
        self.next = (self.next + 1) % self.moves.len();
        chosen
    }
}
