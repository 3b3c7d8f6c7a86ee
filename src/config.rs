//! Command line and session settings.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::engine::{DEFAULT_WIN_THRESHOLD, RandomMoves};

#[derive(Parser, Debug)]
#[command(version, about = "Terminal quiz and rock-paper-scissors", long_about = None)]
pub struct Cli {
    /// Directory for log files (defaults to the system temp directory)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Answer a multiple-choice quiz
    Quiz {
        /// JSON file to load the quiz items from
        #[arg(short, long)]
        questions: PathBuf,
    },
    /// Play rock-paper-scissors against the computer
    Rounds {
        /// Rounds a side must win to take the match
        #[arg(long, default_value_t = DEFAULT_WIN_THRESHOLD, value_parser = clap::value_parser!(u32).range(1..))]
        first_to: u32,

        /// Seed for the computer's moves, for reproducible matches
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub questions: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    pub win_threshold: u32,
    pub seed: Option<u64>,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            seed: None,
        }
    }
}

impl RoundSettings {
    pub fn move_source(&self) -> RandomMoves {
        match self.seed {
            Some(seed) => RandomMoves::seeded(seed),
            None => RandomMoves::from_entropy(),
        }
    }
}
