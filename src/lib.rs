//! # quiz-arcade
//!
//! Two small event-driven games for the terminal: a multiple-choice quiz with
//! score tracking and a first-to-N rock-paper-scissors match.
//!
//! The game rules live in [`engine`] as plain synchronous state machines that
//! can be driven without a terminal. [`Arcade`] wraps them in a TUI.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_arcade::{Arcade, ArcadeError};
//!
//! fn main() -> Result<(), ArcadeError> {
//!     // Load quiz items from a JSON file
//!     let arcade = Arcade::quiz_from_json("questions.json")?;
//!
//!     // Run the quiz in the terminal
//!     arcade.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Driving an engine directly:
//!
//! ```rust
//! use quiz_arcade::engine::{RoundGameEngine, ScriptedMoves};
//! use quiz_arcade::models::{Move, Outcome};
//!
//! let source = ScriptedMoves::new([Move::Rock]).unwrap();
//! let mut game = RoundGameEngine::new(3, source).unwrap();
//! let report = game.resolve(Move::Paper).unwrap();
//! assert_eq!(report.outcome, Outcome::Win);
//! assert_eq!(report.player_score, 1);
//! ```

mod app;
pub mod config;
mod data;
pub mod engine;
pub mod logging;
pub mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{Activity, App, BoxedRoundGame, QuizScreen, QuizView, RoundsScreen};
pub use config::{QuizSettings, RoundSettings};
pub use data::{LoadError, load_items_from_json, parse_items};
pub use engine::{EngineError, MoveSource, QuizEngine, RoundGameEngine};
pub use models::{Move, QuizItem, QuizOption};

/// Error type for arcade operations.
#[derive(Debug, Error)]
pub enum ArcadeError {
    #[error("failed to load quiz items: {0}")]
    Load(#[from] LoadError),

    #[error("could not start session: {0}")]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A game session that can be run in the terminal.
pub struct Arcade {
    app: App,
}

impl Arcade {
    /// Start a quiz over already loaded items.
    pub fn quiz(items: Vec<QuizItem>) -> Result<Self, ArcadeError> {
        Ok(Self {
            app: App::quiz(QuizEngine::start(items)?),
        })
    }

    /// Load quiz items from a JSON file and start a quiz over them.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_arcade::Arcade;
    ///
    /// let arcade = Arcade::quiz_from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn quiz_from_json<P: AsRef<Path>>(path: P) -> Result<Self, ArcadeError> {
        let items = load_items_from_json(path)?;
        Self::quiz(items)
    }

    /// Start a rock-paper-scissors match against any move source.
    pub fn rounds<S: MoveSource + 'static>(win_threshold: u32, source: S) -> Result<Self, ArcadeError> {
        let source: Box<dyn MoveSource> = Box::new(source);
        Ok(Self {
            app: App::rounds(RoundGameEngine::new(win_threshold, source)?),
        })
    }

    pub fn from_quiz_settings(settings: &QuizSettings) -> Result<Self, ArcadeError> {
        Self::quiz_from_json(&settings.questions)
    }

    pub fn from_round_settings(settings: &RoundSettings) -> Result<Self, ArcadeError> {
        Self::rounds(settings.win_threshold, settings.move_source())
    }

    /// Take over the terminal and run until the user quits.
    pub fn run(mut self) -> Result<(), ArcadeError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::ArcadeTerminal, app: &mut App) -> Result<(), ArcadeError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                tracing::info!("quit requested");
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return true;
    }

    match &mut app.activity {
        Activity::Quiz(screen) => match screen.view {
            QuizView::Welcome => handle_welcome_input(screen, key),
            QuizView::Question => handle_question_input(screen, key),
            QuizView::Result => handle_result_input(screen, key),
        },
        Activity::Rounds(screen) => handle_rounds_input(screen, key),
    }

    false
}

fn handle_welcome_input(screen: &mut QuizScreen, key: KeyCode) {
    if key == KeyCode::Enter {
        screen.start_quiz();
    }
}

fn handle_question_input(screen: &mut QuizScreen, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => screen.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => screen.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if screen.reveal().is_some() {
                screen.next();
            } else {
                screen.submit_answer();
            }
        }
        KeyCode::Right | KeyCode::Char('n') => screen.next(),
        KeyCode::Left | KeyCode::Char('p') => screen.previous(),
        _ => {}
    }
}

fn handle_result_input(screen: &mut QuizScreen, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => screen.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => screen.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => screen.restart(),
        KeyCode::Left | KeyCode::Char('p') => screen.previous(),
        _ => {}
    }
}

fn handle_rounds_input(screen: &mut RoundsScreen, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => screen.play(Move::Rock),
        KeyCode::Char('p') | KeyCode::Char('P') => screen.play(Move::Paper),
        KeyCode::Char('s') | KeyCode::Char('S') => screen.play(Move::Scissors),
        KeyCode::Enter | KeyCode::Char('a') if screen.winner().is_some() => screen.play_again(),
        _ => {}
    }
}
