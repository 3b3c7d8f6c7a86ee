//! Quiz session state machine.
//!
//! A session walks an ordered list of items with a cursor. The cursor equals
//! the item count once the last item has been passed, which is the completed
//! state. Each item contributes at most one point per session: answering it
//! correctly again after stepping back does not score twice, and stepping back
//! never takes a point away.

use serde::Serialize;

use super::error::{InvalidState, Result, ValidationError};
use crate::models::QuizItem;

/// What the presentation layer should show after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented<'a> {
    Item {
        index: usize,
        total: usize,
        item: &'a QuizItem,
        answered: bool,
    },
    Completed {
        score: usize,
        total: usize,
    },
}

impl<'a> Presented<'a> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Presented::Completed { .. })
    }

    pub fn item(&self) -> Option<&'a QuizItem> {
        match *self {
            Presented::Item { item, .. } => Some(item),
            Presented::Completed { .. } => None,
        }
    }
}

/// Returned from [`QuizEngine::select_answer`]; both the chosen and the
/// correct option are always revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub chosen: usize,
    pub is_correct: bool,
    pub correct_option: usize,
    pub score: usize,
}

/// Read-only view of the engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSnapshot {
    pub cursor: usize,
    pub total: usize,
    pub score: usize,
    pub answered_current: bool,
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct QuizEngine {
    items: Vec<QuizItem>,
    correct: Vec<usize>,
    credited: Vec<bool>,
    cursor: usize,
    score: usize,
    answered_current: bool,
}

impl QuizEngine {
    /// Validate `items` and open a session on the first one.
    ///
    /// Fails without creating a session if the list is empty or any item
    /// lacks options or does not mark exactly one option correct.
    pub fn start(items: Vec<QuizItem>) -> Result<Self> {
        let correct = validate_items(&items)?;
        let total = items.len();

        tracing::info!(items = total, "quiz session started");

        Ok(Self {
            items,
            correct,
            credited: vec![false; total],
            cursor: 0,
            score: 0,
            answered_current: false,
        })
    }

    pub fn current_item(&self) -> Presented<'_> {
        match self.items.get(self.cursor) {
            Some(item) => Presented::Item {
                index: self.cursor,
                total: self.items.len(),
                item,
                answered: self.answered_current,
            },
            None => Presented::Completed {
                score: self.score,
                total: self.items.len(),
            },
        }
    }

    pub fn select_answer(&mut self, option: usize) -> Result<AnswerOutcome> {
        if self.is_completed() {
            tracing::debug!(option, "answer refused, quiz completed");
            return Err(InvalidState::Completed.into());
        }
        if self.answered_current {
            tracing::debug!(index = self.cursor, "answer refused, already answered");
            return Err(InvalidState::AlreadyAnswered { index: self.cursor }.into());
        }

        let available = self.items[self.cursor].options.len();
        if option >= available {
            return Err(ValidationError::OptionOutOfRange { option, available }.into());
        }

        let correct_option = self.correct[self.cursor];
        let is_correct = option == correct_option;

        self.answered_current = true;
        if is_correct && !self.credited[self.cursor] {
            self.credited[self.cursor] = true;
            self.score += 1;
        }

        tracing::debug!(
            index = self.cursor,
            option,
            is_correct,
            score = self.score,
            "answer recorded"
        );

        Ok(AnswerOutcome {
            chosen: option,
            is_correct,
            correct_option,
            score: self.score,
        })
    }

    /// Move past the answered item. From the completed state this restarts.
    pub fn advance(&mut self) -> Result<Presented<'_>> {
        if self.is_completed() {
            return Ok(self.restart());
        }
        if !self.answered_current {
            tracing::debug!(index = self.cursor, "advance refused, not answered");
            return Err(InvalidState::NotAnswered { index: self.cursor }.into());
        }

        self.cursor += 1;
        self.answered_current = false;

        if self.is_completed() {
            tracing::info!(score = self.score, total = self.items.len(), "quiz completed");
        } else {
            tracing::debug!(index = self.cursor, "advanced");
        }

        Ok(self.current_item())
    }

    /// Step back one item, unanswered. No-op on the first item; restarts from
    /// the completed state. The score is left as is.
    pub fn retreat(&mut self) -> Presented<'_> {
        if self.is_completed() {
            return self.restart();
        }
        if self.cursor > 0 {
            self.cursor -= 1;
            self.answered_current = false;
            tracing::debug!(index = self.cursor, "retreated");
        }
        self.current_item()
    }

    pub fn restart(&mut self) -> Presented<'_> {
        self.cursor = 0;
        self.score = 0;
        self.answered_current = false;
        self.credited.iter_mut().for_each(|flag| *flag = false);

        tracing::info!(items = self.items.len(), "quiz restarted");
        self.current_item()
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            cursor: self.cursor,
            total: self.items.len(),
            score: self.score,
            answered_current: self.answered_current,
            completed: self.is_completed(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.cursor == self.items.len()
    }

    pub fn is_answered(&self) -> bool {
        self.answered_current
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    /// Which items have contributed a point this session.
    pub fn credited(&self) -> &[bool] {
        &self.credited
    }

    pub fn correct_option(&self, index: usize) -> Option<usize> {
        self.correct.get(index).copied()
    }
}

fn validate_items(items: &[QuizItem]) -> std::result::Result<Vec<usize>, ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::EmptyItemList);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.options.is_empty() {
                return Err(ValidationError::NoOptions { item: index });
            }
            item.correct_option_index()
                .ok_or_else(|| ValidationError::CorrectOptionCount {
                    item: index,
                    found: item.correct_count(),
                })
        })
        .collect()
}
