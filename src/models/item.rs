use serde::{Deserialize, Serialize};

/// One candidate answer of a quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    #[serde(default, alias = "correct")]
    pub is_correct: bool,
}

impl QuizOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// A question with its ordered candidate answers.
///
/// A well-formed item has exactly one correct option. Items are only checked
/// when a quiz session starts, so an item built here may still be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    #[serde(alias = "question")]
    pub prompt: String,
    #[serde(alias = "answer", alias = "answers")]
    pub options: Vec<QuizOption>,
}

impl QuizItem {
    pub fn new(prompt: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
        }
    }

    /// Index of the correct option, or `None` unless exactly one is marked.
    pub fn correct_option_index(&self) -> Option<usize> {
        let mut correct = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.is_correct)
            .map(|(index, _)| index);

        match (correct.next(), correct.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.is_correct).count()
    }
}
