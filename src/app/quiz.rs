use crate::engine::{AnswerOutcome, QuizEngine};
use crate::models::QuizItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizView {
    Welcome,
    Question,
    Result,
}

/// Presentation state around a [`QuizEngine`]: which option is highlighted,
/// what the last answer revealed, and which view is showing.
pub struct QuizScreen {
    pub view: QuizView,
    engine: QuizEngine,
    selected_option: usize,
    reveal: Option<AnswerOutcome>,
    notice: Option<String>,
    result_scroll: usize,
}

impl QuizScreen {
    pub fn new(engine: QuizEngine) -> Self {
        Self {
            view: QuizView::Welcome,
            engine,
            selected_option: 0,
            reveal: None,
            notice: None,
            result_scroll: 0,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn current_item(&self) -> Option<&QuizItem> {
        self.engine.current_item().item()
    }

    pub fn current_question_number(&self) -> usize {
        self.engine.cursor() + 1
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn reveal(&self) -> Option<&AnswerOutcome> {
        self.reveal.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn start_quiz(&mut self) {
        self.view = QuizView::Question;
    }

    fn option_count(&self) -> usize {
        self.current_item().map_or(0, |item| item.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 && self.reveal.is_none() {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 && self.reveal.is_none() {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn submit_answer(&mut self) {
        match self.engine.select_answer(self.selected_option) {
            Ok(outcome) => {
                self.reveal = Some(outcome);
                self.notice = None;
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    pub fn next(&mut self) {
        let completed = match self.engine.advance() {
            Ok(shown) => shown.is_completed(),
            Err(err) => {
                self.notice = Some(err.to_string());
                return;
            }
        };
        self.enter_current(completed);
    }

    pub fn previous(&mut self) {
        let completed = self.engine.retreat().is_completed();
        self.enter_current(completed);
    }

    pub fn restart(&mut self) {
        self.engine.restart();
        self.enter_current(false);
    }

    fn enter_current(&mut self, completed: bool) {
        self.selected_option = 0;
        self.reveal = None;
        self.notice = None;
        self.result_scroll = 0;
        self.view = if completed {
            QuizView::Result
        } else {
            QuizView::Question
        };
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.engine.total() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizOption;

    fn screen() -> QuizScreen {
        let items = vec![
            QuizItem::new(
                "first",
                vec![
                    QuizOption::new("a", false),
                    QuizOption::new("b", true),
                    QuizOption::new("c", false),
                ],
            ),
            QuizItem::new(
                "second",
                vec![QuizOption::new("x", true), QuizOption::new("y", false)],
            ),
        ];
        QuizScreen::new(QuizEngine::start(items).unwrap())
    }

    #[test]
    fn test_option_cursor_wraps() {
        let mut screen = screen();
        screen.start_quiz();
        screen.select_previous_option();
        assert_eq!(screen.selected_option(), 2);
        screen.select_next_option();
        assert_eq!(screen.selected_option(), 0);
    }

    #[test]
    fn test_full_run_reaches_result() {
        let mut screen = screen();
        screen.start_quiz();
        screen.select_next_option();
        screen.submit_answer();
        assert_eq!(screen.reveal().unwrap().correct_option, 1);

        screen.next();
        assert_eq!(screen.view, QuizView::Question);
        assert_eq!(screen.current_question_number(), 2);
        assert!(screen.reveal().is_none());

        screen.select_next_option();
        screen.submit_answer();
        assert!(!screen.reveal().unwrap().is_correct);
        screen.next();

        assert_eq!(screen.view, QuizView::Result);
        assert_eq!(screen.engine().score(), 1);
        assert_eq!(screen.engine().credited(), &[true, false]);
    }

    #[test]
    fn test_next_without_answer_sets_notice() {
        let mut screen = screen();
        screen.start_quiz();
        screen.next();
        assert_eq!(screen.view, QuizView::Question);
        assert!(screen.notice().unwrap().contains("not been answered"));
    }

    #[test]
    fn test_highlight_locked_after_answer() {
        let mut screen = screen();
        screen.start_quiz();
        screen.submit_answer();
        screen.select_next_option();
        assert_eq!(screen.selected_option(), 0);
    }

    #[test]
    fn test_restart_from_result() {
        let mut screen = screen();
        screen.start_quiz();
        for _ in 0..2 {
            screen.submit_answer();
            screen.next();
        }
        assert_eq!(screen.view, QuizView::Result);

        screen.restart();
        assert_eq!(screen.view, QuizView::Question);
        assert_eq!(screen.current_question_number(), 1);
        assert_eq!(screen.engine().score(), 0);
    }
}
