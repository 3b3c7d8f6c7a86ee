mod quiz;
mod result;
mod rounds;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{Activity, App, QuizView};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.activity {
        Activity::Quiz(screen) => match screen.view {
            QuizView::Welcome => welcome::render(frame, area, screen),
            QuizView::Question => quiz::render(frame, area, screen),
            QuizView::Result => result::render(frame, area, screen),
        },
        Activity::Rounds(screen) => rounds::render(frame, area, screen),
    }
}
