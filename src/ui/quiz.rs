use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::QuizScreen;
use crate::engine::AnswerOutcome;
use crate::models::QuizOption;

pub fn render(frame: &mut Frame, area: Rect, screen: &QuizScreen) {
    let Some(item) = screen.current_item() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], screen);
    render_prompt(frame, chunks[1], screen.current_question_number(), &item.prompt);
    render_options(
        frame,
        chunks[2],
        &item.options,
        screen.selected_option(),
        screen.reveal(),
    );
    render_status(frame, chunks[3], screen);
    render_controls(frame, chunks[4], screen.reveal().is_some());
}

fn render_progress(frame: &mut Frame, area: Rect, screen: &QuizScreen) {
    let engine = screen.engine();
    let progress = format!(
        "score {}  ·  {}/{}",
        engine.score(),
        screen.current_question_number(),
        engine.total()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, number: usize, prompt: &str) {
    let widget = Paragraph::new(format!("{}. {}", number, prompt))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map_or('?', char::from)
}

fn option_style(index: usize, selected: usize, reveal: Option<&AnswerOutcome>) -> (Style, &'static str) {
    match reveal {
        Some(outcome) if index == outcome.correct_option => {
            (Style::default().fg(Color::Green).bold(), "+")
        }
        Some(outcome) if index == outcome.chosen => (Style::default().fg(Color::Red).bold(), "x"),
        Some(_) => (Style::default().fg(Color::DarkGray), " "),
        None if index == selected => (Style::default().fg(Color::Cyan).bold(), ">"),
        None => (Style::default().fg(Color::Gray), " "),
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[QuizOption],
    selected: usize,
    reveal: Option<&AnswerOutcome>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let (style, marker) = option_style(index, selected, reveal);

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, screen: &QuizScreen) {
    let line = if let Some(notice) = screen.notice() {
        Line::from(Span::styled(notice.to_string(), Style::default().fg(Color::Yellow)))
    } else {
        match screen.reveal() {
            Some(outcome) if outcome.is_correct => {
                Line::from(Span::styled("Correct!", Style::default().fg(Color::Green).bold()))
            }
            Some(outcome) => Line::from(Span::styled(
                format!("Wrong, the answer is {}", option_label(outcome.correct_option)),
                Style::default().fg(Color::Red).bold(),
            )),
            None => Line::from(""),
        }
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect, answered: bool) {
    let hint = if answered {
        "n next  ·  p previous  ·  q quit"
    } else {
        "j/k navigate  ·  enter select  ·  p previous  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
