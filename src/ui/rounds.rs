use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::RoundsScreen;
use crate::engine::RoundReport;
use crate::models::{Move, Outcome, Side};

pub fn render(frame: &mut Frame, area: Rect, screen: &RoundsScreen) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_scoreboard(frame, chunks[0], screen);
    render_battle(frame, chunks[1], screen.last_round());
    render_message(frame, chunks[2], screen);
    render_history(frame, chunks[3], screen.history());
    render_controls(frame, chunks[4], screen.winner().is_some());
}

fn render_scoreboard(frame: &mut Frame, area: Rect, screen: &RoundsScreen) {
    let snapshot = screen.snapshot();
    let content = vec![
        Line::from(Span::styled(
            format!(
                "You: {} | Computer: {}",
                snapshot.player_score, snapshot.opponent_score
            ),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!("first to {}", snapshot.win_threshold),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn pick_label(pick: Option<Move>) -> String {
    pick.map_or_else(|| "?".to_string(), |m| m.to_string().to_uppercase())
}

fn render_battle(frame: &mut Frame, area: Rect, last: Option<&RoundReport>) {
    let (player_color, opponent_color) = match last.map(|report| report.outcome) {
        Some(Outcome::Win) => (Color::Green, Color::Red),
        Some(Outcome::Lose) => (Color::Red, Color::Green),
        Some(Outcome::Tie) => (Color::Yellow, Color::Yellow),
        None => (Color::Gray, Color::Gray),
    };

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                pick_label(last.map(|report| report.player_move)),
                Style::default().fg(player_color).bold(),
            ),
            Span::styled("   VS   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                pick_label(last.map(|report| report.opponent_move)),
                Style::default().fg(opponent_color).bold(),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_message(frame: &mut Frame, area: Rect, screen: &RoundsScreen) {
    let mut lines = Vec::with_capacity(2);

    if let Some(notice) = screen.notice() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(report) = screen.last_round() {
        lines.push(Line::from(report.headline()));
    }

    match screen.winner() {
        Some(Side::Player) => lines.push(Line::from(Span::styled(
            "You won the game!",
            Style::default().fg(Color::Green).bold(),
        ))),
        Some(Side::Opponent) => lines.push(Line::from(Span::styled(
            "Computer won the game!",
            Style::default().fg(Color::Red).bold(),
        ))),
        None => {}
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_history(frame: &mut Frame, area: Rect, history: &[RoundReport]) {
    let lines: Vec<Line> = history
        .iter()
        .map(|report| {
            let color = match report.outcome {
                Outcome::Win => Color::Green,
                Outcome::Lose => Color::Red,
                Outcome::Tie => Color::Yellow,
            };
            Line::from(vec![
                Span::styled(
                    format!("{:3}. ", report.round),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<8} vs {:<8}", report.player_move, report.opponent_move),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title("recent rounds")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, game_over: bool) {
    let hint = if game_over {
        "enter play again  ·  q quit"
    } else {
        "r rock  ·  p paper  ·  s scissors  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
