use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::session::QuizSession;

pub fn render(frame: &mut Frame, area: Rect, session: &QuizSession<'_>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "BRAIN CELL",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Questions · IQ Quiz", session.total_questions()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            scoring_summary(session),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn scoring_summary(session: &QuizSession<'_>) -> String {
    format!(
        "{} points per correct answer · {} to win",
        session.award(),
        session.max_score()
    )
}
