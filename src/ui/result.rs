use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::FinalScore;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let Ok(result) = app.final_score() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], result);
    render_question_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: FinalScore) {
    let percentage = result.percentage();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ COMPLETED",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                result.score, result.max_score, percentage
            ),
            Style::default().fg(get_grade_color(percentage)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let bank = app.session().bank();
    let lines: Vec<Line> = app
        .session()
        .outcomes()
        .iter()
        .zip(bank.iter())
        .map(|(outcome, question)| {
            let (symbol, color) = if outcome.correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", outcome.question_index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(question.text()),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.result_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    if text.chars().count() > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
