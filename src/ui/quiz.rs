use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], app.current_question_number(), question.text());
    render_options(frame, chunks[2], question.options(), app.selected_option());
    render_notice(frame, chunks[3], app.notice());
    render_controls(frame, chunks[4]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App<'_>) {
    let progress = format!(
        "score {}  ·  {}/{}",
        app.session().score(),
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, number: usize, text: &str) {
    let widget = Paragraph::new(format!("Q{}: {}", number, text))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String], selected: Option<usize>) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = selected == Some(index);
        let style = if is_selected {
            Style::default().fg(Color::Magenta).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(notice) = notice {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k or 1-9 select  ·  enter next  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
