use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use seedmix_core::MergeSession;

use super::centered_rect;
use crate::tui::app::App;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, frame.area());

    let mut lines: Vec<Line> = app
        .session
        .sources()
        .iter()
        .zip(&app.weight_inputs)
        .enumerate()
        .map(|(index, (path, input))| {
            let focused = index == app.weight_cursor;
            let label = format!("{:<24}", MergeSession::label(path));
            let value = if focused {
                format!("{input}_")
            } else {
                input.clone()
            };
            let style = if focused {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::raw("  "),
                Span::raw(label),
                Span::styled(format!(" {value} "), style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(
        Line::from("Tab/↓ next  ↑ previous  Enter save  Esc cancel")
            .style(Style::default().fg(Color::DarkGray)),
    );

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(" Set Game Weights ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
