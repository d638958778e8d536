pub mod source_list;
pub mod weights;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app::{App, InputMode};

pub fn draw_name(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::EditName;
    let text = if editing {
        format!("{}_", app.input)
    } else {
        app.output_name.clone()
    };

    let border = if editing { Color::Yellow } else { Color::Blue };
    let name = Paragraph::new(text)
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .title(" Generated YAML Name ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );

    frame.render_widget(name, area);
}

pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match (&app.status, app.input_mode) {
        (_, InputMode::EditName) => (
            "Editing name (Enter to confirm, Esc to cancel)".to_string(),
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        (Some(status), _) if status.is_error => (
            status.message.clone(),
            Style::default().fg(Color::White).bg(Color::Red),
        ),
        (Some(status), _) => (
            status.message.clone(),
            Style::default().fg(Color::Black).bg(Color::Green),
        ),
        (None, _) => (
            format!(
                "{} files | a:add d:remove space:select w:weights n:name g:generate ?:help q:quit",
                app.session.len()
            ),
            Style::default().fg(Color::Black).bg(Color::White),
        ),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

pub fn draw_prompt(frame: &mut Frame, title: &str, input: &str) {
    let area = centered_rect(70, 20, frame.area());

    let prompt = Paragraph::new(vec![
        Line::from(format!("{input}_")),
        Line::from(""),
        Line::from("Enter to confirm, Esc to cancel").style(Style::default().fg(Color::DarkGray)),
    ])
    .block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(prompt, area);
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  j / ↓       Move down"),
        Line::from("  k / ↑       Move up"),
        Line::from("  Space       Select / deselect file"),
        Line::from("  a           Add a YAML by path"),
        Line::from("  d / Del     Remove selected files"),
        Line::from("  w           Set weights"),
        Line::from("  n           Edit generated YAML name"),
        Line::from("  g           Generate and save"),
        Line::from("  ?           Toggle this help"),
        Line::from("  q           Quit"),
        Line::from("  Ctrl+C      Force quit"),
        Line::from(""),
        Line::from("Drop files onto the terminal to add them."),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
