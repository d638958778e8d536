use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .sources()
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let marker = if app.selected.contains(&index) {
                "[x] "
            } else {
                "[ ] "
            };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(
                    path.display().to_string(),
                    Style::default().fg(Color::White).bold(),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("weight {}", app.session.weight_of(path)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = if app.selected.is_empty() {
        format!(" YAMLs to Randomize Between ({}) ", app.session.len())
    } else {
        format!(
            " YAMLs to Randomize Between ({}), {} selected ",
            app.session.len(),
            app.selected.len()
        )
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .bold(),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.session.is_empty() {
        state.select(Some(app.list_cursor));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
