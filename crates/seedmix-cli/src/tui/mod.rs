mod app;
mod views;

use std::io;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use seedmix_core::MergeSession;

use app::{App, InputMode};

pub fn run(session: MergeSession, output_name: Option<String>) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut app = App::new(session, output_name);

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        match event::read().map_err(|e| format!("event error: {e}"))? {
            // Files dropped on the terminal arrive as a paste.
            Event::Paste(text) => match app.input_mode {
                InputMode::Normal => app.add_paths(&text),
                InputMode::EditWeights => text.chars().for_each(|c| app.input_push(c)),
                _ => text
                    .chars()
                    .filter(|c| *c != '\n' && *c != '\r')
                    .for_each(|c| app.input_push(c)),
            },
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Ctrl+C always quits
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    return Ok(());
                }

                match app.input_mode {
                    InputMode::Normal => {
                        app.status = None;
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            KeyCode::Char('j') | KeyCode::Down => app.move_down(),
                            KeyCode::Char('k') | KeyCode::Up => app.move_up(),
                            KeyCode::Char(' ') => app.toggle_selected(),
                            KeyCode::Char('a') => app.start_add(),
                            KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
                            KeyCode::Char('n') => app.start_edit_name(),
                            KeyCode::Char('w') => app.start_edit_weights(),
                            KeyCode::Char('g') => app.start_save(),
                            KeyCode::Char('?') => app.toggle_help(),
                            _ => {}
                        }
                    }
                    InputMode::EditWeights => match key.code {
                        KeyCode::Esc => app.cancel_input(),
                        KeyCode::Enter => app.confirm_input(),
                        KeyCode::Down | KeyCode::Tab => app.move_down(),
                        KeyCode::Up | KeyCode::BackTab => app.move_up(),
                        KeyCode::Backspace => app.input_backspace(),
                        KeyCode::Char(c) => app.input_push(c),
                        _ => {}
                    },
                    InputMode::EditName | InputMode::AddPath | InputMode::SavePath => {
                        match key.code {
                            KeyCode::Esc => app.cancel_input(),
                            KeyCode::Enter => app.confirm_input(),
                            KeyCode::Backspace => app.input_backspace(),
                            KeyCode::Char(c) => app.input_push(c),
                            _ => {}
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Output name
            Constraint::Min(0),    // Source list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    views::draw_name(frame, app, chunks[0]);
    views::source_list::draw(frame, app, chunks[1]);
    views::draw_status_bar(frame, app, chunks[2]);

    match app.input_mode {
        InputMode::AddPath => views::draw_prompt(frame, " Add YAML (path) ", &app.input),
        InputMode::SavePath => views::draw_prompt(frame, " Save combined YAML as ", &app.input),
        InputMode::EditWeights => views::weights::draw(frame, app),
        InputMode::Normal | InputMode::EditName => {}
    }

    if app.show_help {
        views::draw_help_popup(frame);
    }
}
