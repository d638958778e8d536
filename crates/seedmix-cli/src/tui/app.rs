use std::collections::BTreeSet;
use std::path::PathBuf;

use seedmix_core::{AddReport, MergeSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EditName,
    AddPath,
    EditWeights,
    SavePath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

pub struct App {
    pub session: MergeSession,
    pub output_name: String,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub status: Option<Status>,

    // Source list state
    pub list_cursor: usize,
    pub selected: BTreeSet<usize>,

    // Single-line prompt (name, path, destination)
    pub input: String,

    // Weight editor state
    pub weight_inputs: Vec<String>,
    pub weight_cursor: usize,
}

impl App {
    pub fn new(session: MergeSession, output_name: Option<String>) -> Self {
        let output_name = output_name.unwrap_or_else(|| session.config().default_name.clone());
        Self {
            session,
            output_name,
            input_mode: InputMode::Normal,
            show_help: false,
            status: None,
            list_cursor: 0,
            selected: BTreeSet::new(),
            input: String::new(),
            weight_inputs: Vec::new(),
            weight_cursor: 0,
        }
    }

    fn info(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            is_error: false,
        });
    }

    fn error(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            is_error: true,
        });
    }

    // Navigation
    pub fn move_down(&mut self) {
        match self.input_mode {
            InputMode::EditWeights => {
                if self.weight_cursor + 1 < self.weight_inputs.len() {
                    self.weight_cursor += 1;
                }
            }
            _ => {
                if self.list_cursor + 1 < self.session.len() {
                    self.list_cursor += 1;
                }
            }
        }
    }

    pub fn move_up(&mut self) {
        match self.input_mode {
            InputMode::EditWeights => self.weight_cursor = self.weight_cursor.saturating_sub(1),
            _ => self.list_cursor = self.list_cursor.saturating_sub(1),
        }
    }

    pub fn toggle_selected(&mut self) {
        if self.session.is_empty() {
            return;
        }
        if !self.selected.remove(&self.list_cursor) {
            self.selected.insert(self.list_cursor);
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // Sources
    pub fn start_add(&mut self) {
        self.input_mode = InputMode::AddPath;
        self.input.clear();
    }

    /// Add every path in `text`, which may hold several (possibly quoted)
    /// paths, as a terminal pastes them when files are dropped on it.
    pub fn add_paths(&mut self, text: &str) {
        let paths = split_dropped_paths(text);
        if paths.is_empty() {
            return;
        }

        let report = self.session.add_sources(paths);
        self.report_added(&report);
    }

    /// Add the path typed into the prompt. Spaces inside it are kept.
    pub fn add_typed_path(&mut self, text: &str) {
        let path = text.trim();
        if path.is_empty() {
            return;
        }

        let report = self.session.add_sources([path]);
        self.report_added(&report);
    }

    fn report_added(&mut self, report: &AddReport) {
        if let Some(first) = report.rejected.first() {
            self.error(format!("Not a YAML file: {}", first.display()));
        } else if report.added.is_empty() {
            self.info("Already in the list");
        } else {
            self.info(format!("Added {} file(s)", report.added.len()));
        }
    }

    pub fn remove_selected(&mut self) {
        let indices: Vec<usize> = if self.selected.is_empty() {
            vec![self.list_cursor]
        } else {
            self.selected.iter().copied().collect()
        };

        let removed = self.session.remove_indices(&indices);
        self.selected.clear();
        if self.list_cursor >= self.session.len() {
            self.list_cursor = self.session.len().saturating_sub(1);
        }
        if !removed.is_empty() {
            self.info(format!("Removed {} file(s)", removed.len()));
        }
    }

    // Output name
    pub fn start_edit_name(&mut self) {
        self.input_mode = InputMode::EditName;
        self.input = self.output_name.clone();
    }

    // Weights
    pub fn start_edit_weights(&mut self) {
        if self.session.is_empty() {
            self.error("No YAML files added.");
            return;
        }
        self.weight_inputs = self
            .session
            .sources()
            .iter()
            .map(|p| self.session.weight_of(p).to_string())
            .collect();
        self.weight_cursor = 0;
        self.input_mode = InputMode::EditWeights;
    }

    /// Save every weight, or none. On error the editor stays open.
    pub fn save_weights(&mut self) {
        let entries: Vec<(PathBuf, String)> = self
            .session
            .sources()
            .iter()
            .cloned()
            .zip(self.weight_inputs.iter().cloned())
            .collect();

        match self.session.set_weights(entries) {
            Ok(()) => {
                self.input_mode = InputMode::Normal;
                self.info("Weights saved");
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    // Generate
    pub fn start_save(&mut self) {
        if self.output_name.trim().is_empty() {
            self.error("YAML name cannot be empty.");
            return;
        }
        if self.session.is_empty() {
            self.error("No YAMLs selected.");
            return;
        }
        self.input = MergeSession::default_destination(&self.output_name)
            .display()
            .to_string();
        self.input_mode = InputMode::SavePath;
    }

    pub fn save(&mut self, destination: &str) {
        let destination = destination.trim();
        if destination.is_empty() {
            return;
        }
        let destination = PathBuf::from(destination);
        match self.session.merge_and_save(&self.output_name, &destination) {
            Ok(combined) => self.info(format!(
                "Random YAML created successfully! {} games written to {}",
                combined.game.len(),
                destination.display()
            )),
            Err(e) => self.error(e.to_string()),
        }
    }

    // Text input, shared by every prompt
    pub fn input_push(&mut self, c: char) {
        match self.input_mode {
            InputMode::EditWeights => {
                if let Some(field) = self.weight_inputs.get_mut(self.weight_cursor) {
                    field.push(c);
                }
            }
            InputMode::Normal => {}
            _ => self.input.push(c),
        }
    }

    pub fn input_backspace(&mut self) {
        match self.input_mode {
            InputMode::EditWeights => {
                if let Some(field) = self.weight_inputs.get_mut(self.weight_cursor) {
                    field.pop();
                }
            }
            InputMode::Normal => {}
            _ => {
                self.input.pop();
            }
        }
    }

    pub fn confirm_input(&mut self) {
        let mode = self.input_mode;
        let input = std::mem::take(&mut self.input);
        match mode {
            InputMode::EditName => {
                self.output_name = input.trim().to_string();
                self.input_mode = InputMode::Normal;
            }
            InputMode::AddPath => {
                self.input_mode = InputMode::Normal;
                self.add_typed_path(&input);
            }
            InputMode::SavePath => {
                self.input_mode = InputMode::Normal;
                self.save(&input);
            }
            InputMode::EditWeights => self.save_weights(),
            InputMode::Normal => {}
        }
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }
}

/// Split pasted text into paths. Quoted paths may contain spaces; unquoted
/// ones end at whitespace.
pub fn split_dropped_paths(text: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in text.chars() {
        match quote {
            Some(q) if c == q => {
                quote = None;
                if !current.is_empty() {
                    paths.push(std::mem::take(&mut current));
                }
            }
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    paths.push(std::mem::take(&mut current));
                }
            }
            None => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(current);
    }
    paths
}
