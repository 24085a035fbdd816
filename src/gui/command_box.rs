use eframe::egui;

/// The single-line command input. Enter submits, Up/Down recall history.
pub struct CommandBox {
    input: String,
    history: Vec<String>,
    cursor: Option<usize>,
}

impl CommandBox {
    pub fn new() -> CommandBox {
        CommandBox { input: String::new(), history: Vec::new(), cursor: None }
    }

    /// Draws the input line and returns a submitted command, if any.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.input)
                .hint_text("Enter a command (type \"help\" for usage)")
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace),
        );

        if response.has_focus() {
            if ui.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
                self.recall_previous();
            }
            if ui.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
                self.recall_next();
            }
        }

        let mut submitted = None;
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            let line = self.input.trim().to_string();
            if !line.is_empty() {
                self.history.push(line.clone());
                submitted = Some(line);
            }
            self.input.clear();
            self.cursor = None;
            response.request_focus();
        }

        submitted
    }

    fn recall_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next_cursor = match self.cursor {
            None => self.history.len() - 1,
            Some(0) => 0,
            Some(at) => at - 1,
        };
        self.cursor = Some(next_cursor);
        self.input = self.history[next_cursor].clone();
    }

    fn recall_next(&mut self) {
        match self.cursor {
            None => {}
            Some(at) if at + 1 < self.history.len() => {
                self.cursor = Some(at + 1);
                self.input = self.history[at + 1].clone();
            }
            Some(_) => {
                // Walked past the newest entry: back to a blank line
                self.cursor = None;
                self.input.clear();
            }
        }
    }
}

impl Default for CommandBox {
    fn default() -> Self {
        CommandBox::new()
    }
}
