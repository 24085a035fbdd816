use eframe::egui;

use super::theme::Theme;

/// Feedback area under the command box: the last command's result message,
/// or its error text in red.
pub struct ResultDisplay {
    text: String,
    is_error: bool,
}

impl ResultDisplay {
    pub fn new() -> ResultDisplay {
        ResultDisplay { text: "Welcome to LingoGO! Type \"help\" to get started.".into(), is_error: false }
    }

    pub fn set_result(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = false;
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = true;
    }

    pub fn show(&self, ui: &mut egui::Ui, theme: &Theme) {
        let color = if self.is_error {
            theme.red(ui.ctx())
        } else {
            ui.style().visuals.widgets.noninteractive.fg_stroke.color
        };

        egui::Frame::group(ui.style()).fill(ui.style().visuals.extreme_bg_color).show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::ScrollArea::vertical().max_height(96.0).show(ui, |ui| {
                ui.label(egui::RichText::new(&self.text).color(color).monospace());
            });
        });
    }
}

impl Default for ResultDisplay {
    fn default() -> Self {
        ResultDisplay::new()
    }
}
