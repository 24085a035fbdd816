use eframe::egui;

use super::theme::Theme;
use crate::logic::parser::COMMANDS;

/// The help window: one section per command, straight from the command
/// registration table.
pub struct HelpModal {
    open: bool,
}

impl HelpModal {
    pub fn new() -> HelpModal {
        HelpModal { open: false }
    }

    pub fn open_modal(&mut self) {
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("help_modal")).show(ctx, |ui| {
            ui.set_width(560.0);
            ui.heading(theme.heading(ctx, "LingoGO! commands"));
            ui.add_space(6.0);

            egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                for spec in COMMANDS {
                    ui.label(
                        egui::RichText::new(spec.word).color(theme.cyan(ctx)).strong().monospace(),
                    );
                    ui.label(egui::RichText::new(spec.usage).size(12.0));
                    ui.add_space(8.0);
                }
            });

            ui.add_space(8.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }
    }
}

impl Default for HelpModal {
    fn default() -> Self {
        HelpModal::new()
    }
}
