use std::path::Path;

use eframe::egui::{
    self,
    containers,
};
use rfd::FileDialog;

pub enum TopBarAction {
    ImportCsv(String),
    ExportCsv(String),
    OpenHelp,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        data_dir: &Path,
        slideshow_active: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Import CSV…").clicked() {
                        if let Some(file_name) = pick_csv_in_data_dir(data_dir) {
                            action = Some(TopBarAction::ImportCsv(file_name));
                        }
                        ui.close();
                    }
                    if ui.button("Export CSV…").clicked() {
                        if let Some(file_name) = pick_export_name(data_dir) {
                            action = Some(TopBarAction::ExportCsv(file_name));
                        }
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("Command Help").clicked() {
                        action = Some(TopBarAction::OpenHelp);
                        ui.close();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if slideshow_active {
                        ui.small("slideshow");
                        ui.small(egui::RichText::new("●").color(egui::Color32::from_rgb(0, 200, 0)))
                            .on_hover_text("Slideshow mode is active");
                    }
                });
            });
        });

        action
    }
}

/// File picker anchored to the data folder; the import command resolves the
/// name against that folder again.
fn pick_csv_in_data_dir(data_dir: &Path) -> Option<String> {
    let path = FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .set_directory(data_dir)
        .pick_file()?;
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

fn pick_export_name(data_dir: &Path) -> Option<String> {
    let path = FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .set_directory(data_dir)
        .set_file_name("flashcards.csv")
        .save_file()?;
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}
