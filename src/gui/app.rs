use eframe::egui;

use super::{
    card_table,
    command_box::CommandBox,
    error_modal::ErrorModal,
    help_modal::HelpModal,
    result_display::ResultDisplay,
    settings::SettingsData,
    slideshow_panel,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::ParseError,
    logic::{
        parse_command,
        AppAction,
        Command,
    },
    model::Model,
    storage,
};

pub struct LingogoApp {
    model: Model,

    // Configuration
    settings: SettingsData,

    // UI state
    theme: Theme,
    command_box: CommandBox,
    result: ResultDisplay,

    // Modals
    error_modal: ErrorModal,
    help_modal: HelpModal,
}

impl LingogoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        model: Model,
        load_error: Option<String>,
    ) -> LingogoApp {
        let settings =
            storage::load_json_or_default::<SettingsData>(model.data_dir(), storage::SETTINGS_FILE);
        let theme = Theme::dracula();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        cc.egui_ctx.set_zoom_factor(settings.zoom);

        let mut error_modal = ErrorModal::new();
        if let Some(details) = load_error {
            error_modal.show_error(
                "Load Error",
                "Could not load the saved flashcards. Starting with an empty list.",
                Some(details),
            );
        }

        LingogoApp {
            model,
            settings,
            theme,
            command_box: CommandBox::new(),
            result: ResultDisplay::new(),
            error_modal,
            help_modal: HelpModal::new(),
        }
    }

    /// The single dispatch point: both error kinds end up as the result
    /// text, never as a crash.
    fn dispatch(&mut self, ctx: &egui::Context, line: &str) {
        match parse_command(line) {
            Ok(command) => self.run_command(ctx, command),
            Err(e) => self.result.set_error(e.to_string()),
        }
    }

    fn run_command(&mut self, ctx: &egui::Context, command: Command) {
        let persists = matches!(
            command,
            Command::Add { .. }
                | Command::Edit { .. }
                | Command::Delete { .. }
                | Command::Clear
                | Command::Import { .. }
        );

        match command.execute(&mut self.model) {
            Ok(result) => {
                self.result.set_result(result.feedback);
                if persists {
                    self.save_cards();
                }
                match result.action {
                    Some(AppAction::ShowHelp) => self.help_modal.open_modal(),
                    Some(AppAction::Exit) => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    None => {}
                }
            }
            Err(e) => self.result.set_error(e.to_string()),
        }
    }

    fn handle_top_bar_action(&mut self, ctx: &egui::Context, action: TopBarAction) {
        match action {
            TopBarAction::ImportCsv(file_name) => {
                if file_name.ends_with(".csv") {
                    self.run_command(ctx, Command::Import { file_name });
                } else {
                    self.result.set_error(ParseError::InvalidCsvFileName(file_name).to_string());
                }
            }
            TopBarAction::ExportCsv(file_name) => {
                if file_name.ends_with(".csv") {
                    self.run_command(ctx, Command::Export { file_name });
                } else {
                    self.result.set_error(ParseError::InvalidCsvFileName(file_name).to_string());
                }
            }
            TopBarAction::OpenHelp => self.help_modal.open_modal(),
        }
    }

    fn save_cards(&mut self) {
        if let Err(e) = storage::save_flashcards(self.model.data_dir(), self.model.cards()) {
            eprintln!("Failed to save flashcards: {}", e);
            self.error_modal.show_error(
                "Save Error",
                "Could not save the flashcard list.",
                Some(e.to_string()),
            );
        }
    }

    fn save_settings(&self) {
        if let Err(e) =
            storage::save_json(self.model.data_dir(), &self.settings, storage::SETTINGS_FILE)
        {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    /// Keeps the persisted preferences in step with the live context.
    fn sync_preferences(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        let zoom = ctx.zoom_factor();
        if dark_mode != self.settings.dark_mode || zoom != self.settings.zoom {
            self.settings.dark_mode = dark_mode;
            self.settings.zoom = zoom;
            self.save_settings();
        }
    }
}

impl eframe::App for LingogoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) =
            TopBar::show(ctx, self.model.data_dir(), self.model.is_slideshow_active())
        {
            self.handle_top_bar_action(ctx, action);
        }

        let submitted = egui::TopBottomPanel::bottom("command_panel")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                self.result.show(ui, &self.theme);
                ui.add_space(4.0);
                let submitted = self.command_box.show(ui);
                ui.add_space(6.0);
                submitted
            })
            .inner;

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.model.is_slideshow_active() {
                slideshow_panel::show(ui, &self.theme, &self.model);
            } else {
                card_table::show(ui, &self.theme, &self.model);
            }
        });

        if let Some(line) = submitted {
            self.dispatch(ctx, &line);
        }

        self.help_modal.show(ctx, &self.theme);
        self.error_modal.show(ctx);
        self.sync_preferences(ctx);
    }
}
