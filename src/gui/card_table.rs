use eframe::egui::{
    self,
    RichText,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::theme::Theme;
use crate::model::Model;

/// The central flashcard table: the current filtered view, one row per card,
/// honoring each card's flip direction in the phrase columns.
pub fn show(ui: &mut egui::Ui, theme: &Theme, model: &Model) {
    let ctx = ui.ctx().clone();
    let cards = model.filtered_cards();

    if cards.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.label(RichText::new("No flashcards to show").size(28.0).color(theme.cyan(&ctx)));
            ui.add_space(4.0);
            ui.label(
                RichText::new("Add one with:  add l/LANGUAGE f/FOREIGN_PHRASE e/ENGLISH_PHRASE")
                    .size(12.0)
                    .color(theme.comment(&ctx)),
            );
        });
        return;
    }

    ui.horizontal(|ui| {
        ui.heading(theme.heading(&ctx, "Flashcards"));
        ui.label(
            RichText::new(format!("{} shown", cards.len())).color(theme.comment(&ctx)).size(12.0),
        );
    });
    ui.add_space(6.0);

    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

    egui::ScrollArea::vertical().show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(32.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::remainder())
            .column(Column::remainder())
            .header(25.0, |mut header| {
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "#"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Language"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Phrase"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Translation"));
                });
            })
            .body(|body| {
                body.rows(text_height, cards.len(), |mut row| {
                    let card = cards[row.index()];
                    let display_index = row.index() + 1;

                    row.col(|ui| {
                        ui.label(
                            RichText::new(display_index.to_string())
                                .color(theme.comment(ui.ctx())),
                        );
                    });
                    row.col(|ui| {
                        ui.label(card.language.name());
                    });
                    row.col(|ui| {
                        let mut text = RichText::new(card.front().as_str());
                        if card.flipped {
                            text = text.color(theme.orange(ui.ctx()));
                        }
                        ui.strong(text);
                    });
                    row.col(|ui| {
                        ui.label(card.back().as_str());
                    });
                });
            });
    });
}
