use eframe::egui::{
    self,
    RichText,
};

use super::theme::Theme;
use crate::model::Model;

/// The quiz view shown while a slideshow is active: the foreign phrase as
/// the prompt, the English phrase revealed once the slide is answered.
pub fn show(ui: &mut egui::Ui, theme: &Theme, model: &Model) {
    let ctx = ui.ctx().clone();
    let (slideshow, card) = match (model.slideshow(), model.current_slide()) {
        (Some(slideshow), Some(card)) => (slideshow, card),
        _ => return,
    };

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(
            RichText::new(format!("Slide {} of {}", slideshow.position() + 1, slideshow.len()))
                .color(theme.comment(&ctx))
                .size(13.0),
        );
        ui.add_space(20.0);

        ui.label(RichText::new(card.language.name()).color(theme.purple(&ctx)).size(16.0));
        ui.add_space(8.0);
        ui.label(RichText::new(card.foreign_phrase.as_str()).size(40.0).strong());
        ui.add_space(24.0);

        if slideshow.is_answered() {
            ui.label(
                RichText::new(card.english_phrase.as_str()).size(26.0).color(theme.green(&ctx)),
            );
            ui.add_space(16.0);
            ui.label(
                RichText::new("next — next slide    stop — end the slideshow")
                    .color(theme.comment(&ctx))
                    .size(12.0),
            );
        } else {
            ui.label(RichText::new("? ? ?").size(26.0).color(theme.comment(&ctx)));
            ui.add_space(16.0);
            ui.label(
                RichText::new("answer e/YOUR_ANSWER — answer this card")
                    .color(theme.comment(&ctx))
                    .size(12.0),
            );
        }
    });
}
