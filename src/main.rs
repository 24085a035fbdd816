use eframe::egui;
use lingogo::{
    gui::LingogoApp,
    model::Model,
    storage,
};

fn main() -> eframe::Result {
    let data_dir = storage::default_data_dir();

    let (cards, load_error) = match storage::load_flashcards(&data_dir) {
        Ok(cards) => (cards, None),
        Err(e) => {
            eprintln!("Failed to load saved flashcards: {}", e);
            (Vec::new(), Some(e.to_string()))
        }
    };

    let mut model = Model::new(data_dir);
    model.replace_cards(cards);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 660.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LingoGO!",
        options,
        Box::new(|cc| Ok(Box::new(LingogoApp::new(cc, model, load_error)))),
    )
}
