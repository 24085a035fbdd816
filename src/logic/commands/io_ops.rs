use std::fs;

use super::{
    ensure_no_slideshow,
    CommandResult,
};
use crate::{
    core::{
        messages,
        CommandError,
    },
    model::Model,
    storage::csv,
};

/// Imports the rows of a CSV file from the data folder. The file is parsed
/// as a whole before any card is added, so a malformed header or row leaves
/// the model untouched. Rows already present by value are skipped.
pub fn import(model: &mut Model, file_name: &str) -> Result<CommandResult, CommandError> {
    ensure_no_slideshow(model)?;

    let path = model.data_dir().join(file_name);
    if !path.exists() {
        return Err(CommandError::FileNotFound(file_name.to_string()));
    }

    let imported = csv::read_flashcards(&path, file_name)?;

    let mut updated = false;
    for card in imported {
        if !model.has_card(&card) {
            model.add_card(card);
            updated = true;
        }
    }

    if updated {
        Ok(CommandResult::new(messages::import_success(file_name)))
    } else {
        Ok(CommandResult::new(messages::import_not_updated(file_name)))
    }
}

/// Exports the current filtered view to a CSV file in the data folder.
pub fn export(model: &mut Model, file_name: &str) -> Result<CommandResult, CommandError> {
    ensure_no_slideshow(model)?;

    if fs::create_dir_all(model.data_dir()).is_err() {
        return Err(CommandError::ExportIo(file_name.to_string()));
    }

    let path = model.data_dir().join(file_name);
    let cards = model.filtered_cards();
    csv::write_flashcards(&path, file_name, &cards)?;

    Ok(CommandResult::new(messages::export_success(file_name, cards.len())))
}
