pub mod csv;

use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    Flashcard,
    Language,
    Phrase,
    StorageError,
};

const APP_NAME: &str = "lingogo";

pub const FLASHCARDS_FILE: &str = "flashcards.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// The fixed data folder: CSV files are imported from and exported to here,
/// and the JSON state lives here too.
pub fn default_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn save_json<T: Serialize>(dir: &Path, data: &T, filename: &str) -> Result<(), StorageError> {
    let file_path = dir.join(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    dir: &Path,
    filename: &str,
) -> Result<T, StorageError> {
    let file_path = dir.join(filename);
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(
    dir: &Path,
    filename: &str,
) -> T {
    match load_json::<T>(dir, filename) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

/// Raw JSON shape of one saved flashcard. Fields are re-validated on load so
/// a hand-edited file cannot smuggle invalid state into the model.
#[derive(Serialize, Deserialize)]
struct SavedFlashcard {
    language: String,
    foreign_phrase: String,
    english_phrase: String,
}

impl SavedFlashcard {
    fn to_card(&self) -> Result<Flashcard, StorageError> {
        let language = Language::parse(&self.language)
            .ok_or_else(|| StorageError::InvalidCard(self.language.clone()))?;
        let foreign = Phrase::new(&self.foreign_phrase)
            .ok_or_else(|| StorageError::InvalidCard(self.foreign_phrase.clone()))?;
        let english = Phrase::new(&self.english_phrase)
            .ok_or_else(|| StorageError::InvalidCard(self.english_phrase.clone()))?;
        Ok(Flashcard::new(language, foreign, english))
    }
}

pub fn save_flashcards(dir: &Path, cards: &[Flashcard]) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;
    save_json(dir, &cards, FLASHCARDS_FILE)
}

/// Loads the persisted flashcard list. A missing file is an empty list; an
/// entry failing validation and a duplicate entry raise distinct errors.
pub fn load_flashcards(dir: &Path) -> Result<Vec<Flashcard>, StorageError> {
    let file_path = dir.join(FLASHCARDS_FILE);
    if !file_path.exists() {
        return Ok(Vec::new());
    }

    let json = fs::read_to_string(&file_path)?;
    let saved: Vec<SavedFlashcard> = serde_json::from_str(&json)?;

    let mut cards = Vec::with_capacity(saved.len());
    for entry in &saved {
        let card = entry.to_card()?;
        if cards.contains(&card) {
            return Err(StorageError::DuplicateCard);
        }
        cards.push(card);
    }
    Ok(cards)
}
