use thiserror::Error;

use super::models::{
    Language,
    Phrase,
};

/// Invalid command syntax. The command was never constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("The index range provided is invalid, exactly 2 indices must be given where the \
             second given index is larger or equal to the first index")]
    InvalidIndexRange,

    #[error("Input n has to be an integer that is greater than 0 but less than the total number \
             of flashcards in the list")]
    InvalidN,

    #[error("Languages should only be one of the supported languages: {}", Language::supported_names())]
    InvalidLanguage,

    #[error("Phrases should not be blank and should be at most {} characters long", Phrase::MAX_LEN)]
    InvalidPhrase,

    #[error("{0} is not a valid CSV file name")]
    InvalidCsvFileName(String),
}

/// Valid syntax, but the command cannot run against the current model state.
/// The failing command leaves the model unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("This command can only be run when slideshow mode is not active!")]
    SlideshowActive,

    #[error("This command can only be run when slideshow mode is active!")]
    NotInSlideshow,

    #[error("This flashcard has already been answered!")]
    AlreadyAnswered,

    #[error("There are no more slides left in the current slideshow!")]
    NoNextSlide,

    #[error("There are no flashcards to show in a slideshow!")]
    EmptySlideshow,

    #[error("The flashcard index provided is invalid")]
    InvalidCardIndex,

    #[error("This flashcard already exists in LingoGO!")]
    DuplicateFlashcard,

    #[error("{0} cannot found in the data folder")]
    FileNotFound(String),

    #[error("The headers in {0} are not in the correct format")]
    InvalidCsvHeaders(String),

    #[error("The flashcards in {0} are not in the correct format")]
    InvalidCsvContent(String),

    #[error("Could not load flashcards from {0} into LingoGO!")]
    ImportIo(String),

    #[error("Could not save flashcards to {0}")]
    ExportIo(String),
}

/// Errors from the JSON persistence layer. An entry that fails validation is
/// reported separately from a duplicate entry.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Flashcard list contains invalid flashcard(s): {0}")]
    InvalidCard(String),

    #[error("Flashcard list contains duplicate flashcard(s)")]
    DuplicateCard,
}
