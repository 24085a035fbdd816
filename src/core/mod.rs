pub mod errors;
pub mod messages;
pub mod models;

pub use errors::{
    CommandError,
    ParseError,
    StorageError,
};
pub use models::{
    Flashcard,
    Language,
    Phrase,
};
