//! Container for user-visible result messages. Error text lives on the error
//! enums in [`super::errors`]; everything here is success feedback.

use super::models::{
    Flashcard,
    Phrase,
};

pub const MESSAGE_CLEAR_SUCCESS: &str = "Flashcard app has been cleared!";
pub const MESSAGE_LIST_ALL: &str = "Listed all flashcards";
pub const MESSAGE_NEXT_SUCCESS: &str = "Next flashcard shown!";
pub const MESSAGE_SLIDESHOW_START: &str = "Slideshow started!";
pub const MESSAGE_SLIDESHOW_STOP: &str = "Slideshow stopped!";
pub const MESSAGE_HELP_SUCCESS: &str = "Opened help window.";
pub const MESSAGE_EXIT_SUCCESS: &str = "Exiting LingoGO! as requested ...";

pub fn added(card: &Flashcard) -> String {
    format!("New flashcard added: {card}")
}

pub fn edited(card: &Flashcard) -> String {
    format!("Edited Flashcard: {card}")
}

pub fn deleted(card: &Flashcard) -> String {
    format!("Deleted Flashcard: {card}")
}

pub fn flipped(card: &Flashcard) -> String {
    format!("Flipped Flashcard: {}", card.foreign_phrase)
}

pub fn listed_overview(count: usize) -> String {
    format!("{count} flashcards listed!")
}

pub fn list_sampled(count: usize) -> String {
    format!("Randomly selected {count} flashcard(s) to be listed")
}

pub fn import_success(file_name: &str) -> String {
    format!("LingoGO! has been updated with all the flashcards from {file_name}")
}

pub fn import_not_updated(file_name: &str) -> String {
    format!("LingoGO! already contains all the flashcards you are importing from {file_name}")
}

pub fn export_success(file_name: &str, count: usize) -> String {
    format!("{count} flashcard(s) have been exported to {file_name}")
}

fn answer_comparison(card: &Flashcard, given: &Phrase) -> String {
    format!(
        "Foreign phrase: {}\nExpected answer: {}\nYour answer: {}",
        card.foreign_phrase, card.english_phrase, given
    )
}

pub fn answer_correct(card: &Flashcard, given: &Phrase) -> String {
    format!("Well done! You got it right!\n{}", answer_comparison(card, given))
}

pub fn answer_wrong(card: &Flashcard, given: &Phrase) -> String {
    format!("Oh no! You got it wrong!\n{}", answer_comparison(card, given))
}
