mod card_ops;
mod io_ops;
mod listing;
mod slideshow_ops;

use crate::{
    core::{
        messages,
        CommandError,
        Flashcard,
        Language,
        Phrase,
    },
    model::Model,
};

/// A follow-up the GUI performs after showing the feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    ShowHelp,
    Exit,
}

/// Feedback of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub action: Option<AppAction>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> CommandResult {
        CommandResult { feedback: feedback.into(), action: None }
    }

    pub fn with_action(feedback: impl Into<String>, action: AppAction) -> CommandResult {
        CommandResult { feedback: feedback.into(), action: Some(action) }
    }
}

/// The partial descriptor of an `edit` command. `None` fields keep the
/// card's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardEdits {
    pub language: Option<Language>,
    pub foreign_phrase: Option<Phrase>,
    pub english_phrase: Option<Phrase>,
}

impl CardEdits {
    pub fn is_empty(&self) -> bool {
        self.language.is_none() && self.foreign_phrase.is_none() && self.english_phrase.is_none()
    }

    /// The edited card, unspecified fields carried over from `card`.
    pub fn applied_to(&self, card: &Flashcard) -> Flashcard {
        Flashcard {
            language: self.language.unwrap_or(card.language),
            foreign_phrase: self.foreign_phrase.clone().unwrap_or_else(|| {
                card.foreign_phrase.clone()
            }),
            english_phrase: self.english_phrase.clone().unwrap_or_else(|| {
                card.english_phrase.clone()
            }),
            flipped: card.flipped,
        }
    }
}

/// Every user action, one variant per command word. Dispatched through a
/// single `execute`; all indices are one-based positions in the current
/// filtered view.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { card: Flashcard },
    Edit { index: usize, edits: CardEdits },
    Delete { index: usize },
    Clear,
    Find { english: Vec<String>, foreign: Vec<String> },
    List { n: Option<i64> },
    Flip { index: usize },
    Import { file_name: String },
    Export { file_name: String },
    Test { range: Option<(usize, usize)> },
    Answer { phrase: Phrase },
    Next,
    Stop,
    Help,
    Exit,
}

impl Command {
    /// Runs the command against the model. A failing command returns the
    /// error without touching model state.
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add { card } => card_ops::add(model, card),
            Command::Edit { index, edits } => card_ops::edit(model, index, &edits),
            Command::Delete { index } => card_ops::delete(model, index),
            Command::Clear => card_ops::clear(model),
            Command::Flip { index } => card_ops::flip(model, index),
            Command::Find { english, foreign } => listing::find(model, english, foreign),
            Command::List { n } => listing::list(model, n),
            Command::Import { file_name } => io_ops::import(model, &file_name),
            Command::Export { file_name } => io_ops::export(model, &file_name),
            Command::Test { range } => slideshow_ops::start(model, range),
            Command::Answer { phrase } => slideshow_ops::answer(model, &phrase),
            Command::Next => slideshow_ops::next(model),
            Command::Stop => slideshow_ops::stop(model),
            Command::Help => {
                Ok(CommandResult::with_action(messages::MESSAGE_HELP_SUCCESS, AppAction::ShowHelp))
            }
            Command::Exit => {
                Ok(CommandResult::with_action(messages::MESSAGE_EXIT_SUCCESS, AppAction::Exit))
            }
        }
    }
}

/// Guard for commands that mutate or refilter the list.
fn ensure_no_slideshow(model: &Model) -> Result<(), CommandError> {
    if model.is_slideshow_active() {
        return Err(CommandError::SlideshowActive);
    }
    Ok(())
}

/// Guard for slideshow-only commands.
fn ensure_slideshow(model: &Model) -> Result<(), CommandError> {
    if !model.is_slideshow_active() {
        return Err(CommandError::NotInSlideshow);
    }
    Ok(())
}

/// Resolves a one-based filtered-view index to a full-list index.
fn resolve_view_index(model: &Model, index: usize) -> Result<usize, CommandError> {
    model.filtered_to_full_index(index - 1).ok_or(CommandError::InvalidCardIndex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testutil::typical_model;

    #[test]
    fn help_and_exit_carry_their_actions() {
        let mut model = typical_model();

        let help = Command::Help.execute(&mut model).unwrap();
        assert_eq!(help.action, Some(AppAction::ShowHelp));
        assert_eq!(help.feedback, messages::MESSAGE_HELP_SUCCESS);

        let exit = Command::Exit.execute(&mut model).unwrap();
        assert_eq!(exit.action, Some(AppAction::Exit));
    }

    #[test]
    fn help_and_exit_work_during_a_slideshow() {
        let mut model = typical_model();
        model.start_slideshow(vec![0]);

        assert!(Command::Help.execute(&mut model).is_ok());
        assert!(Command::Exit.execute(&mut model).is_ok());
    }
}
