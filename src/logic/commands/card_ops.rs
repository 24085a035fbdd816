use super::{
    ensure_no_slideshow,
    resolve_view_index,
    CardEdits,
    CommandResult,
};
use crate::{
    core::{
        messages,
        CommandError,
        Flashcard,
    },
    model::{
        CardFilter,
        Model,
    },
};

pub fn add(model: &mut Model, card: Flashcard) -> Result<CommandResult, CommandError> {
    ensure_no_slideshow(model)?;
    if model.has_card(&card) {
        return Err(CommandError::DuplicateFlashcard);
    }

    let feedback = messages::added(&card);
    model.add_card(card);
    model.set_filter(CardFilter::All);
    Ok(CommandResult::new(feedback))
}

pub fn edit(
    model: &mut Model,
    index: usize,
    edits: &CardEdits,
) -> Result<CommandResult, CommandError> {
    ensure_no_slideshow(model)?;
    let full_index = resolve_view_index(model, index)?;

    let target = model.cards()[full_index].clone();
    let edited = edits.applied_to(&target);
    if edited != target && model.has_card(&edited) {
        return Err(CommandError::DuplicateFlashcard);
    }

    let feedback = messages::edited(&edited);
    model.set_card(full_index, edited);
    Ok(CommandResult::new(feedback))
}

pub fn delete(model: &mut Model, index: usize) -> Result<CommandResult, CommandError> {
    ensure_no_slideshow(model)?;
    let full_index = resolve_view_index(model, index)?;

    let removed = model.remove_card(full_index);
    Ok(CommandResult::new(messages::deleted(&removed)))
}

pub fn clear(model: &mut Model) -> Result<CommandResult, CommandError> {
    ensure_no_slideshow(model)?;
    model.clear_cards();
    Ok(CommandResult::new(messages::MESSAGE_CLEAR_SUCCESS))
}

pub fn flip(model: &mut Model, index: usize) -> Result<CommandResult, CommandError> {
    ensure_no_slideshow(model)?;
    let full_index = resolve_view_index(model, index)?;

    let flipped = model.cards()[full_index].flipped_copy();
    let feedback = messages::flipped(&flipped);
    model.set_card(full_index, flipped);
    Ok(CommandResult::new(feedback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::Language,
        model::testutil::{
            card,
            typical_cards,
            typical_model,
        },
    };

    #[test]
    fn add_appends_and_shows_all() {
        let mut model = typical_model();
        model.set_filter(CardFilter::keywords(vec!["hello".into()], vec![]));

        let new_card = card(Language::German, "Guten Tag", "Good day");
        let result = add(&mut model, new_card.clone()).unwrap();

        assert_eq!(result.feedback, messages::added(&new_card));
        assert_eq!(model.cards().len(), 4);
        assert_eq!(model.filter(), &CardFilter::All);
    }

    #[test]
    fn add_rejects_duplicates_by_value() {
        let mut model = typical_model();
        let duplicate = typical_cards()[0].clone();

        assert_eq!(add(&mut model, duplicate), Err(CommandError::DuplicateFlashcard));
        assert_eq!(model.cards().len(), 3);
    }

    #[test]
    fn edit_applies_a_partial_descriptor_in_place() {
        let mut model = typical_model();
        let edits = CardEdits {
            english_phrase: Some(crate::core::Phrase::new("hi").unwrap()),
            ..CardEdits::default()
        };

        let result = edit(&mut model, 1, &edits).unwrap();

        let edited = &model.cards()[0];
        assert_eq!(edited.english_phrase.as_str(), "hi");
        assert_eq!(edited.foreign_phrase.as_str(), "你好");
        assert_eq!(edited.language, Language::Chinese);
        assert_eq!(result.feedback, messages::edited(edited));
    }

    #[test]
    fn edit_addresses_the_filtered_view() {
        let mut model = typical_model();
        // Narrow the view to the two "Good ..." cards; view index 1 is the
        // full list's index 1.
        model.set_filter(CardFilter::keywords(vec!["good".into()], vec![]));

        let edits = CardEdits {
            foreign_phrase: Some(crate::core::Phrase::new("早上好").unwrap()),
            ..CardEdits::default()
        };
        edit(&mut model, 1, &edits).unwrap();
        assert_eq!(model.cards()[1].foreign_phrase.as_str(), "早上好");

        // Index 3 is valid against the full list but not the filtered view
        let out_of_view = CardEdits {
            foreign_phrase: Some(crate::core::Phrase::new("x").unwrap()),
            ..CardEdits::default()
        };
        assert_eq!(edit(&mut model, 3, &out_of_view), Err(CommandError::InvalidCardIndex));
    }

    #[test]
    fn edit_into_an_existing_card_is_a_duplicate() {
        let mut model = typical_model();
        let first = model.cards()[0].clone();
        let edits = CardEdits {
            language: Some(first.language),
            foreign_phrase: Some(first.foreign_phrase.clone()),
            english_phrase: Some(first.english_phrase.clone()),
        };

        assert_eq!(edit(&mut model, 2, &edits), Err(CommandError::DuplicateFlashcard));
        // A no-op edit of the same card is fine
        assert!(edit(&mut model, 1, &edits).is_ok());
    }

    #[test]
    fn delete_bounds_check_uses_the_view_size() {
        let mut model = typical_model();

        assert_eq!(delete(&mut model, 4), Err(CommandError::InvalidCardIndex));
        assert_eq!(model.cards().len(), 3);

        let result = delete(&mut model, 2).unwrap();
        assert!(result.feedback.contains("早安"));
        assert_eq!(model.cards().len(), 2);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut model = typical_model();
        let result = clear(&mut model).unwrap();
        assert_eq!(result.feedback, messages::MESSAGE_CLEAR_SUCCESS);
        assert!(model.cards().is_empty());
    }

    #[test]
    fn flip_toggles_display_direction_only() {
        let mut model = typical_model();
        let result = flip(&mut model, 1).unwrap();

        assert!(model.cards()[0].flipped);
        assert_eq!(result.feedback, messages::flipped(&model.cards()[0]));
        assert_eq!(model.cards().len(), 3);

        flip(&mut model, 1).unwrap();
        assert!(!model.cards()[0].flipped);
    }

    #[test]
    fn mutations_are_guarded_while_a_slideshow_runs() {
        let mut model = typical_model();
        model.start_slideshow(vec![0, 1]);

        let new_card = card(Language::German, "Hallo", "hello there");
        assert_eq!(add(&mut model, new_card), Err(CommandError::SlideshowActive));
        assert_eq!(delete(&mut model, 1), Err(CommandError::SlideshowActive));
        assert_eq!(clear(&mut model), Err(CommandError::SlideshowActive));
        assert_eq!(flip(&mut model, 1), Err(CommandError::SlideshowActive));
        assert_eq!(model.cards().len(), 3);
    }
}
