use super::{
    ensure_no_slideshow,
    ensure_slideshow,
    CommandResult,
};
use crate::{
    core::{
        messages,
        CommandError,
        Phrase,
    },
    model::Model,
};

/// Starts a slideshow over the current filtered view, optionally narrowed to
/// a one-based inclusive sub-range of it.
pub fn start(
    model: &mut Model,
    range: Option<(usize, usize)>,
) -> Result<CommandResult, CommandError> {
    ensure_no_slideshow(model)?;

    let view = model.filtered_indices();
    let indices = match range {
        None => view,
        Some((first, second)) => {
            if second > view.len() {
                return Err(CommandError::InvalidCardIndex);
            }
            view[first - 1..second].to_vec()
        }
    };
    if indices.is_empty() {
        return Err(CommandError::EmptySlideshow);
    }

    model.start_slideshow(indices);
    Ok(CommandResult::new(messages::MESSAGE_SLIDESHOW_START))
}

/// Marks the current slide answered and compares the given phrase against the
/// card's English phrase, exact match.
pub fn answer(model: &mut Model, phrase: &Phrase) -> Result<CommandResult, CommandError> {
    ensure_slideshow(model)?;

    let current = {
        let show = model.slideshow().ok_or(CommandError::NotInSlideshow)?;
        if show.is_answered() {
            return Err(CommandError::AlreadyAnswered);
        }
        show.current_index()
    };

    if let Some(show) = model.slideshow_mut() {
        show.mark_answered();
    }

    let card = model.cards().get(current).ok_or(CommandError::InvalidCardIndex)?;
    if card.english_phrase == *phrase {
        Ok(CommandResult::new(messages::answer_correct(card, phrase)))
    } else {
        Ok(CommandResult::new(messages::answer_wrong(card, phrase)))
    }
}

pub fn next(model: &mut Model) -> Result<CommandResult, CommandError> {
    ensure_slideshow(model)?;

    match model.slideshow_mut() {
        Some(show) => {
            if show.advance() {
                Ok(CommandResult::new(messages::MESSAGE_NEXT_SUCCESS))
            } else {
                Err(CommandError::NoNextSlide)
            }
        }
        None => Err(CommandError::NoNextSlide),
    }
}

pub fn stop(model: &mut Model) -> Result<CommandResult, CommandError> {
    ensure_slideshow(model)?;

    model.stop_slideshow();
    Ok(CommandResult::new(messages::MESSAGE_SLIDESHOW_STOP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        testutil::typical_model,
        CardFilter,
    };

    fn phrase(text: &str) -> Phrase {
        Phrase::new(text).unwrap()
    }

    #[test]
    fn start_covers_the_filtered_view() {
        let mut model = typical_model();
        model.set_filter(CardFilter::keywords(vec!["good".into()], vec![]));

        start(&mut model, None).unwrap();
        let show = model.slideshow().unwrap();
        assert_eq!(show.len(), 2);
        assert_eq!(show.current_index(), 1);
    }

    #[test]
    fn start_with_a_range_narrows_the_view() {
        let mut model = typical_model();

        start(&mut model, Some((2, 3))).unwrap();
        let show = model.slideshow().unwrap();
        assert_eq!(show.len(), 2);
        assert_eq!(show.current_index(), 1);

        model.stop_slideshow();
        assert_eq!(start(&mut model, Some((2, 4))), Err(CommandError::InvalidCardIndex));
        assert!(!model.is_slideshow_active());
    }

    #[test]
    fn start_needs_cards_and_no_running_slideshow() {
        let mut model = typical_model();
        model.set_filter(CardFilter::keywords(vec!["zzz".into()], vec![]));
        assert_eq!(start(&mut model, None), Err(CommandError::EmptySlideshow));

        model.set_filter(CardFilter::All);
        start(&mut model, None).unwrap();
        assert_eq!(start(&mut model, None), Err(CommandError::SlideshowActive));
    }

    #[test]
    fn answer_reports_correct_and_wrong_with_the_comparison() {
        let mut model = typical_model();
        start(&mut model, None).unwrap();

        let result = answer(&mut model, &phrase("hello")).unwrap();
        assert!(result.feedback.starts_with("Well done! You got it right!"));
        assert!(result.feedback.contains("Foreign phrase: 你好"));
        assert!(result.feedback.contains("Expected answer: hello"));
        assert!(result.feedback.contains("Your answer: hello"));

        next(&mut model).unwrap();
        let result = answer(&mut model, &phrase("good night")).unwrap();
        assert!(result.feedback.starts_with("Oh no! You got it wrong!"));
        assert!(result.feedback.contains("Expected answer: Good morning"));
        assert!(result.feedback.contains("Your answer: good night"));
    }

    #[test]
    fn answer_is_exact_match() {
        let mut model = typical_model();
        start(&mut model, None).unwrap();

        // Case differs: not a match
        let result = answer(&mut model, &phrase("Hello")).unwrap();
        assert!(result.feedback.starts_with("Oh no!"));
    }

    #[test]
    fn answering_twice_fails_and_changes_nothing() {
        let mut model = typical_model();
        start(&mut model, None).unwrap();

        answer(&mut model, &phrase("hello")).unwrap();
        assert_eq!(
            answer(&mut model, &phrase("hello")),
            Err(CommandError::AlreadyAnswered)
        );

        let show = model.slideshow().unwrap();
        assert!(show.is_answered());
        assert_eq!(show.position(), 0);
    }

    #[test]
    fn next_walks_to_the_end_without_wrapping() {
        let mut model = typical_model();
        start(&mut model, None).unwrap();

        next(&mut model).unwrap();
        next(&mut model).unwrap();
        assert_eq!(next(&mut model), Err(CommandError::NoNextSlide));
        assert_eq!(model.slideshow().unwrap().position(), 2);
    }

    #[test]
    fn slideshow_commands_need_an_active_slideshow() {
        let mut model = typical_model();

        assert_eq!(
            answer(&mut model, &phrase("hello")),
            Err(CommandError::NotInSlideshow)
        );
        assert_eq!(next(&mut model), Err(CommandError::NotInSlideshow));
        assert_eq!(stop(&mut model), Err(CommandError::NotInSlideshow));
    }

    #[test]
    fn stop_returns_to_the_inactive_state() {
        let mut model = typical_model();
        start(&mut model, None).unwrap();

        let result = stop(&mut model).unwrap();
        assert_eq!(result.feedback, messages::MESSAGE_SLIDESHOW_STOP);
        assert!(!model.is_slideshow_active());

        // The full cycle can start again
        start(&mut model, None).unwrap();
        assert!(model.is_slideshow_active());
    }
}
