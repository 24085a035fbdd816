use rand::seq::index::sample;

use super::{
    ensure_no_slideshow,
    CommandResult,
};
use crate::{
    core::{
        messages,
        CommandError,
    },
    model::{
        CardFilter,
        Model,
    },
};

pub fn find(
    model: &mut Model,
    english: Vec<String>,
    foreign: Vec<String>,
) -> Result<CommandResult, CommandError> {
    ensure_no_slideshow(model)?;

    model.set_filter(CardFilter::keywords(english, foreign));
    Ok(CommandResult::new(messages::listed_overview(model.filtered_indices().len())))
}

/// `list` shows everything; `list n` with `n` in `(0, size]` narrows the view
/// to `n` distinct flashcards drawn uniformly without replacement. Any other
/// `n` falls back to the plain listing.
pub fn list(model: &mut Model, n: Option<i64>) -> Result<CommandResult, CommandError> {
    ensure_no_slideshow(model)?;
    model.set_filter(CardFilter::All);

    let size = model.cards().len();
    let n = match n {
        Some(n) if n > 0 && (n as usize) <= size => n as usize,
        _ => return Ok(CommandResult::new(messages::MESSAGE_LIST_ALL)),
    };

    let picked_indices = sample(model.rng_mut(), size, n);
    let picked = picked_indices.iter().map(|index| model.cards()[index].clone()).collect();
    model.set_filter(CardFilter::Selection(picked));

    Ok(CommandResult::new(messages::list_sampled(model.filtered_indices().len())))
}
