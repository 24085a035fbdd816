use crate::core::Flashcard;

/// The predicate behind the filtered view. Recomputed projections only; the
/// filter never owns live list state beyond the values a `list n` sample
/// selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFilter {
    /// Show every flashcard.
    All,
    /// Case-insensitive substring search from the `find` command. A card
    /// matches when any English keyword occurs in its English phrase or any
    /// foreign keyword occurs in its foreign phrase.
    Keywords { english: Vec<String>, foreign: Vec<String> },
    /// The explicit selection produced by `list n` random sampling. Matches
    /// by value equality, so a card survives edits to its neighbors.
    Selection(Vec<Flashcard>),
}

impl CardFilter {
    pub fn keywords(english: Vec<String>, foreign: Vec<String>) -> CardFilter {
        CardFilter::Keywords { english, foreign }
    }

    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            CardFilter::All => true,
            CardFilter::Keywords { english, foreign } => {
                english.iter().any(|keyword| card.english_phrase.contains_keyword(keyword))
                    || foreign.iter().any(|keyword| card.foreign_phrase.contains_keyword(keyword))
            }
            CardFilter::Selection(cards) => cards.contains(card),
        }
    }
}

impl Default for CardFilter {
    fn default() -> Self {
        CardFilter::All
    }
}
