pub mod filter;
pub mod slideshow;

use std::path::{
    Path,
    PathBuf,
};

use rand::{
    rngs::StdRng,
    SeedableRng,
};

pub use filter::CardFilter;
pub use slideshow::Slideshow;

use crate::core::Flashcard;

/// The in-memory application state every command executes against: the full
/// flashcard list, the current display filter, the optional slideshow, the
/// data directory for CSV import/export, and the random source used by
/// `list n` sampling.
pub struct Model {
    cards: Vec<Flashcard>,
    filter: CardFilter,
    slideshow: Option<Slideshow>,
    data_dir: PathBuf,
    rng: StdRng,
}

impl Model {
    pub fn new(data_dir: PathBuf) -> Model {
        Model {
            cards: Vec::new(),
            filter: CardFilter::All,
            slideshow: None,
            data_dir,
            rng: StdRng::from_os_rng(),
        }
    }

    /// A model with a deterministic random source, for reproducible sampling.
    pub fn seeded(data_dir: PathBuf, seed: u64) -> Model {
        Model { rng: StdRng::seed_from_u64(seed), ..Model::new(data_dir) }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn has_card(&self, card: &Flashcard) -> bool {
        self.cards.contains(card)
    }

    pub fn add_card(&mut self, card: Flashcard) {
        self.cards.push(card);
    }

    /// Replaces the card at `full_index`, preserving its list position.
    pub fn set_card(&mut self, full_index: usize, card: Flashcard) {
        self.cards[full_index] = card;
    }

    pub fn remove_card(&mut self, full_index: usize) -> Flashcard {
        self.cards.remove(full_index)
    }

    pub fn clear_cards(&mut self) {
        self.cards.clear();
        self.filter = CardFilter::All;
    }

    pub fn replace_cards(&mut self, cards: Vec<Flashcard>) {
        self.cards = cards;
        self.filter = CardFilter::All;
        self.slideshow = None;
    }

    pub fn filter(&self) -> &CardFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CardFilter) {
        self.filter = filter;
    }

    /// Indices into the full list for the current filtered view, in list
    /// order.
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| self.filter.matches(card))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn filtered_cards(&self) -> Vec<&Flashcard> {
        self.cards.iter().filter(|card| self.filter.matches(card)).collect()
    }

    /// Maps a zero-based index into the filtered view onto the full list.
    pub fn filtered_to_full_index(&self, view_index: usize) -> Option<usize> {
        self.filtered_indices().get(view_index).copied()
    }

    pub fn is_slideshow_active(&self) -> bool {
        self.slideshow.is_some()
    }

    pub fn slideshow(&self) -> Option<&Slideshow> {
        self.slideshow.as_ref()
    }

    pub fn slideshow_mut(&mut self) -> Option<&mut Slideshow> {
        self.slideshow.as_mut()
    }

    /// Starts a slideshow over the given full-list indices. The caller
    /// guarantees the indices are non-empty and in bounds.
    pub fn start_slideshow(&mut self, indices: Vec<usize>) {
        self.slideshow = Some(Slideshow::new(indices));
    }

    pub fn stop_slideshow(&mut self) {
        self.slideshow = None;
    }

    /// The card currently on display in an active slideshow.
    pub fn current_slide(&self) -> Option<&Flashcard> {
        let show = self.slideshow.as_ref()?;
        self.cards.get(show.current_index())
    }
}
