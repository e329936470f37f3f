//! Deck configuration options.

use crate::card::{DECK_SIZE, JOKER_COUNT};

/// Configuration options for a deck.
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default().with_jokers(false);
/// assert!(!options.jokers);
/// assert_eq!(options.expected_total(), 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Whether the deck includes the two jokers.
    pub jokers: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self { jokers: true }
    }
}

impl DeckOptions {
    /// Sets whether the deck includes jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(true);
    /// assert_eq!(options.jokers, true);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: bool) -> Self {
        self.jokers = jokers;
        self
    }

    /// Returns how many jokers a complete deck holds under these options.
    #[must_use]
    pub const fn joker_count(&self) -> usize {
        if self.jokers { JOKER_COUNT } else { 0 }
    }

    /// Returns how many cards a complete deck holds under these options.
    #[must_use]
    pub const fn expected_total(&self) -> usize {
        DECK_SIZE + self.joker_count()
    }
}
