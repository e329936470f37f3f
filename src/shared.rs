//! A deck behind a single lock.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, DiscardError};
use crate::sync::Mutex;

/// A [`Deck`] that can be shared between threads.
///
/// Every operation holds one exclusive lock for its whole duration. Use
/// [`SharedDeck::with`] when several operations must observe each other
/// without interleaving.
///
/// # Example
///
/// ```
/// use deckrs::{Deck, DeckOptions, SharedDeck};
///
/// let deck = SharedDeck::new(Deck::new(DeckOptions::default(), 7));
/// let card = deck.deal().unwrap();
/// deck.discard([card]).unwrap();
/// assert!(deck.check_integrity());
/// ```
pub struct SharedDeck {
    inner: Mutex<Deck>,
}

impl SharedDeck {
    /// Wraps a deck.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            inner: Mutex::new(deck),
        }
    }

    /// Shuffles the undealt cards.
    pub fn shuffle(&self) {
        self.inner.lock().shuffle();
    }

    /// Deals one card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no undealt cards are left.
    pub fn deal(&self) -> Result<Card, DealError> {
        self.inner.lock().deal()
    }

    /// Deals up to `count` cards, stopping early if the deck runs out.
    pub fn deal_many(&self, count: usize) -> Vec<Card> {
        let mut deck = self.inner.lock();
        (0..count).map_while(|_| deck.deal().ok()).collect()
    }

    /// Discards cards from play, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::NotInPlay`] for the first card not in play.
    /// Cards processed before it stay discarded.
    pub fn discard<I>(&self, cards: I) -> Result<(), DiscardError>
    where
        I: IntoIterator<Item = Card>,
    {
        self.inner.lock().discard(cards)
    }

    /// Returns whether no undealt cards are left.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the number of undealt cards.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Checks that the piles hold exactly one complete deck.
    pub fn check_integrity(&self) -> bool {
        self.inner.lock().check_integrity()
    }

    /// Returns a copy of the deck as it is now.
    pub fn snapshot(&self) -> Deck {
        self.inner.lock().clone()
    }

    /// Runs `f` with exclusive access to the deck.
    pub fn with<R>(&self, f: impl FnOnce(&mut Deck) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Unwraps the deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        self.inner.into_inner()
    }
}

impl From<Deck> for SharedDeck {
    fn from(deck: Deck) -> Self {
        Self::new(deck)
    }
}
