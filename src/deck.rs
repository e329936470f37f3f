//! The deck and its three piles.

use alloc::vec::Vec;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use log::{debug, info};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, RANKS, SUITS};
use crate::error::{DealError, DiscardError};
use crate::options::DeckOptions;

/// Selects one of the deck's piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pile {
    /// Cards waiting to be dealt.
    Undealt,
    /// Cards that have been dealt and not yet discarded.
    InPlay,
    /// Cards removed from play.
    Discarded,
}

/// A standard deck of playing cards.
///
/// Every card sits in exactly one of three piles. [`Deck::deal`] moves the
/// last undealt card into play and [`Deck::discard`] moves cards from play to
/// the discard pile; nothing ever leaves the discard pile.
///
/// A new deck is ordered: the jokers (if any), then hearts, diamonds, spades
/// and clubs, each from ace to king.
#[derive(Clone)]
pub struct Deck {
    options: DeckOptions,
    undealt: Vec<Card>,
    in_play: Vec<Card>,
    discarded: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new, ordered deck. The seed drives [`Deck::shuffle`].
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default(), 42);
    /// assert_eq!(deck.len(), 54);
    /// assert!(deck.check_integrity());
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        debug!("Creating a new deck (jokers: {})", options.jokers);

        Self {
            options,
            undealt: Self::standard_order(options),
            in_play: Vec::new(),
            discarded: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Rebuilds a deck from explicit piles.
    ///
    /// The piles are taken as given; use [`Deck::check_integrity`] to find out
    /// whether they form a complete deck.
    #[must_use]
    pub fn from_piles(
        options: DeckOptions,
        seed: u64,
        undealt: Vec<Card>,
        in_play: Vec<Card>,
        discarded: Vec<Card>,
    ) -> Self {
        Self {
            options,
            undealt,
            in_play,
            discarded,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the cards of a complete deck in construction order.
    #[must_use]
    pub fn standard_order(options: DeckOptions) -> Vec<Card> {
        let mut cards = Vec::with_capacity(options.expected_total());

        for _ in 0..options.joker_count() {
            cards.push(Card::JOKER);
        }

        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new_unchecked(rank, suit));
            }
        }

        cards
    }

    /// Returns the options this deck was built with.
    #[must_use]
    pub const fn options(&self) -> DeckOptions {
        self.options
    }

    /// Returns whether this deck includes jokers.
    #[must_use]
    pub const fn has_jokers(&self) -> bool {
        self.options.jokers
    }

    /// Randomly reorders the undealt cards. The other piles are untouched.
    pub fn shuffle(&mut self) {
        debug!("Shuffling deck");
        self.undealt.shuffle(&mut self.rng);
    }

    /// Deals the last undealt card and puts it into play.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no undealt cards are left. The deck
    /// is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, DeckOptions, Suit};
    ///
    /// let mut deck = Deck::new(DeckOptions::default().with_jokers(false), 1);
    /// let card = deck.deal().unwrap();
    /// assert_eq!(card, Card::new(13, Suit::Clubs).unwrap());
    /// assert_eq!(deck.in_play(), &[card]);
    /// ```
    pub fn deal(&mut self) -> Result<Card, DealError> {
        debug!("Number of cards left: {}", self.undealt.len());

        let card = self.undealt.pop().ok_or(DealError::EmptyDeck)?;
        self.in_play.push(card);

        info!("Dealing: {card}");
        Ok(card)
    }

    /// Moves cards from play to the discard pile, in the order given.
    ///
    /// For each card the first equal card in play is moved.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::NotInPlay`] for the first card that is not in
    /// play when its turn comes. Cards processed before it stay discarded.
    pub fn discard<I>(&mut self, cards: I) -> Result<(), DiscardError>
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            let index = self
                .in_play
                .iter()
                .position(|c| *c == card)
                .ok_or(DiscardError::NotInPlay(card))?;

            let card = self.in_play.remove(index);
            info!("Discarding: {card}");
            self.discarded.push(card);
        }

        Ok(())
    }

    /// Moves a single card from play to the discard pile.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::NotInPlay`] if the card is not in play.
    pub fn discard_one(&mut self, card: Card) -> Result<(), DiscardError> {
        self.discard([card])
    }

    /// Returns whether no undealt cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undealt.is_empty()
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.undealt.len()
    }

    /// Returns the undealt cards. The last card is dealt next.
    #[must_use]
    pub fn undealt(&self) -> &[Card] {
        &self.undealt
    }

    /// Returns the cards in play, in the order they were dealt.
    #[must_use]
    pub fn in_play(&self) -> &[Card] {
        &self.in_play
    }

    /// Returns the discarded cards, in the order they were discarded.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Returns the cards of the given pile.
    #[must_use]
    pub fn pile(&self, pile: Pile) -> &[Card] {
        match pile {
            Pile::Undealt => &self.undealt,
            Pile::InPlay => &self.in_play,
            Pile::Discarded => &self.discarded,
        }
    }

    /// Returns the number of cards across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.undealt.len() + self.in_play.len() + self.discarded.len()
    }

    /// Returns how many cards a complete deck of this kind holds.
    #[must_use]
    pub const fn expected_total(&self) -> usize {
        self.options.expected_total()
    }

    /// Returns whether nothing has been dealt and the undealt cards are in
    /// construction order.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.in_play.is_empty()
            && self.discarded.is_empty()
            && self.undealt == Self::standard_order(self.options)
    }

    /// Recounts every pile and checks that together they hold exactly one
    /// complete deck.
    ///
    /// Each normal card must appear once. The joker must appear twice if the
    /// deck includes jokers and not at all otherwise.
    #[must_use]
    pub fn check_integrity(&self) -> bool {
        let total = self.total_cards();
        if total != self.expected_total() {
            debug!(
                "Deck holds {total} cards, expected {}",
                self.expected_total()
            );
            return false;
        }

        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in self
            .undealt
            .iter()
            .chain(&self.in_play)
            .chain(&self.discarded)
        {
            *counts.entry(*card).or_insert(0) += 1;
        }

        let mut intact = true;

        let jokers = counts.get(&Card::JOKER).copied().unwrap_or(0);
        if jokers != self.options.joker_count() {
            info!(
                "Something is wrong with the jokers: found {jokers}, expected {}",
                self.options.joker_count()
            );
            intact = false;
        }

        for (card, &count) in &counts {
            if !card.is_joker() && count != 1 {
                info!("Something is wrong with the {card}: found {count}");
                intact = false;
            }
        }

        intact
    }
}

fn write_pile(f: &mut fmt::Formatter<'_>, cards: &[Card], debug: bool) -> fmt::Result {
    f.write_str("[")?;
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        if debug {
            write!(f, "{card:?}")?;
        } else {
            write!(f, "{card}")?;
        }
    }
    f.write_str("]")
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deck(undealt=")?;
        write_pile(f, &self.undealt, true)?;
        f.write_str(", discarded=")?;
        write_pile(f, &self.discarded, true)?;
        f.write_str(", in_play=")?;
        write_pile(f, &self.in_play, true)?;
        f.write_str(")")
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deck(\n\tundealt : ")?;
        write_pile(f, &self.undealt, false)?;
        f.write_str(",\n\tdiscarded : ")?;
        write_pile(f, &self.discarded, false)?;
        f.write_str(",\n\tin_play : ")?;
        write_pile(f, &self.in_play, false)?;
        f.write_str("\n)")
    }
}
