//! A standard playing-card deck with optional `no_std` support.
//!
//! The crate provides immutable [`Card`] values and a [`Deck`] that tracks
//! every card across three piles: undealt, in play, and discarded. Cards move
//! only by dealing and discarding, and [`Deck::check_integrity`] recounts the
//! piles to confirm that exactly one complete deck is accounted for.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckOptions};
//!
//! let mut deck = Deck::new(DeckOptions::default().with_jokers(false), 42);
//! deck.shuffle();
//!
//! let hand = [deck.deal().unwrap(), deck.deal().unwrap(), deck.deal().unwrap()];
//! deck.discard(hand[..2].iter().copied()).unwrap();
//!
//! assert_eq!(deck.len(), 49);
//! assert!(deck.check_integrity());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKER_COUNT, Suit};
pub use deck::{Deck, Pile};
pub use error::{CardError, DealError, DiscardError};
pub use options::DeckOptions;
pub use shared::SharedDeck;
