//! Error types for card and deck operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// A joker was given a rank other than 0.
    #[error("joker rank must be 0, got {rank}")]
    JokerRank {
        /// The rejected rank.
        rank: u8,
    },
    /// A normal card was given a rank outside 1..=13.
    #[error("rank out of range: {rank} is not in 1..=13")]
    RankOutOfRange {
        /// The rejected rank.
        rank: u8,
    },
    /// The suit name is not a known suit.
    #[error("unknown suit")]
    UnknownSuit,
}

/// Errors that can occur when dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No undealt cards are left.
    #[error("cannot deal from an empty deck")]
    EmptyDeck,
}

/// Errors that can occur when discarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The card is not currently in play.
    #[error("{0} is not in play")]
    NotInPlay(Card),
}
