//! Card types and deck constants.

use alloc::borrow::Cow;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Rank reserved for the joker.
pub const JOKER_RANK: u8 = 0;
/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// Ranks of the normal cards, in construction order.
pub const RANKS: core::ops::RangeInclusive<u8> = ACE..=KING;

/// Normal suits, in construction order.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

/// Number of normal cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of jokers in a deck that includes them.
pub const JOKER_COUNT: usize = 2;

/// Card suit.
///
/// [`Suit::Joker`] is the sentinel suit carried only by the joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// The joker's suit.
    Joker,
}

impl Suit {
    /// Returns the lowercase name the suit is stored under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Spades => "spades",
            Self::Clubs => "clubs",
            Self::Joker => "joker",
        }
    }

    /// Returns the title-case name used for display.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Parses a suit name, ignoring case.
    ///
    /// ```
    /// use deckrs::Suit;
    ///
    /// assert_eq!("SPADES".parse::<Suit>(), Ok(Suit::Spades));
    /// assert!("spadess".parse::<Suit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Hearts,
            Self::Diamonds,
            Self::Spades,
            Self::Clubs,
            Self::Joker,
        ]
        .into_iter()
        .find(|suit| suit.as_str().eq_ignore_ascii_case(s))
        .ok_or(CardError::UnknownSuit)
    }
}

/// A playing card or a joker.
///
/// Cards are validated at construction and never change afterwards. Two cards
/// are equal when their rank and suit match.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// The joker.
    pub const JOKER: Self = Self {
        rank: JOKER_RANK,
        suit: Suit::Joker,
    };

    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::JokerRank`] for a joker whose rank is not 0 and
    /// [`CardError::RankOutOfRange`] for a normal card whose rank is outside
    /// 1..=13.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, CardError, Suit};
    ///
    /// let ace = Card::new(1, Suit::Spades).unwrap();
    /// assert_eq!(ace.to_string(), "Ace of Spades");
    /// assert_eq!(Card::new(14, Suit::Spades), Err(CardError::RankOutOfRange { rank: 14 }));
    /// ```
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        match suit {
            Suit::Joker if rank != JOKER_RANK => Err(CardError::JokerRank { rank }),
            Suit::Joker => Ok(Self::JOKER),
            _ if rank < ACE || rank > KING => Err(CardError::RankOutOfRange { rank }),
            _ => Ok(Self { rank, suit }),
        }
    }

    /// Builds a card from a pairing the caller has already validated.
    pub(crate) const fn new_unchecked(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a new card from a case-insensitive suit name.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSuit`] if the name is not one of `hearts`,
    /// `diamonds`, `spades`, `clubs` or `joker`, otherwise the same errors as
    /// [`Card::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Suit};
    ///
    /// let joker = Card::parse(0, "JOKER").unwrap();
    /// assert!(joker.is_joker());
    /// assert_eq!(Card::parse(12, "Hearts").unwrap().suit(), Suit::Hearts);
    /// ```
    pub fn parse(rank: u8, suit: &str) -> Result<Self, CardError> {
        Self::new(rank, suit.parse()?)
    }

    /// Returns the rank (0 for the joker).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether this card is the joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER_RANK && matches!(self.suit, Suit::Joker)
    }

    /// Returns the human-readable rank: `Joker`, `Ace`, `Jack`, `Queen`,
    /// `King`, or the numeral.
    #[must_use]
    pub fn display_name(&self) -> Cow<'static, str> {
        match self.rank {
            JOKER_RANK => Cow::Borrowed("Joker"),
            ACE => Cow::Borrowed("Ace"),
            JACK => Cow::Borrowed("Jack"),
            QUEEN => Cow::Borrowed("Queen"),
            KING => Cow::Borrowed("King"),
            rank => Cow::Owned(rank.to_string()),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            f.write_str("Joker")
        } else {
            write!(f, "{} of {}", self.display_name(), self.suit)
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card(rank={}, suit={})", self.rank, self.suit.as_str())
    }
}
