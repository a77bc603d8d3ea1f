//! Card identities and per-card play metadata.

use core::fmt;
use core::hash::{Hash, Hasher};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 33;

/// Hand capacity, reserved for a two-deck variant.
pub const MAX_HAND_CARDS: usize = 22;

/// Maximum number of players at a table.
pub const MAX_PLAYERS: usize = 4;

/// Highest round index that fits in the packed flags.
pub const MAX_ROUND_INDEX: u8 = 0x7f;

const ROUND_MASK: u32 = 0x7f;
const PLAYABLE_BIT: u32 = 1 << 7;
const RESERVED_MASK: u32 = !(ROUND_MASK | PLAYABLE_BIT);

/// Card suit.
///
/// The discriminants of the three ordinary suits equal the points each card of
/// that suit is worth when taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum Suit {
    /// Shit, worth -1 per card.
    Shit = -1,
    /// Fried bread stick, worth nothing.
    Stick = 0,
    /// Stuffed bun, worth +1 per card.
    Bun = 1,
    /// The Ghost. Never scored by face value; doubles the round instead.
    Special = 2,
}

impl Suit {
    /// The three ordinary suits, lowest value first.
    pub const ORDINARY: [Self; 3] = [Self::Shit, Self::Stick, Self::Bun];

    /// Returns the raw suit value.
    #[must_use]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Parses a raw suit value.
    #[must_use]
    pub const fn from_value(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Self::Shit),
            0 => Some(Self::Stick),
            1 => Some(Self::Bun),
            2 => Some(Self::Special),
            _ => None,
        }
    }

    /// Returns whether this is the Ghost's suit.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Self::Special)
    }

    /// Points a single card of this suit is worth.
    #[must_use]
    pub const fn face_value(self) -> i32 {
        match self {
            Self::Shit => -1,
            Self::Stick | Self::Special => 0,
            Self::Bun => 1,
        }
    }

    /// Inclusive rank range of this suit.
    #[must_use]
    pub const fn ranks(self) -> (u8, u8) {
        match self {
            Self::Shit => (0, 9),
            Self::Stick | Self::Bun => (0, 10),
            Self::Special => (10, 10),
        }
    }
}

/// Play metadata carried by a card instance.
///
/// Converts to and from the packed 32-bit layout used by other tools:
/// bits 0-6 hold the round index, bit 7 the playable flag, and bits 8-31 are
/// reserved and carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardFlags {
    round_played: u8,
    playable: bool,
    reserved: u32,
}

impl CardFlags {
    /// Decodes packed flags.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            round_played: (bits & ROUND_MASK) as u8,
            playable: bits & PLAYABLE_BIT != 0,
            reserved: bits & RESERVED_MASK,
        }
    }

    /// Encodes the flags into the packed layout.
    #[must_use]
    pub const fn bits(self) -> u32 {
        let playable = if self.playable { PLAYABLE_BIT } else { 0 };
        self.reserved | playable | (self.round_played as u32 & ROUND_MASK)
    }

    /// Round (counting from 1) in which the card was played, 0 if unplayed.
    #[must_use]
    pub const fn round_played(self) -> u8 {
        self.round_played
    }

    /// Whether the card may be played in the current round.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        self.playable
    }

    pub(crate) const fn set_round_played(&mut self, round: u8) {
        self.round_played = if round > MAX_ROUND_INDEX {
            MAX_ROUND_INDEX
        } else {
            round
        };
    }

    pub(crate) const fn set_playable(&mut self, playable: bool) {
        self.playable = playable;
    }
}

/// A playing card.
///
/// Equality and hashing consider the card's identity only; play metadata in
/// [`CardFlags`] is ignored.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// Position in the unshuffled deck, 1..=33. 0 marks an empty slot.
    pub display_order: u8,
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: u8,
    flags: CardFlags,
}

impl Card {
    /// Creates a card with cleared play metadata.
    ///
    /// Note: This function does not validate the combination. Cards that are
    /// not in the card table are rejected by the game as not found.
    #[must_use]
    pub const fn new(display_order: u8, suit: Suit, rank: u8) -> Self {
        Self {
            display_order,
            suit,
            rank,
            flags: CardFlags {
                round_played: 0,
                playable: false,
                reserved: 0,
            },
        }
    }

    /// Returns the same card with the given metadata.
    #[must_use]
    pub const fn with_flags(mut self, flags: CardFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns the play metadata.
    #[must_use]
    pub const fn flags(&self) -> CardFlags {
        self.flags
    }

    /// Whether this is an empty slot rather than a real card.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.display_order == 0
    }

    /// Whether this is the Ghost.
    #[must_use]
    pub const fn is_ghost(&self) -> bool {
        self.suit.is_special()
    }

    /// Whether the card may be played in the current round.
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.flags.is_playable()
    }

    /// Round in which the card was played, 0 if it has not been played.
    #[must_use]
    pub const fn round_played(&self) -> u8 {
        self.flags.round_played()
    }

    /// Points this card contributes to the board.
    #[must_use]
    pub const fn face_value(&self) -> i32 {
        self.suit.face_value()
    }

    pub(crate) const fn flags_mut(&mut self) -> &mut CardFlags {
        &mut self.flags
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.display_order == other.display_order
            && self.suit == other.suit
            && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.display_order.hash(state);
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ghost() {
            write!(f, "{}(x2)", self.rank)?;
        } else {
            write!(f, "{}({})", self.rank, self.suit.value())?;
        }
        if self.round_played() > 0 {
            write!(f, ",played={}", self.round_played())?;
        }
        Ok(())
    }
}

/// Returns whether the card may be played in the current round.
#[must_use]
pub const fn is_playable(card: &Card) -> bool {
    card.is_playable()
}

/// Returns the round in which the card was played, 0 if unplayed.
#[must_use]
pub const fn round_played(card: &Card) -> u8 {
    card.round_played()
}
