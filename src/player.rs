//! Player state.

use crate::hand::Hand;

/// Where a player stands in the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundStatus {
    /// Waiting for their turn.
    #[default]
    Waiting,
    /// Next to play.
    Active,
    /// Already played this round.
    Done,
}

/// A seat at the table.
#[derive(Debug, Clone)]
pub struct Player {
    index: u8,
    pub(crate) status: RoundStatus,
    pub(crate) hand: Hand,
    pub(crate) cards_taken: u32,
    pub(crate) score: i32,
    pub(crate) busted: bool,
    pub(crate) times_busted: u32,
}

impl Player {
    pub(crate) const fn new(index: u8) -> Self {
        Self {
            index,
            status: RoundStatus::Waiting,
            hand: Hand::new(),
            cards_taken: 0,
            score: 0,
            busted: false,
            times_busted: 0,
        }
    }

    /// Seat number, 1..=4.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Position in the player list, 0-based.
    #[must_use]
    pub const fn seat(&self) -> usize {
        self.index as usize - 1
    }

    /// Round status.
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Whether this player is next to play.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, RoundStatus::Active)
    }

    /// The cards in hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Cards won so far.
    #[must_use]
    pub const fn cards_taken(&self) -> u32 {
        self.cards_taken
    }

    /// Accumulated score.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Whether the player's move in the current (or just finished) round was
    /// forced off-suit.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// How many times the player has been forced off-suit this game.
    #[must_use]
    pub const fn times_busted(&self) -> u32 {
        self.times_busted
    }
}
