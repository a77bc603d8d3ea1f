//! Read-only views of rounds and finished games.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, MAX_PLAYERS};

/// Snapshot of a round for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundSnapshot {
    /// Round number, counting from 1. 0 when there is no round.
    pub seq: u32,
    /// Whether the Ghost has been played.
    pub is_doubled: bool,
    /// Sum of the face values on the board.
    pub score_on_board: i32,
    /// Seat number (1..=4) of the player currently winning the round.
    pub round_winner: Option<u8>,
    /// Moves in turn order, starting with the round leader. Unused trailing
    /// slots are `None`.
    pub moves: [Option<Card>; MAX_PLAYERS],
}

impl RoundSnapshot {
    /// Returns the moves made so far.
    pub fn played(&self) -> impl Iterator<Item = &Card> {
        self.moves.iter().flatten()
    }

    /// Returns whether nothing has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.iter().all(Option::is_none)
    }
}

/// Result of a completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// Round number, counting from 1.
    pub seq: u32,
    /// Seat number of the winner.
    pub winner: u8,
    /// Number of cards the winner took.
    pub cards_taken: u32,
    /// Sum of the face values on the board.
    pub score_on_board: i32,
    /// Whether the Ghost doubled the round.
    pub is_doubled: bool,
    /// Points added to the winner's score.
    pub awarded: i32,
}

/// Outcome of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Whether the move was forced off-suit.
    pub busted: bool,
    /// The finished round, when this move completed it.
    pub round: Option<RoundSummary>,
    /// Whether this move ended the game.
    pub finished: bool,
}

/// Final standing of a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// Seat number, 1..=4.
    pub index: u8,
    /// Final score.
    pub score: i32,
    /// Cards won.
    pub cards_taken: u32,
    /// Times the player was forced off-suit.
    pub times_busted: u32,
}

/// Final standings of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// Seat numbers sharing the highest score.
    pub winners: Vec<u8>,
    /// Number of rounds played.
    pub rounds: u32,
}
