//! Transient per-round state.

use alloc::vec::Vec;

use crate::card::{Card, MAX_PLAYERS, Suit};
use crate::result::RoundSnapshot;
use crate::rules;

/// The round being played.
#[derive(Debug, Clone, Default)]
pub(crate) struct Round {
    /// Round number, counting from 1. 0 before the first deal.
    pub seq: u32,
    /// Seat (0-based) that led the round.
    pub leader: usize,
    /// Number of players holding cards when the round opened.
    pub participants: usize,
    /// Cards indexed by seat.
    pub slots: [Option<Card>; MAX_PLAYERS],
    /// Seats in the order they played.
    pub order: Vec<usize>,
    /// Seat currently winning the round.
    pub high_ranker: Option<usize>,
    /// Whether the Ghost has been played.
    pub doubled: bool,
    /// Sum of the face values on the board.
    pub score_on_board: i32,
}

impl Round {
    pub fn open(seq: u32, leader: usize, participants: usize) -> Self {
        Self {
            seq,
            leader,
            participants,
            order: Vec::with_capacity(participants),
            ..Self::default()
        }
    }

    /// Cards on the board in turn order.
    pub fn plays(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|&seat| self.slots[seat].as_ref())
    }

    pub fn led_suit(&self) -> Option<Suit> {
        rules::led_suit(self.plays())
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.order.len() >= self.participants
    }

    pub fn has_played(&self, seat: usize) -> bool {
        self.slots[seat].is_some()
    }

    /// Puts a card on the board and updates the leading seat.
    pub fn place(&mut self, seat: usize, card: Card) {
        let led = rules::led_suit(self.plays().chain(core::iter::once(&card)));
        let takes_lead = match self.high_ranker.and_then(|high| self.slots[high].as_ref()) {
            Some(best) => rules::beats(&card, best, led),
            None => true,
        };

        if takes_lead {
            self.high_ranker = Some(seat);
        }
        if card.is_ghost() {
            self.doubled = true;
        }
        self.slots[seat] = Some(card);
        self.order.push(seat);
        self.score_on_board = rules::board_value(self.plays());
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut moves = [None; MAX_PLAYERS];
        for (slot, card) in moves.iter_mut().zip(self.plays()) {
            *slot = Some(*card);
        }

        RoundSnapshot {
            seq: self.seq,
            is_doubled: self.doubled,
            score_on_board: self.score_on_board,
            round_winner: self.high_ranker.map(|seat| seat as u8 + 1),
            moves,
        }
    }
}
