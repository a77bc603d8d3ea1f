//! The process-wide card table and deck utilities.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::GameError;
use crate::rng::RandomSource;
use crate::sync::Once;

static CARD_TABLE: Once<[Card; DECK_SIZE]> = Once::new();

fn build_table() -> [Card; DECK_SIZE] {
    let mut table = [Card::new(0, Suit::Stick, 0); DECK_SIZE];
    let mut slot = 0;

    for suit in Suit::ORDINARY.into_iter().chain([Suit::Special]) {
        let (low, high) = suit.ranks();
        for rank in low..=high {
            table[slot] = Card::new(slot as u8 + 1, suit, rank);
            slot += 1;
        }
    }

    debug_assert_eq!(slot, DECK_SIZE, "card table must cover the whole deck");
    table
}

/// Initializes the card table.
///
/// Must run before any game is started. Calling it again is a no-op.
pub fn global_init() {
    CARD_TABLE.call_once(|| {
        tracing::debug!(cards = DECK_SIZE, "card table initialized");
        build_table()
    });
}

/// Returns the card table in display order (the Ghost last).
///
/// # Errors
///
/// Returns [`GameError::Uninitialized`] if [`global_init`] has not run.
pub fn card_table() -> Result<&'static [Card; DECK_SIZE], GameError> {
    CARD_TABLE.get().ok_or(GameError::Uninitialized)
}

/// Returns a fresh, unshuffled deck.
///
/// # Errors
///
/// Returns [`GameError::Uninitialized`] if [`global_init`] has not run.
pub fn standard_deck() -> Result<Vec<Card>, GameError> {
    Ok(card_table()?.to_vec())
}

/// Looks up a card by suit and rank.
///
/// Returns `None` if the table is not initialized or holds no such card.
#[must_use]
pub fn find_card(suit: Suit, rank: u8) -> Option<Card> {
    card_table()
        .ok()?
        .iter()
        .find(|card| card.suit == suit && card.rank == rank)
        .copied()
}

/// Shuffles cards in place.
///
/// Draws from `source` exactly once for every position but the first, so a
/// 33-card deck consumes 32 values.
///
/// Each draw is reduced with `% (i + 1)`, which leaves a slight bias toward
/// low positions (at most 33 in 65536 per draw).
pub fn shuffle(cards: &mut [Card], source: &mut dyn RandomSource) {
    for i in (1..cards.len()).rev() {
        let j = usize::from(source.next_u16()) % (i + 1);
        cards.swap(i, j);
    }
}

/// Checks that `cards` is exactly the card table in some order.
pub(crate) fn is_complete_deck(cards: &[Card]) -> Result<bool, GameError> {
    let table = card_table()?;
    if cards.len() != table.len() {
        return Ok(false);
    }

    let mut seen = [false; DECK_SIZE];
    for card in cards {
        let Some(position) = table.iter().position(|entry| entry == card) else {
            return Ok(false);
        };
        if seen[position] {
            return Ok(false);
        }
        seen[position] = true;
    }

    Ok(true)
}

/// Splits a deck round-robin into `players` hands, starting with the first.
pub(crate) fn deal(cards: &[Card], players: usize) -> Vec<Vec<Card>> {
    let mut hands: Vec<Vec<Card>> = (0..players)
        .map(|_| Vec::with_capacity(cards.len().div_ceil(players)))
        .collect();

    for (index, card) in cards.iter().enumerate() {
        hands[index % players].push(Card::new(card.display_order, card.suit, card.rank));
    }

    hands
}
