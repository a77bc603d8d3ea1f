//! A player's hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, MAX_HAND_CARDS, Suit};

/// Cards held by a player, in dealt order.
///
/// Removing a card keeps the remaining cards contiguous and in their original
/// order.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        debug_assert!(cards.len() <= MAX_HAND_CARDS, "hand over capacity");
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the position of the card in the hand.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|held| held == card)
    }

    /// Returns whether the hand holds any card of the suit.
    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit == suit)
    }

    /// Returns whether the hand holds the Ghost.
    #[must_use]
    pub fn has_ghost(&self) -> bool {
        self.has_suit(Suit::Special)
    }

    /// Removes and returns the card at `index`, shifting later cards forward.
    pub(crate) fn take(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }
}
