//! Suit-following and trick comparison rules.

use crate::card::{Card, Suit};
use crate::hand::Hand;

/// How a card relates to the suit-following rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legality {
    /// The card may be played.
    Legal,
    /// The card is off-suit, but the hand has nothing of the led suit.
    /// Playing it busts the player.
    Forced,
    /// The hand holds the led suit and this card does not follow it.
    Forbidden,
}

impl Legality {
    /// Whether a card with this legality may be played.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        !matches!(self, Self::Forbidden)
    }
}

/// Returns the suit that must be followed, given the cards played so far in
/// turn order.
///
/// The Ghost does not establish a suit; the first ordinary card does.
#[must_use]
pub fn led_suit<'a, I>(plays: I) -> Option<Suit>
where
    I: IntoIterator<Item = &'a Card>,
{
    plays
        .into_iter()
        .map(|card| card.suit)
        .find(|suit| !suit.is_special())
}

/// Judges whether `card` may be played from `hand` when `led` must be followed.
#[must_use]
pub fn legality(card: &Card, hand: &Hand, led: Option<Suit>) -> Legality {
    let Some(led) = led else {
        return Legality::Legal;
    };

    if card.is_ghost() || card.suit == led {
        Legality::Legal
    } else if hand.has_suit(led) {
        Legality::Forbidden
    } else {
        Legality::Forced
    }
}

/// Whether `challenger` takes the lead from `incumbent`.
///
/// The Ghost beats everything. Otherwise only a higher card of the led suit
/// takes the lead.
#[must_use]
pub fn beats(challenger: &Card, incumbent: &Card, led: Option<Suit>) -> bool {
    if incumbent.is_ghost() {
        return false;
    }
    if challenger.is_ghost() {
        return true;
    }

    led.is_some_and(|suit| {
        challenger.suit == suit && (incumbent.suit != suit || challenger.rank > incumbent.rank)
    })
}

/// Sums the face values of the cards.
#[must_use]
pub fn board_value<'a, I>(cards: I) -> i32
where
    I: IntoIterator<Item = &'a Card>,
{
    cards.into_iter().map(Card::face_value).sum()
}

/// Points awarded for a board, doubled when the Ghost was played.
#[must_use]
pub const fn award(score_on_board: i32, doubled: bool) -> i32 {
    if doubled {
        score_on_board * 2
    } else {
        score_on_board
    }
}
