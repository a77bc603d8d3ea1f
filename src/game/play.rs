use core::mem;

use crate::card::{Card, MAX_ROUND_INDEX};
use crate::error::GameError;
use crate::player::RoundStatus;
use crate::result::{PlayOutcome, RoundSummary};
use crate::rules::{self, Legality};

use super::{GameState, GameStatus};

impl GameState {
    fn active_seat(&self) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|player| player.status == RoundStatus::Active)
            .ok_or(GameError::BugNobodyActive)
    }

    /// Plays a card from the active player's hand.
    ///
    /// When the move completes the round, the round is scored, the observer is
    /// told, and either the winner leads the next round or the game finishes.
    ///
    /// A rejected move leaves the game unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No game is in progress
    /// - `card` is an empty slot
    /// - Nobody is active (an internal inconsistency)
    /// - The card is not in the active player's hand
    /// - The player holds the led suit and `card` neither follows it nor is
    ///   the Ghost
    pub fn play(&mut self, card: Card) -> Result<PlayOutcome, GameError> {
        if self.status != GameStatus::Play {
            return Err(GameError::NotInGame);
        }
        if card.is_blank() {
            return Err(GameError::NullPointer);
        }

        let seat = self.active_seat()?;
        let player = &self.players[seat];
        let position = player
            .hand
            .position(&card)
            .ok_or(GameError::CardNotFound)?;

        let led = self.round.led_suit();
        let legality = rules::legality(&player.hand.cards()[position], &player.hand, led);
        if legality == Legality::Forbidden {
            tracing::trace!(player = seat + 1, %card, ?led, "forbidden move");
            return Err(GameError::ForbiddenMove);
        }

        let forced = legality == Legality::Forced;
        let round_index = self.round.seq.min(u32::from(MAX_ROUND_INDEX)) as u8;

        let player = &mut self.players[seat];
        let mut played = player.hand.take(position);
        played.flags_mut().set_round_played(round_index);
        played.flags_mut().set_playable(false);
        player.status = RoundStatus::Done;
        player.busted = forced;
        if forced {
            player.times_busted += 1;
        }

        tracing::trace!(player = seat + 1, card = %played, forced, "card played");
        self.round.place(seat, played);

        if !self.round.is_complete() {
            match self.next_to_play(seat) {
                Some(next) => {
                    self.players[next].status = RoundStatus::Active;
                    self.refresh_playable();
                    return Ok(PlayOutcome {
                        busted: forced,
                        round: None,
                        finished: false,
                    });
                }
                None => {
                    tracing::warn!(
                        played = self.round.order.len(),
                        participants = self.round.participants,
                        "no one left to play; closing round early"
                    );
                }
            }
        }

        let summary = self.resolve_round();
        let finished = self.status == GameStatus::Finish;
        Ok(PlayOutcome {
            busted: forced,
            round: Some(summary),
            finished,
        })
    }

    /// Next seat in turn order that holds cards and has not played yet.
    fn next_to_play(&self, seat: usize) -> Option<usize> {
        let count = self.players.len();
        (1..count)
            .map(|offset| (seat + offset) % count)
            .find(|&candidate| {
                !self.round.has_played(candidate) && !self.players[candidate].hand.is_empty()
            })
    }

    /// Awards the finished round and opens the next one or ends the game.
    fn resolve_round(&mut self) -> RoundSummary {
        let round = mem::take(&mut self.round);
        let winner = round.high_ranker.unwrap_or(round.leader);
        let taken = round.order.len() as u32;
        let awarded = rules::award(round.score_on_board, round.doubled);

        let player = &mut self.players[winner];
        player.cards_taken += taken;
        player.score += awarded;
        self.nround += 1;

        let summary = RoundSummary {
            seq: round.seq,
            winner: winner as u8 + 1,
            cards_taken: taken,
            score_on_board: round.score_on_board,
            is_doubled: round.doubled,
            awarded,
        };
        tracing::debug!(
            round = summary.seq,
            winner = summary.winner,
            score_on_board = summary.score_on_board,
            doubled = summary.is_doubled,
            awarded,
            "round resolved"
        );

        self.last_round = Some(round);
        for player in &mut self.players {
            player.status = RoundStatus::Waiting;
        }
        self.notify(GameStatus::Play);

        if self.players.iter().all(|player| player.hand.is_empty()) {
            self.transition(GameStatus::Finish);
        } else {
            self.open_round(winner);
        }
        self.refresh_playable();

        summary
    }
}
