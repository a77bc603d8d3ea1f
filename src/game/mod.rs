//! Game engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use rand::RngCore;

use crate::card::Card;
use crate::deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::options::GameConfig;
use crate::player::{Player, RoundStatus};
use crate::result::{GameResult, PlayerResult, RoundSnapshot};
use crate::rng::{self, GeneratorSource, RandomSource};
use crate::rules;

mod play;
mod round;
pub mod state;

use round::Round;
pub use state::{GameStatus, TransitionObserver};

/// A Kusokurae game: dealing, turn order, move validation and scoring.
///
/// The state is owned by the caller and driven through `&mut self`; hosts
/// sharing a game across threads must serialize access themselves.
pub struct GameState {
    config: GameConfig,
    status: GameStatus,
    players: Vec<Player>,
    /// Finished round count.
    nround: u32,
    /// Seat (0-based) dealt the Ghost.
    ghost_holder: Option<usize>,
    round: Round,
    last_round: Option<Round>,
    /// 8 bytes of state for the random number generator.
    rng_state: u64,
    source: Option<Box<dyn RandomSource>>,
    observer: Option<Box<dyn TransitionObserver>>,
}

impl GameState {
    /// Creates an uninitialized game.
    ///
    /// # Example
    ///
    /// ```
    /// use kusokurae::{GameConfig, GameState, GameStatus};
    ///
    /// kusokurae::global_init();
    /// let mut game = GameState::new();
    /// game.init(GameConfig::default().with_seed(42), None).unwrap();
    /// game.start().unwrap();
    /// assert_eq!(game.status(), GameStatus::Play);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            status: GameStatus::Null,
            players: Vec::new(),
            nround: 0,
            ghost_holder: None,
            round: Round::default(),
            last_round: None,
            rng_state: 0,
            source: None,
            observer: None,
        }
    }

    /// Creates an uninitialized game that shuffles with `source`.
    ///
    /// The source takes precedence over the process-wide generator.
    #[must_use]
    pub fn with_random_source(source: Box<dyn RandomSource>) -> Self {
        let mut game = Self::new();
        game.source = Some(source);
        game
    }

    /// Configures the game and registers the transition observer.
    ///
    /// May be called again at any time to discard the current game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BadNumberOfPlayers`] if the player count is not 3
    /// or 4. The game is left untouched in that case.
    pub fn init(
        &mut self,
        config: GameConfig,
        observer: Option<Box<dyn TransitionObserver>>,
    ) -> Result<(), GameError> {
        if !config.is_valid() {
            tracing::warn!(players = config.players, "rejected player count");
            return Err(GameError::BadNumberOfPlayers);
        }

        self.config = config;
        self.players = (1..=config.players).map(Player::new).collect();
        self.nround = 0;
        self.ghost_holder = None;
        self.round = Round::default();
        self.last_round = None;
        self.rng_state = config.seed;
        self.observer = observer;

        self.transition(GameStatus::Init);
        Ok(())
    }

    /// Shuffles and deals, then waits for the Ghost holder to lead.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Uninitialized`] if the game is not freshly
    /// initialized or the card table has not been set up.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Init {
            return Err(GameError::Uninitialized);
        }

        let mut cards = deck::standard_deck()?;
        self.shuffle(&mut cards);
        self.begin(&cards);
        Ok(())
    }

    /// Like [`start`](Self::start), but deals `cards` in the given order
    /// instead of shuffling.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Uninitialized`] as [`start`](Self::start) does, or
    /// [`GameError::CardNotFound`] if `cards` is not the full deck.
    pub fn start_with_deck(&mut self, cards: &[Card]) -> Result<(), GameError> {
        if self.status != GameStatus::Init {
            return Err(GameError::Uninitialized);
        }
        if !deck::is_complete_deck(cards)? {
            return Err(GameError::CardNotFound);
        }

        self.begin(cards);
        Ok(())
    }

    fn shuffle(&mut self, cards: &mut [Card]) {
        if let Some(source) = self.source.as_deref_mut() {
            deck::shuffle(cards, source);
        } else if let Some(generator) = rng::prng() {
            deck::shuffle(cards, &mut GeneratorSource::new(generator, &mut self.rng_state));
        } else {
            let mut default = rng::seeded(self.rng_state);
            deck::shuffle(cards, &mut default);
            self.rng_state = default.next_u64();
        }
    }

    fn begin(&mut self, cards: &[Card]) {
        let hands = deck::deal(cards, self.players.len());
        for (player, cards) in self.players.iter_mut().zip(hands) {
            player.hand = Hand::from_cards(cards);
            player.status = RoundStatus::Waiting;
            player.cards_taken = 0;
            player.score = 0;
            player.busted = false;
            player.times_busted = 0;
        }

        let holder = self
            .players
            .iter()
            .position(|player| player.hand.has_ghost())
            .unwrap_or(0);
        self.ghost_holder = Some(holder);
        self.nround = 0;
        self.last_round = None;
        self.open_round(holder);

        tracing::debug!(
            players = self.players.len(),
            ghost_holder = holder + 1,
            "cards dealt"
        );
        self.transition(GameStatus::Play);
        self.refresh_playable();
    }

    /// Opens the next round led by `leader`, or the first seat after it that
    /// still holds cards.
    fn open_round(&mut self, leader: usize) {
        let participants = self
            .players
            .iter()
            .filter(|player| !player.hand.is_empty())
            .count();
        let leader = self.next_holding_from(leader).unwrap_or(leader);

        for player in &mut self.players {
            player.status = RoundStatus::Waiting;
        }
        self.players[leader].status = RoundStatus::Active;
        self.round = Round::open(self.nround + 1, leader, participants);
    }

    /// First seat at or after `seat`, in turn order, that holds cards.
    fn next_holding_from(&self, seat: usize) -> Option<usize> {
        let count = self.players.len();
        (0..count)
            .map(|offset| (seat + offset) % count)
            .find(|&candidate| !self.players[candidate].hand.is_empty())
    }

    /// Recomputes which hand cards may be played right now.
    pub(crate) fn refresh_playable(&mut self) {
        let led = self.round.led_suit();
        let in_play = self.status == GameStatus::Play;
        for player in &mut self.players {
            let waiting = in_play && player.status != RoundStatus::Done;
            let allowed: Vec<bool> = player
                .hand
                .cards()
                .iter()
                .map(|card| waiting && rules::legality(card, &player.hand, led).is_allowed())
                .collect();
            for (card, allowed) in player.hand.cards_mut().iter_mut().zip(allowed) {
                card.flags_mut().set_playable(allowed);
            }
        }
    }

    /// Notifies the observer, then moves to `next`.
    fn transition(&mut self, next: GameStatus) {
        self.notify(next);
        tracing::debug!(from = ?self.status, to = ?next, "status change");
        self.status = next;
    }

    pub(crate) fn notify(&mut self, next: GameStatus) {
        if let Some(mut observer) = self.observer.take() {
            observer.on_transition(self, next);
            self.observer = Some(observer);
        }
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in seat `index` (1..=4).
    #[must_use]
    pub fn player(&self, index: u8) -> Option<&Player> {
        self.players.get(usize::from(index).checked_sub(1)?)
    }

    /// Returns the number of finished rounds.
    #[must_use]
    pub const fn rounds_finished(&self) -> u32 {
        self.nround
    }

    /// Returns the seat number that was dealt the Ghost.
    #[must_use]
    pub fn ghost_holder(&self) -> Option<u8> {
        self.ghost_holder.map(|seat| seat as u8 + 1)
    }

    /// Returns the current 8-byte random state.
    #[must_use]
    pub const fn rng_state(&self) -> u64 {
        self.rng_state
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` when no game is in progress.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.players.iter().find(|player| player.is_active())
    }

    /// Returns the cards the active player may play.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Card> {
        let Some(player) = self.active_player() else {
            return Vec::new();
        };
        let led = self.round.led_suit();
        player
            .hand
            .cards()
            .iter()
            .filter(|card| rules::legality(card, &player.hand, led).is_allowed())
            .copied()
            .collect()
    }

    /// Returns whether the round in progress is the last one.
    ///
    /// Always `true` once the game has finished and `false` before it starts.
    #[must_use]
    pub fn is_final_round(&self) -> bool {
        match self.status {
            GameStatus::Null | GameStatus::Init => false,
            GameStatus::Finish => true,
            GameStatus::Play => self.players.iter().enumerate().all(|(seat, player)| {
                let held_at_open = player.hand.len() + usize::from(self.round.has_played(seat));
                held_at_open <= 1
            }),
        }
    }

    /// Returns a snapshot of the current round.
    ///
    /// Before any card of a round is played, the snapshot shows the round that
    /// just finished. It is empty when no round has been played.
    #[must_use]
    pub fn round_state(&self) -> RoundSnapshot {
        match self.status {
            GameStatus::Null | GameStatus::Init => RoundSnapshot::default(),
            GameStatus::Play if !self.round.is_empty() => self.round.snapshot(),
            GameStatus::Play | GameStatus::Finish => self
                .last_round
                .as_ref()
                .map_or_else(RoundSnapshot::default, Round::snapshot),
        }
    }

    /// Returns the final standings.
    ///
    /// Returns `None` unless the game has finished.
    #[must_use]
    pub fn results(&self) -> Option<GameResult> {
        if self.status != GameStatus::Finish {
            return None;
        }

        let players: Vec<PlayerResult> = self
            .players
            .iter()
            .map(|player| PlayerResult {
                index: player.index(),
                score: player.score,
                cards_taken: player.cards_taken,
                times_busted: player.times_busted,
            })
            .collect();
        let best = players.iter().map(|result| result.score).max()?;
        let winners = players
            .iter()
            .filter(|result| result.score == best)
            .map(|result| result.index)
            .collect();

        Some(GameResult {
            players,
            winners,
            rounds: self.nround,
        })
    }

    /// Counts cards in hands, on the board, and taken.
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|player| player.hand.len()).sum();
        let taken: u32 = self.players.iter().map(|player| player.cards_taken).sum();
        in_hands + self.round.order.len() + taken as usize
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("config", &self.config)
            .field("status", &self.status)
            .field("players", &self.players)
            .field("nround", &self.nround)
            .field("ghost_holder", &self.ghost_holder)
            .field("round", &self.round)
            .field("rng_state", &self.rng_state)
            .finish_non_exhaustive()
    }
}
