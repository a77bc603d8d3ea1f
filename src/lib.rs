//! A rules engine for Kusokurae, a 3-or-4-player trick-taking card game, with
//! optional `no_std` support.
//!
//! The crate provides a [`GameState`] type that owns the deck, the hands, turn
//! order, move validation, trick resolution and scoring. Hosts drive it with
//! [`GameState::init`], [`GameState::start`] and [`GameState::play`], and can
//! register a [`TransitionObserver`] to hear about status changes and finished
//! rounds.
//!
//! # Example
//!
//! ```
//! use kusokurae::{GameConfig, GameState, GameStatus};
//!
//! kusokurae::global_init();
//!
//! let mut game = GameState::new();
//! game.init(GameConfig::default().with_players(3).with_seed(42), None)
//!     .unwrap();
//! game.start().unwrap();
//!
//! while game.status() == GameStatus::Play {
//!     let card = game.legal_moves()[0];
//!     game.play(card).unwrap();
//! }
//!
//! let results = game.results().unwrap();
//! assert_eq!(results.rounds, 11);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod rng;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{
    Card, CardFlags, DECK_SIZE, MAX_HAND_CARDS, MAX_PLAYERS, Suit, is_playable, round_played,
};
pub use deck::{card_table, global_init, standard_deck};
pub use error::{ErrorCode, GameError};
pub use game::{GameState, GameStatus, TransitionObserver};
pub use hand::Hand;
pub use options::GameConfig;
pub use player::{Player, RoundStatus};
pub use result::{GameResult, PlayOutcome, PlayerResult, RoundSnapshot, RoundSummary};
pub use rng::{GeneratorFn, RandomSource, clear_prng, set_prng};
pub use rules::Legality;
