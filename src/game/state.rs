//! Game status and transition notifications.

use super::GameState;

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Not initialized.
    #[default]
    Null,
    /// Configured, cards not dealt.
    Init,
    /// Rounds in progress.
    Play,
    /// All cards played. Results can be read, or the game re-initialized.
    Finish,
}

/// Receives notifications from a game.
///
/// Called synchronously before every status change and at the end of every
/// round. At the end of a round `next` is [`GameStatus::Play`]. The observer
/// must not drive the game it is observing.
pub trait TransitionObserver {
    /// Called with the game and the status it is moving to.
    fn on_transition(&mut self, game: &GameState, next: GameStatus);
}

impl<F> TransitionObserver for F
where
    F: FnMut(&GameState, GameStatus),
{
    fn on_transition(&mut self, game: &GameState, next: GameStatus) {
        self(game, next);
    }
}
