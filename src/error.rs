//! Error types for game operations.

use thiserror::Error;

/// Errors returned by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A required argument was an empty slot.
    #[error("required argument is missing")]
    NullPointer,
    /// The configured player count is not 3 or 4.
    #[error("invalid number of players")]
    BadNumberOfPlayers,
    /// The card table or the game has not been initialized.
    #[error("not initialized")]
    Uninitialized,
    /// No game is in progress.
    #[error("no game in progress")]
    NotInGame,
    /// No player is marked active during play.
    #[error("internal error: nobody is active")]
    BugNobodyActive,
    /// The card is not in the active player's hand.
    #[error("card not found")]
    CardNotFound,
    /// The card may not be played under the suit-following rule.
    #[error("forbidden move")]
    ForbiddenMove,
    /// The operation is not implemented.
    #[error("not implemented")]
    Unimplemented,
    /// Unspecified failure.
    #[error("unspecified error")]
    Unspecified,
}

impl GameError {
    /// Whether the caller used the API out of contract (bad argument, wrong
    /// phase, bad configuration).
    #[must_use]
    pub const fn is_contract_violation(self) -> bool {
        matches!(
            self,
            Self::NullPointer | Self::BadNumberOfPlayers | Self::Uninitialized | Self::NotInGame
        )
    }

    /// Whether the move broke a game rule. The actor may choose another card.
    #[must_use]
    pub const fn is_rule_violation(self) -> bool {
        matches!(self, Self::CardNotFound | Self::ForbiddenMove)
    }

    /// Whether the engine found itself in an inconsistent state.
    #[must_use]
    pub const fn is_internal(self) -> bool {
        matches!(self, Self::BugNobodyActive)
    }

    /// Returns the numeric result code for this error.
    #[must_use]
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::NullPointer => ErrorCode::NullPointer,
            Self::BadNumberOfPlayers => ErrorCode::BadNumberOfPlayers,
            Self::Uninitialized => ErrorCode::Uninitialized,
            Self::NotInGame => ErrorCode::NotInGame,
            Self::BugNobodyActive => ErrorCode::BugNobodyActive,
            Self::CardNotFound => ErrorCode::CardNotFound,
            Self::ForbiddenMove => ErrorCode::ForbiddenMove,
            Self::Unimplemented => ErrorCode::Unimplemented,
            Self::Unspecified => ErrorCode::Unspecified,
        }
    }
}

/// Numeric result codes for hosts that exchange plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    /// The operation succeeded.
    Success = 0,
    /// See [`GameError::NullPointer`].
    NullPointer = 1,
    /// See [`GameError::BadNumberOfPlayers`].
    BadNumberOfPlayers = 2,
    /// See [`GameError::Uninitialized`].
    Uninitialized = 3,
    /// See [`GameError::NotInGame`].
    NotInGame = 4,
    /// See [`GameError::BugNobodyActive`].
    BugNobodyActive = 5,
    /// See [`GameError::CardNotFound`].
    CardNotFound = 6,
    /// See [`GameError::ForbiddenMove`].
    ForbiddenMove = 7,
    /// See [`GameError::Unimplemented`].
    Unimplemented = 8,
    /// See [`GameError::Unspecified`].
    Unspecified = 9,
}

impl From<GameError> for ErrorCode {
    fn from(error: GameError) -> Self {
        error.code()
    }
}

impl<T> From<Result<T, GameError>> for ErrorCode {
    fn from(result: Result<T, GameError>) -> Self {
        result.map_or_else(GameError::code, |_| Self::Success)
    }
}
