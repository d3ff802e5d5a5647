use crate::mode::GameMode;
use thiserror::Error;

/// Everything that can go wrong around a round.
///
/// Scoring itself never fails; these are raised by guess parsing, the
/// [`Table`](crate::table::Table) and settings validation before the engine runs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid guess for {mode}: {reason}")]
    InvalidGuessFormat { mode: GameMode, reason: String },

    #[error("no active {mode} game, start a new one first")]
    NoActiveSession { mode: GameMode },

    #[error("stored {mode} secret '{secret}' is malformed")]
    InvalidSecret { mode: GameMode, secret: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    pub(crate) fn invalid_guess(mode: GameMode, reason: impl Into<String>) -> Self {
        Self::InvalidGuessFormat {
            mode,
            reason: reason.into(),
        }
    }
}
