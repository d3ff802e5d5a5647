use crate::mode::GameMode;
use serde::{Deserialize, Serialize};

/// Lifecycle of a round. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Active,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One player's round in one mode, as kept by a session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub mode: GameMode,
    pub secret: String,
    pub lives: u32,
    pub attempts: u32,
    pub status: SessionStatus,
}

impl GameSession {
    /// A fresh active round with no attempts yet.
    #[must_use]
    pub fn new(mode: GameMode, secret: impl Into<String>, lives: u32) -> Self {
        Self {
            mode,
            secret: secret.into(),
            lives,
            attempts: 0,
            status: SessionStatus::Active,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}
