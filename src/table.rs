//! The caller side of a round: session lookup, guess validation and commit.

use crate::config::GameSettings;
use crate::error::GameError;
use crate::mode::GameMode;
use crate::scoring::{GuessOutcome, Play, evaluate};
use crate::secret::generate_secret;
use crate::session::{GameSession, SessionStatus};
use crate::{debug_log, info_log};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Persistence seam for sessions, one per (player, mode).
pub trait SessionStore {
    fn load(&self, player: &str, mode: GameMode) -> Option<GameSession>;
    fn save(&mut self, player: &str, session: GameSession);
}

/// Process-local store, used by the terminal front ends and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: HashMap<(String, GameMode), GameSession>,
}

impl SessionStore for MemoryStore {
    fn load(&self, player: &str, mode: GameMode) -> Option<GameSession> {
        self.sessions.get(&(player.to_string(), mode)).cloned()
    }

    fn save(&mut self, player: &str, session: GameSession) {
        self.sessions.insert((player.to_string(), session.mode), session);
    }
}

/// What a committed turn looks like to the player.
///
/// Carries the round counters but never the secret; only a
/// [`GuessOutcome::Lost`] reveals it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub mode: GameMode,
    /// The guess in canonical form.
    pub guess: String,
    pub outcome: GuessOutcome,
    pub lives: u32,
    pub attempts: u32,
    pub status: SessionStatus,
}

impl TurnReport {
    #[must_use]
    pub const fn is_round_over(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Runs rounds against a [`SessionStore`].
///
/// Every mutating call takes `&mut self`, so a table never has two
/// evaluations in flight for the same session.
#[derive(Debug)]
pub struct Table<S: SessionStore> {
    store: S,
    settings: GameSettings,
}

impl<S: SessionStore> Table<S> {
    /// Wrap `store`; fails if `settings` cannot produce a round.
    pub fn new(store: S, settings: GameSettings) -> Result<Self, GameError> {
        settings.validate()?;
        Ok(Self { store, settings })
    }

    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Begin a new round, replacing whatever `player` had in `mode`.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        player: &str,
        mode: GameMode,
        rng: &mut R,
    ) -> Result<GameSession, GameError> {
        let secret = generate_secret(mode, &self.settings, rng)?;
        let session = GameSession::new(mode, secret, self.settings.lives_for(mode));
        info_log!(
            "Table::start() - {} started {} with {} lives",
            player,
            mode,
            session.lives
        );
        self.store.save(player, session.clone());
        Ok(session)
    }

    #[must_use]
    pub fn session(&self, player: &str, mode: GameMode) -> Option<GameSession> {
        self.store.load(player, mode)
    }

    /// Evaluate `raw_guess` against the player's active round and save the result.
    ///
    /// Nothing is saved when an error is returned.
    pub fn play(&mut self, player: &str, mode: GameMode, raw_guess: &str) -> Result<TurnReport, GameError> {
        let session = self
            .store
            .load(player, mode)
            .filter(GameSession::is_active)
            .ok_or(GameError::NoActiveSession { mode })?;

        let play = Play::new(mode, &session.secret, raw_guess)?;
        let guess = play.canonical_guess();
        let (next, outcome) = evaluate(&play, &session);
        debug_log!(
            "Table::play() - {} guessed {} in {}: {:?} (lives {}, attempts {})",
            player,
            guess,
            play.mode(),
            outcome,
            next.lives,
            next.attempts
        );

        let report = TurnReport {
            mode: play.mode(),
            guess,
            outcome,
            lives: next.lives,
            attempts: next.attempts,
            status: next.status,
        };
        self.store.save(player, next);
        Ok(report)
    }
}
