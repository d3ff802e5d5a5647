//! Turn evaluation for both game modes.
//!
//! [`evaluate`] is a pure function: it takes the current session by
//! reference and hands back the session as it should be stored after the
//! turn, together with what the player is told. Checking that the session is
//! still active and that the guess is well formed happens before this module
//! is reached; see [`Table::play`](crate::table::Table::play).
//!
//! # State Machine
//! - `Active` + winning guess → `Won`
//! - `Active` + losing guess, lives left → `Active`
//! - `Active` + losing guess, last life → `Lost`

use crate::error::GameError;
use crate::guess::{CODE_LENGTH, Code, parse_number};
use crate::mode::GameMode;
use crate::session::{GameSession, SessionStatus};
use serde::{Deserialize, Serialize};

/// What a non-winning guess tells the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    TooLow,
    TooHigh,
    Score { bulls: u8, cows: u8 },
}

/// Result of a single evaluated guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    Won,
    Hint(Hint),
    /// The last life was spent; the secret is revealed.
    Lost { secret: String, hint: Hint },
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self, Self::Won)
    }

    #[must_use]
    pub const fn hint(&self) -> Option<Hint> {
        match self {
            Self::Won => None,
            Self::Hint(hint) | Self::Lost { hint, .. } => Some(*hint),
        }
    }
}

/// A typed secret/guess pair for one mode.
///
/// Carrying both values in the same variant keeps [`evaluate`] total: a
/// number can never be scored against a code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Play {
    NumberGuess { secret: i64, guess: i64 },
    BullsCows { secret: Code, guess: Code },
}

impl Play {
    /// Parse a stored secret and a raw guess for `mode`.
    ///
    /// A malformed guess is [`GameError::InvalidGuessFormat`]; a malformed
    /// secret is [`GameError::InvalidSecret`].
    pub fn new(mode: GameMode, secret: &str, guess: &str) -> Result<Self, GameError> {
        let bad_secret = |_: GameError| GameError::InvalidSecret {
            mode,
            secret: secret.to_string(),
        };
        match mode {
            GameMode::NumberGuess => {
                let guess = parse_number(guess)?;
                let secret = parse_number(secret).map_err(bad_secret)?;
                Ok(Self::NumberGuess { secret, guess })
            }
            GameMode::BullsCows => {
                let guess = Code::parse(guess)?;
                let secret = Code::parse(secret).map_err(bad_secret)?;
                Ok(Self::BullsCows { secret, guess })
            }
        }
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::NumberGuess { .. } => GameMode::NumberGuess,
            Self::BullsCows { .. } => GameMode::BullsCows,
        }
    }

    /// The guess in canonical form: `+007` becomes `7`, ` 4021 ` becomes `4021`.
    #[must_use]
    pub fn canonical_guess(&self) -> String {
        match self {
            Self::NumberGuess { guess, .. } => guess.to_string(),
            Self::BullsCows { guess, .. } => guess.to_string(),
        }
    }
}

/// Count bulls and cows between two digit strings of equal length.
///
/// Cows use multiset intersection: each value is matched at most as many
/// times as it occurs in both inputs, minus the positional matches. This
/// stays correct when either side repeats a digit.
#[must_use]
pub fn bulls_and_cows(secret: &[u8], guess: &[u8]) -> (usize, usize) {
    let bulls = secret.iter().zip(guess).filter(|(s, g)| s == g).count();

    let mut secret_counts = [0usize; 256];
    let mut guess_counts = [0usize; 256];
    for &d in secret {
        secret_counts[usize::from(d)] += 1;
    }
    for &d in guess {
        guess_counts[usize::from(d)] += 1;
    }
    let common: usize = secret_counts
        .iter()
        .zip(&guess_counts)
        .map(|(&s, &g)| s.min(g))
        .sum();

    (bulls, common - bulls)
}

/// Apply one guess to an active session.
///
/// Attempts always go up by one. A winning guess ends the round as `Won`
/// whatever the remaining lives; any other guess costs a life and ends the
/// round as `Lost` when none are left.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn evaluate(play: &Play, session: &GameSession) -> (GameSession, GuessOutcome) {
    let mut next = session.clone();
    next.attempts = next.attempts.saturating_add(1);

    let hint = match *play {
        Play::NumberGuess { secret, guess } => {
            if guess == secret {
                next.status = SessionStatus::Won;
                return (next, GuessOutcome::Won);
            }
            if guess < secret {
                Hint::TooLow
            } else {
                Hint::TooHigh
            }
        }
        Play::BullsCows { secret, guess } => {
            let (bulls, cows) = bulls_and_cows(secret.digits(), guess.digits());
            if bulls == CODE_LENGTH {
                next.status = SessionStatus::Won;
                return (next, GuessOutcome::Won);
            }
            Hint::Score {
                bulls: bulls as u8,
                cows: cows as u8,
            }
        }
    };

    next.lives = next.lives.saturating_sub(1);
    if next.lives == 0 {
        next.status = SessionStatus::Lost;
        let secret = next.secret.clone();
        (next, GuessOutcome::Lost { secret, hint })
    } else {
        (next, GuessOutcome::Hint(hint))
    }
}
