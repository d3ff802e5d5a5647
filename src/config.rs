use crate::error::GameError;
use crate::mode::GameMode;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 100;
pub const DEFAULT_NUMBER_LIVES: u32 = 7;
pub const DEFAULT_BULLS_COWS_LIVES: u32 = 10;

/// Round parameters shared by the secret generator and the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Lowest number-guess secret (inclusive).
    pub min: i64,
    /// Highest number-guess secret (inclusive).
    pub max: i64,
    pub number_lives: u32,
    pub bulls_cows_lives: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            number_lives: DEFAULT_NUMBER_LIVES,
            bulls_cows_lives: DEFAULT_BULLS_COWS_LIVES,
        }
    }
}

impl GameSettings {
    #[must_use]
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_lives(mut self, mode: GameMode, lives: u32) -> Self {
        match mode {
            GameMode::NumberGuess => self.number_lives = lives,
            GameMode::BullsCows => self.bulls_cows_lives = lives,
        }
        self
    }

    /// The closed number-guess range, or `InvalidConfig` when it is empty.
    pub fn number_range(&self) -> Result<RangeInclusive<i64>, GameError> {
        if self.min > self.max {
            return Err(GameError::InvalidConfig(format!(
                "number range {}..={} is empty",
                self.min, self.max
            )));
        }
        Ok(self.min..=self.max)
    }

    #[must_use]
    pub const fn lives_for(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::NumberGuess => self.number_lives,
            GameMode::BullsCows => self.bulls_cows_lives,
        }
    }

    /// Reject settings the generator or the table cannot work with.
    pub fn validate(&self) -> Result<(), GameError> {
        self.number_range()?;
        if self.number_lives == 0 || self.bulls_cows_lives == 0 {
            return Err(GameError::InvalidConfig(
                "starting lives must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
