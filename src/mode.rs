use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two games a table can host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Guess an integer drawn from a closed range.
    NumberGuess,
    /// Guess a 4-digit code with distinct digits.
    BullsCows,
}

impl GameMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NumberGuess => "Number Guess",
            Self::BullsCows => "Bulls & Cows",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_label() {
        assert_eq!(GameMode::NumberGuess.to_string(), "Number Guess");
        assert_eq!(GameMode::BullsCows.to_string(), "Bulls & Cows");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&GameMode::BullsCows).unwrap();
        assert_eq!(json, "\"bulls_cows\"");
        let mode: GameMode = serde_json::from_str("\"number_guess\"").unwrap();
        assert_eq!(mode, GameMode::NumberGuess);
    }

    #[test]
    fn test_value_enum_names() {
        assert_eq!(
            GameMode::from_str("bulls-cows", true),
            Ok(GameMode::BullsCows)
        );
        assert_eq!(
            GameMode::from_str("number-guess", true),
            Ok(GameMode::NumberGuess)
        );
    }
}
