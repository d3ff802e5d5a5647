use crate::error::GameError;
use crate::mode::GameMode;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CODE_LENGTH: usize = 4;

/// A bulls-and-cows code: four distinct decimal digits.
///
/// Digits are stored as values `0..=9`, not ASCII.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code([u8; CODE_LENGTH]);

impl Code {
    /// Parse a trimmed string of exactly four distinct ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, GameError> {
        let raw = raw.trim();
        if raw.chars().count() != CODE_LENGTH {
            return Err(GameError::invalid_guess(
                GameMode::BullsCows,
                format!("expected {CODE_LENGTH} digits, got '{raw}'"),
            ));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, c) in digits.iter_mut().zip(raw.chars()) {
            let Some(value) = c.to_digit(10) else {
                return Err(GameError::invalid_guess(
                    GameMode::BullsCows,
                    format!("'{c}' is not a digit"),
                ));
            };
            *slot = value as u8;
        }

        Self::from_digits(digits).ok_or_else(|| {
            GameError::invalid_guess(GameMode::BullsCows, "digits must not repeat")
        })
    }

    /// Build a code from digit values, or `None` if any digit is out of
    /// range or repeated.
    #[must_use]
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Option<Self> {
        let mut seen = [false; 10];
        for &d in &digits {
            let slot = seen.get_mut(usize::from(d))?;
            if *slot {
                return None;
            }
            *slot = true;
        }
        Some(Self(digits))
    }

    pub(crate) const fn from_distinct(digits: [u8; CODE_LENGTH]) -> Self {
        Self(digits)
    }

    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Code {
    type Error = GameError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

/// Parse a number-guess entry as a signed decimal integer.
pub fn parse_number(raw: &str) -> Result<i64, GameError> {
    let raw = raw.trim();
    raw.parse::<i64>().map_err(|_| {
        GameError::invalid_guess(
            GameMode::NumberGuess,
            format!("'{raw}' is not a whole number"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(result: Result<Code, GameError>) {
        assert!(matches!(
            result,
            Err(GameError::InvalidGuessFormat {
                mode: GameMode::BullsCows,
                ..
            })
        ));
    }

    #[test]
    fn test_code_parse_valid() {
        let code = Code::parse("1234").unwrap();
        assert_eq!(code.digits(), &[1, 2, 3, 4]);
        assert_eq!(code.to_string(), "1234");
    }

    #[test]
    fn test_code_parse_trims_whitespace() {
        assert_eq!(Code::parse("  9876\n").unwrap().to_string(), "9876");
    }

    #[test]
    fn test_code_parse_allows_leading_zero() {
        assert_eq!(Code::parse("0123").unwrap().digits(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_code_parse_rejects_bad_shapes() {
        assert_invalid(Code::parse("123")); // Too short
        assert_invalid(Code::parse("12345")); // Too long
        assert_invalid(Code::parse("12a4")); // Non-digit
        assert_invalid(Code::parse("1123")); // Repeated digit
        assert_invalid(Code::parse("")); // Empty
        assert_invalid(Code::parse("１２３４")); // Full-width digits
    }

    #[test]
    fn test_from_digits() {
        assert!(Code::from_digits([5, 0, 9, 1]).is_some());
        assert!(Code::from_digits([5, 5, 9, 1]).is_none());
        assert!(Code::from_digits([10, 0, 9, 1]).is_none());
    }

    #[test]
    fn test_code_serde_as_string() {
        let code = Code::parse("5081").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"5081\"");
        assert!(serde_json::from_str::<Code>("\"5581\"").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42").unwrap(), 42);
        assert_eq!(parse_number(" -7 ").unwrap(), -7);
        assert!(matches!(
            parse_number("forty"),
            Err(GameError::InvalidGuessFormat {
                mode: GameMode::NumberGuess,
                ..
            })
        ));
        assert!(parse_number("4.2").is_err());
    }
}
