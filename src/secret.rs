//! Secret generation for both game modes.
//!
//! The random source is always passed in so rounds can be replayed from a
//! seed:
//!
//! ```
//! use guess_arena::{GameMode, GameSettings, generate_secret};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let settings = GameSettings::default();
//! let a = generate_secret(GameMode::BullsCows, &settings, &mut ChaCha8Rng::seed_from_u64(7))?;
//! let b = generate_secret(GameMode::BullsCows, &settings, &mut ChaCha8Rng::seed_from_u64(7))?;
//! assert_eq!(a, b);
//! # Ok::<(), guess_arena::GameError>(())
//! ```

use crate::config::GameSettings;
use crate::error::GameError;
use crate::guess::{CODE_LENGTH, Code};
use crate::mode::GameMode;
use rand::Rng;
use rand::seq::SliceRandom;

/// Produce the secret for a new round, in the string form sessions store.
///
/// Fails with [`GameError::InvalidConfig`] when number-guess is asked for
/// with an empty range.
pub fn generate_secret<R: Rng + ?Sized>(
    mode: GameMode,
    settings: &GameSettings,
    rng: &mut R,
) -> Result<String, GameError> {
    match mode {
        GameMode::NumberGuess => Ok(generate_number(settings, rng)?.to_string()),
        GameMode::BullsCows => Ok(generate_code(rng).to_string()),
    }
}

/// Uniform integer from the settings' closed range.
pub fn generate_number<R: Rng + ?Sized>(settings: &GameSettings, rng: &mut R) -> Result<i64, GameError> {
    let range = settings.number_range()?;
    Ok(rng.gen_range(range))
}

/// Four distinct digits with a non-zero first digit.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> Code {
    let first = rng.gen_range(1..=9u8);
    let mut rest: Vec<u8> = (0..=9u8).filter(|&d| d != first).collect();
    rest.shuffle(rng);

    let mut digits = [first; CODE_LENGTH];
    digits[1..].copy_from_slice(&rest[..CODE_LENGTH - 1]);
    // `rest` never contains `first`, and shuffling keeps its digits distinct.
    Code::from_distinct(digits)
}
