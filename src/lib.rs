// Library interface for guess-arena
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod error;
pub mod game_state;
pub mod guess;
pub mod logging;
pub mod mode;
pub mod scoring;
pub mod secret;
pub mod session;
pub mod table;
pub mod tui;

// Re-export commonly used types for easier testing
pub use config::GameSettings;
pub use error::GameError;
pub use game_state::{GameInterface, LOCAL_PLAYER, RoundInfo, UserAction, game_loop};
pub use guess::{Code, parse_number};
pub use mode::GameMode;
pub use scoring::{GuessOutcome, Hint, Play, bulls_and_cows, evaluate};
pub use secret::{generate_code, generate_number, generate_secret};
pub use session::{GameSession, SessionStatus};
pub use table::{MemoryStore, SessionStore, Table, TurnReport};
