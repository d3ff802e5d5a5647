use crate::config::GameSettings;
use crate::error::GameError;
use crate::mode::GameMode;
use crate::session::GameSession;
use crate::table::{SessionStore, Table, TurnReport};
use crate::{debug_log, info_log};
use rand::Rng;

/// Player id used when a single person plays at the terminal.
pub const LOCAL_PLAYER: &str = "local";

/// Action requested by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Everything a front end needs to announce a fresh round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInfo {
    pub mode: GameMode,
    pub lives: u32,
    pub prompt: String,
}

impl RoundInfo {
    #[must_use]
    pub fn new(session: &GameSession, settings: &GameSettings) -> Self {
        let prompt = match session.mode {
            GameMode::NumberGuess => format!(
                "Guess a number between {} and {}",
                settings.min, settings.max
            ),
            GameMode::BullsCows => "Guess the 4-digit code (no repeated digits)".to_string(),
        };
        Self {
            mode: session.mode,
            lives: session.lives,
            prompt,
        }
    }
}

/// Trait for front ends that can drive a round.
/// This allows both CLI and TUI implementations.
pub trait GameInterface {
    fn display_round_started(&mut self, info: &RoundInfo);
    /// `None` means the input was unusable and should simply be asked for again.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_turn(&mut self, report: &TurnReport);
    fn display_rejected_guess(&mut self, error: &GameError);
    fn display_exit_message(&mut self);
}

/// Play rounds of `mode` until the player exits.
///
/// A finished round stays finished: further guesses are rejected until the
/// player asks for a new game. Only a round that cannot be started ends the
/// loop with an error.
pub fn game_loop<S, R, I>(
    table: &mut Table<S>,
    mode: GameMode,
    rng: &mut R,
    interface: &mut I,
) -> Result<(), GameError>
where
    S: SessionStore,
    R: Rng + ?Sized,
    I: GameInterface + ?Sized,
{
    start_round(table, mode, rng, interface)?;

    loop {
        let Some(action) = interface.read_guess() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => start_round(table, mode, rng, interface)?,
            UserAction::Guess(raw) => match table.play(LOCAL_PLAYER, mode, &raw) {
                Ok(report) => interface.display_turn(&report),
                Err(e) => {
                    info_log!("game_loop() - rejected '{}': {}", raw, e);
                    interface.display_rejected_guess(&e);
                }
            },
        }
    }
    Ok(())
}

fn start_round<S, R, I>(
    table: &mut Table<S>,
    mode: GameMode,
    rng: &mut R,
    interface: &mut I,
) -> Result<(), GameError>
where
    S: SessionStore,
    R: Rng + ?Sized,
    I: GameInterface + ?Sized,
{
    let session = table.start(LOCAL_PLAYER, mode, rng)?;
    interface.display_round_started(&RoundInfo::new(&session, table.settings()));
    Ok(())
}
