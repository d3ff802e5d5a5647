use crate::config::{DEFAULT_MAX, DEFAULT_MIN, GameSettings};
use crate::error::GameError;
use crate::game_state::{GameInterface, RoundInfo, UserAction};
use crate::mode::GameMode;
use crate::scoring::{GuessOutcome, Hint};
use crate::table::TurnReport;
use clap::Parser;
use std::io::BufRead;

/// Number-guess and bulls-and-cows in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Game to play
    #[arg(short, long, value_enum, default_value_t = GameMode::NumberGuess)]
    pub mode: GameMode,

    /// Lowest secret for number-guess (inclusive)
    #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    pub min: i64,

    /// Highest secret for number-guess (inclusive)
    #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    pub max: i64,

    /// Starting lives for the selected mode
    #[arg(short, long)]
    pub lives: Option<u32>,

    /// Seed for reproducible secrets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the full-screen terminal UI
    #[arg(long)]
    pub tui: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Round settings requested on the command line. Not validated yet.
    #[must_use]
    pub fn settings(&self) -> GameSettings {
        let settings = GameSettings::default().with_range(self.min, self.max);
        match self.lives {
            Some(lives) => settings.with_lives(self.mode, lives),
            None => settings,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// One-line summary of a turn, shared by the CLI and the TUI.
#[must_use]
pub fn outcome_message(report: &TurnReport) -> String {
    match &report.outcome {
        GuessOutcome::Won => format!(
            "Correct! You won in {} attempt{}.",
            report.attempts,
            if report.attempts == 1 { "" } else { "s" }
        ),
        GuessOutcome::Hint(hint) => hint_message(*hint),
        GuessOutcome::Lost { secret, hint } => {
            format!("{} Out of lives! The secret was {secret}.", hint_message(*hint))
        }
    }
}

#[must_use]
pub fn hint_message(hint: Hint) -> String {
    match hint {
        Hint::TooLow => "Too small!".to_string(),
        Hint::TooHigh => "Too large!".to_string(),
        Hint::Score { bulls, cows } => format!("Bulls: {bulls}, Cows: {cows}"),
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter your guess (or 'next' for a new game, 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        // End of input behaves like 'exit'.
        Ok(0) | Err(_) => return Some(UserAction::Exit),
        Ok(_) => {}
    }
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "" => None,
        "exit" | "quit" => Some(UserAction::Exit),
        "next" | "new" => Some(UserAction::NewGame),
        _ => Some(UserAction::Guess(input.to_string())),
    }
}

pub fn display_round_started(info: &RoundInfo) {
    println!("=== {} ===", info.mode);
    println!("{}. You have {} lives.", info.prompt, info.lives);
}

pub fn display_turn(report: &TurnReport) {
    println!("{}", outcome_message(report));
    println!(
        "Lives: {} | Attempts: {}",
        report.lives, report.attempts
    );
    if report.is_round_over() {
        println!("Type 'next' to play again or 'exit' to quit.");
    }
}

pub fn display_rejected_guess(error: &GameError) {
    println!("{error}");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round_started(&mut self, info: &RoundInfo) {
        display_round_started(info);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        read_guess(&mut self.reader)
    }

    fn display_turn(&mut self, report: &TurnReport) {
        display_turn(report);
    }

    fn display_rejected_guess(&mut self, error: &GameError) {
        display_rejected_guess(error);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
