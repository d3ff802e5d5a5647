//! TUI (Terminal User Interface) module for guess-arena
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `Board`: terminal-free UI state, key handling and rendering
//! - `TuiInterface`: owns the terminal and implements `GameInterface`
//!
//! # State Machine
//! - `EnteringGuess` → (round won or lost) → `RoundOver` → (N) → `EnteringGuess`

use crate::cli::outcome_message;
use crate::error::GameError;
use crate::game_state::{GameInterface, RoundInfo, UserAction};
use crate::guess::CODE_LENGTH;
use crate::mode::GameMode;
use crate::scoring::{GuessOutcome, Hint};
use crate::table::TurnReport;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_NUMBER_INPUT: usize = 19;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const WARNING_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    RoundOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryRow {
    guess: String,
    outcome: GuessOutcome,
}

impl HistoryRow {
    fn style(&self) -> Style {
        match self.outcome {
            GuessOutcome::Won => SUCCESS_STYLE,
            GuessOutcome::Lost { .. } => ERROR_STYLE,
            GuessOutcome::Hint(Hint::Score { bulls, .. }) if bulls > 0 => WARNING_STYLE,
            GuessOutcome::Hint(_) => Style::new().fg(Color::White),
        }
    }

    fn result_text(&self) -> String {
        match &self.outcome {
            GuessOutcome::Won => "correct".to_string(),
            GuessOutcome::Hint(hint) | GuessOutcome::Lost { hint, .. } => match hint {
                Hint::TooLow => "too small".to_string(),
                Hint::TooHigh => "too large".to_string(),
                Hint::Score { bulls, cows } => format!("{bulls}B {cows}C"),
            },
        }
    }
}

/// Everything shown on screen, kept apart from the terminal so it can be
/// driven and rendered in tests.
#[derive(Debug)]
pub struct Board {
    mode: GameMode,
    prompt: String,
    lives: u32,
    attempts: u32,
    history: Vec<HistoryRow>,
    current_input: String,
    state: TuiState,
    message: String,
    error_message: String,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            mode: GameMode::NumberGuess,
            prompt: String::new(),
            lives: 0,
            attempts: 0,
            history: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
        }
    }
}

impl Board {
    pub fn start_round(&mut self, info: &RoundInfo) {
        self.mode = info.mode;
        self.prompt.clone_from(&info.prompt);
        self.lives = info.lives;
        self.attempts = 0;
        self.history.clear();
        self.current_input.clear();
        self.state = TuiState::EnteringGuess;
        self.message = format!("New {} round. Good luck!", info.mode);
        self.error_message.clear();
    }

    pub fn record_turn(&mut self, report: &TurnReport) {
        self.history.push(HistoryRow {
            guess: report.guess.clone(),
            outcome: report.outcome.clone(),
        });
        self.lives = report.lives;
        self.attempts = report.attempts;
        self.message = outcome_message(report);
        self.error_message.clear();
        if report.is_round_over() {
            self.state = TuiState::RoundOver;
        }
    }

    pub fn reject(&mut self, error: &GameError) {
        self.error_message = error.to_string();
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.state == TuiState::RoundOver
    }

    fn max_input_len(&self) -> usize {
        match self.mode {
            GameMode::NumberGuess => MAX_NUMBER_INPUT,
            GameMode::BullsCows => CODE_LENGTH,
        }
    }

    fn accepts_char(&self, c: char) -> bool {
        match self.mode {
            GameMode::NumberGuess => c.is_ascii_digit() || (c == '-' && self.current_input.is_empty()),
            GameMode::BullsCows => c.is_ascii_digit(),
        }
    }

    /// Apply one key press. Returns an action once the player commits to one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.code == KeyCode::Esc {
            info_log!("Board::handle_key() - ESC pressed, returning Exit");
            return Some(UserAction::Exit);
        }
        if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
            debug_log!("Board::handle_key() - Ignoring key with modifier: {:?}", key.modifiers);
            return None;
        }
        if let KeyCode::Char('n' | 'N') = key.code {
            return Some(UserAction::NewGame);
        }

        match self.state {
            TuiState::RoundOver => None,
            TuiState::EnteringGuess => self.handle_guess_key(key),
        }
    }

    fn handle_guess_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        match key.code {
            KeyCode::Char(c) if self.accepts_char(c) => {
                if self.current_input.len() < self.max_input_len() {
                    self.current_input.push(c);
                }
                None
            }
            KeyCode::Char(c) => {
                self.error_message = format!("'{c}' is not allowed here");
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter if !self.current_input.is_empty() => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("Board::handle_guess_key() - Submitting '{}'", guess);
                Some(UserAction::Guess(guess))
            }
            KeyCode::Enter => {
                self.error_message = "Type a guess first".to_string();
                None
            }
            _ => {
                debug_log!("Board::handle_guess_key() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }

    /// Render the complete UI layout.
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(6),    // Guess history
                Constraint::Length(6), // Info panel
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        self.render_title(f, chunks[0]);
        self.render_history(f, chunks[1]);
        self.render_info(f, chunks[2]);
        self.render_instructions(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(format!("GUESS ARENA - {}", self.mode.label().to_uppercase()))
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_history(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = self
            .history
            .iter()
            .enumerate()
            .map(|(i, row)| {
                Line::from(vec![
                    Span::raw(format!("{:>3}. ", i + 1)),
                    Span::styled(format!("{:<8}", row.guess), row.style()),
                    Span::styled(row.result_text(), row.style()),
                ])
            })
            .collect();

        if self.state == TuiState::EnteringGuess {
            lines.push(Line::from(vec![
                Span::raw(format!("{:>3}. ", self.history.len() + 1)),
                Span::styled(
                    format!("{}_", self.current_input),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ),
            ]));
        }

        // Keep the newest rows visible.
        let skip = lines.len().saturating_sub(usize::from(inner.height));
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
        f.render_widget(Paragraph::new(visible), inner);
    }

    fn render_info(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(self.prompt.clone(), HEADER_STYLE)),
            Line::from(format!("Lives: {} | Attempts: {}", self.lives, self.attempts)),
        ];
        if !self.message.is_empty() {
            lines.push(Line::from(Span::styled(self.message.clone(), MESSAGE_STYLE)));
        }
        if !self.error_message.is_empty() {
            lines.push(Line::from(Span::styled(self.error_message.clone(), ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(&self, f: &mut Frame, area: Rect) {
        let text = match self.state {
            TuiState::EnteringGuess => "Type your guess | ENTER: Submit | N: New game | ESC: Quit",
            TuiState::RoundOver => "N: New game | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Full-screen front end. Restores the terminal when dropped.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Board,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            board: Board::default(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let board = &self.board;
        self.terminal.draw(|f| board.render(f))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn next_action(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(self.board.handle_key(key)),
            _ => {
                debug_log!("next_action() - Ignoring non-key event");
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round_started(&mut self, info: &RoundInfo) {
        self.board.start_round(info);
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.next_action() {
                Ok(Some(action)) => {
                    info_log!("read_guess() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_guess() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_turn(&mut self, report: &TurnReport) {
        self.board.record_turn(report);
        self.draw_or_log();
    }

    fn display_rejected_guess(&mut self, error: &GameError) {
        self.board.reject(error);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.board.message = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
