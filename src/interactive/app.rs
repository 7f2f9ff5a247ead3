//! TUI application state and logic

use crate::game::{Game, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across games played in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }

    fn record(&mut self, status: GameStatus) {
        self.total_games += 1;
        if let GameStatus::Won { turns } = status {
            self.games_won += 1;
            if self.guess_distribution.len() <= turns {
                self.guess_distribution.resize(turns + 1, 0);
            }
            self.guess_distribution[turns] += 1;
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>) -> Self {
        let length = game.config().word_length;
        let turns = game.config().max_turns;

        Self {
            game,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Guess the {length}-letter word in {turns} tries."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "The word changes after every guess to stay out of reach.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.game.config().word_length
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.game.submit(&guess) {
            Ok(turn) => {
                self.input_buffer.clear();

                match self.game.status() {
                    GameStatus::Won { turns } => {
                        self.stats.record(self.game.status());
                        self.add_message(
                            &format!("🎉 Cornered it in {turns}! Press 'n' for a new game."),
                            MessageStyle::Success,
                        );
                    }
                    GameStatus::Lost => {
                        self.stats.record(self.game.status());
                        let answer = self
                            .game
                            .answer()
                            .map_or_else(|| "?".to_string(), |w| w.text().to_uppercase());
                        self.add_message(
                            &format!("Out of guesses. The word was {answer}."),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::InProgress => {
                        self.add_message(
                            &format!(
                                "{}: {} → {} candidates",
                                turn.guess.text().to_uppercase(),
                                turn.pool_before,
                                turn.pool_after
                            ),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(err) => {
                self.add_message(&format!("Not in word list ({err})"), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if self.game.status().is_over() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < self.word_length() {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                if self.input_buffer.len() == self.word_length() {
                    self.submit_guess();
                } else {
                    let length = self.word_length();
                    self.add_message(
                        &format!("Guess must be exactly {length} letters!"),
                        MessageStyle::Error,
                    );
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
