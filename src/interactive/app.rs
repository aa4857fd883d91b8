//! TUI application state and logic

use crate::game::{Game, GameSetup, GameStatus};
use crate::wordlists::{Dictionary, LoadStatus, PendingDictionary};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How long to wait for a key before checking on the dictionary loader
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Keep only this many messages
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    loading: Option<Loading>,
    pub game: Option<Game<Dictionary>>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

struct Loading {
    pending: PendingDictionary,
    setup: GameSetup,
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

impl App {
    /// Start with the dictionary still loading; input is ignored until ready
    #[must_use]
    pub fn new(pending: PendingDictionary, setup: GameSetup) -> Self {
        Self {
            loading: Some(Loading { pending, setup }),
            game: None,
            messages: vec![Message {
                text: "Loading dictionary...".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Start with a game that is ready to play
    #[must_use]
    pub fn with_game(game: Game<Dictionary>, load_status: &LoadStatus) -> Self {
        let mut app = Self {
            loading: None,
            game: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.begin(game, load_status);
        app
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.game.is_some()
    }

    /// Check whether the dictionary finished loading and start the game
    ///
    /// Returns `true` on the call that makes the app ready.
    pub fn poll_loading(&mut self) -> bool {
        let Some(loading) = &self.loading else {
            return false;
        };
        let Some((dictionary, status)) = loading.pending.try_finish() else {
            return false;
        };
        let Some(Loading { setup, .. }) = self.loading.take() else {
            return false;
        };

        self.messages.clear();
        self.begin(setup.start(dictionary), &status);
        true
    }

    fn begin(&mut self, game: Game<Dictionary>, load_status: &LoadStatus) {
        if let LoadStatus::Fallback { reason } = load_status {
            self.add_message(
                &format!("Using built-in word list ({reason})"),
                MessageStyle::Error,
            );
        }
        if game.restored() {
            self.add_message("Resumed your saved game.", MessageStyle::Info);
        } else {
            self.add_message("Guess the hidden word!", MessageStyle::Info);
        }
        self.game = Some(game);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Route a key press to the engine
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        // Input is gated until the dictionary is ready
        if !self.is_ready() {
            return;
        }

        if ctrl && key.code == KeyCode::Char('n') {
            self.new_game();
            return;
        }

        let Some(game) = self.game.as_mut() else {
            return;
        };

        if game.session().status().is_terminal() {
            match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => {
                game.type_letter(c);
            }
            KeyCode::Backspace => {
                game.backspace();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.submit() {
            Ok(GameStatus::Won) => {
                let guesses = game.session().rows().len();
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                    3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                    4 => "👏 GREAT JOB! Four guesses! 👏".to_string(),
                    5 => "🎉 NICE WORK! Five guesses! 🎉".to_string(),
                    n => format!("😅 PHEW! Got it in {n}! 😅"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or Esc to quit.", MessageStyle::Info);
            }
            Ok(GameStatus::Lost) => {
                let target = game.session().target().text().to_string();
                self.add_message(&format!("Game over! The word was {target}"), MessageStyle::Error);
                self.add_message("Press 'n' for new game or Esc to quit.", MessageStyle::Info);
            }
            Ok(GameStatus::InProgress) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.new_game();
            self.messages.clear();
            self.add_message("New game started!", MessageStyle::Info);
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
        app.poll_loading();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
