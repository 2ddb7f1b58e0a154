//! TUI application state and logic

use crate::commands::GameSetup;
use crate::core::ConfigError;
use crate::game::{GameSession, Key, MessageSlot, Notice, dispatch};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use std::io;
use std::time::{Duration, Instant};

/// How often the event loop wakes up to expire messages
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub setup: GameSetup,
    pub session: GameSession,
    pub message: MessageSlot,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Screen areas of the on-screen keys from the last draw
    pub key_hitboxes: Vec<(Rect, Key)>,
}

/// Results across the games played in this process
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, notice: &Notice) {
        match notice {
            Notice::Won { guesses } => {
                self.total_games += 1;
                self.games_won += 1;
                if self.guess_distribution.len() <= *guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[*guesses] += 1;
            }
            Notice::Lost { .. } => self.total_games += 1,
            Notice::IncompleteGuess { .. } => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the setup cannot start a session.
    pub fn new(setup: GameSetup) -> Result<Self, ConfigError> {
        let session = setup.new_session()?;
        let mut message = MessageSlot::new();
        message.show("Guess the word! Type or click the keys.", Instant::now());

        Ok(Self {
            setup,
            session,
            message,
            stats: Statistics::default(),
            should_quit: false,
            key_hitboxes: Vec::new(),
        })
    }

    /// Apply one game key
    pub fn press(&mut self, key: Key, now: Instant) {
        if let Some(notice) = dispatch(&mut self.session, key) {
            self.stats.record(&notice);
            self.message.show(notice.to_string(), now);
        }
    }

    /// Apply a click on the on-screen keyboard, if it hit a key
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        let hit = self
            .key_hitboxes
            .iter()
            .find(|(area, _)| area.contains(Position::new(column, row)))
            .map(|&(_, key)| key);

        if let Some(key) = hit {
            self.press(key, now);
        }
    }

    /// Whether 'n' starts another game right now
    #[must_use]
    pub fn can_start_new_game(&self) -> bool {
        self.setup.practice && self.session.state().is_over()
    }

    /// Start a fresh practice game
    pub fn new_game(&mut self, now: Instant) {
        if !self.can_start_new_game() {
            return;
        }
        match self.setup.new_session() {
            Ok(session) => {
                self.session = session;
                self.message.show("New game started!", now);
            }
            Err(e) => self.message.show(format!("Could not start game: {e}"), now),
        }
    }

    /// Advance the clock
    pub fn tick(&mut self, now: Instant) {
        self.message.clear_expired(now);
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        let mut hitboxes = Vec::new();
        terminal.draw(|f| hitboxes = super::rendering::ui(f, &app, now))?;
        app.key_hitboxes = hitboxes;

        if !event::poll(TICK)? {
            continue;
        }

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let now = Instant::now();
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n' | 'N') if app.can_start_new_game() => {
                        app.new_game(now);
                    }
                    KeyCode::Char(c) => {
                        if let Some(game_key) = Key::from_char(c) {
                            app.press(game_key, now);
                        }
                    }
                    KeyCode::Backspace => app.press(Key::Backspace, now),
                    KeyCode::Enter => app.press(Key::Enter, now),
                    _ => {}
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(mouse.column, mouse.row, Instant::now());
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
