//! TUI application state and logic

use crate::core::{
    ConfigCandidate, ConfigError, ConfigField, MAX_ATTEMPTS_RANGE, Mode, SECRET_LENGTH_RANGE,
    SessionConfig,
};
use crate::provider::SecretProvider;
use crate::session::{GameState, Outcome, RowEditor, SessionError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<P: SecretProvider> {
    provider: P,
    pub screen: Screen,
    pub form: OptionsForm,
    pub game: Option<Game>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Options,
    Playing,
    GameOver,
}

/// A running game: the session plus the row being typed
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub editor: RowEditor,
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

/// Option field on the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Mode,
    SecretLength,
    MaxAttempts,
}

impl OptionField {
    pub const ALL: [Self; 3] = [Self::Mode, Self::SecretLength, Self::MaxAttempts];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mode => "Game mode",
            Self::SecretLength => "Number of characters",
            Self::MaxAttempts => "Number of attempts",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Mode => 0,
            Self::SecretLength => 1,
            Self::MaxAttempts => 2,
        }
    }
}

impl From<ConfigField> for OptionField {
    fn from(field: ConfigField) -> Self {
        match field {
            ConfigField::SecretLength => Self::SecretLength,
            ConfigField::MaxAttempts => Self::MaxAttempts,
        }
    }
}

/// Editable option values, kept as text like the player typed them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsForm {
    pub values: [String; 3],
    pub selected: OptionField,
    pub invalid: Option<OptionField>,
}

impl OptionsForm {
    #[must_use]
    pub fn new(candidate: ConfigCandidate) -> Self {
        Self {
            values: [
                candidate.mode,
                candidate.secret_length,
                candidate.max_attempts,
            ],
            selected: OptionField::Mode,
            invalid: None,
        }
    }

    #[must_use]
    pub fn value(&self, field: OptionField) -> &str {
        &self.values[field.index()]
    }

    #[must_use]
    pub fn candidate(&self) -> ConfigCandidate {
        ConfigCandidate::new(
            self.value(OptionField::Mode),
            self.value(OptionField::SecretLength),
            self.value(OptionField::MaxAttempts),
        )
    }

    pub fn select_next(&mut self) {
        let next = (self.selected.index() + 1) % OptionField::ALL.len();
        self.selected = OptionField::ALL[next];
    }

    pub fn select_previous(&mut self) {
        let len = OptionField::ALL.len();
        let previous = (self.selected.index() + len - 1) % len;
        self.selected = OptionField::ALL[previous];
    }

    /// Step the selected value up or down within its range
    ///
    /// Mode flips between Number and Word. A number that doesn't parse is
    /// reset to the bottom of its range.
    pub fn step(&mut self, up: bool) {
        let field = self.selected;
        let value = &mut self.values[field.index()];

        match field {
            OptionField::Mode => {
                let mode = value.parse::<Mode>().map_or(Mode::Number, Mode::toggled);
                *value = mode.name().to_string();
            }
            OptionField::SecretLength | OptionField::MaxAttempts => {
                let range = if field == OptionField::SecretLength {
                    SECRET_LENGTH_RANGE
                } else {
                    MAX_ATTEMPTS_RANGE
                };
                let stepped = match value.trim().parse::<usize>() {
                    Ok(n) if up => n.saturating_add(1),
                    Ok(n) => n.saturating_sub(1),
                    Err(_) => *range.start(),
                };
                *value = stepped.clamp(*range.start(), *range.end()).to_string();
            }
        }

        if self.invalid == Some(field) {
            self.invalid = None;
        }
    }

    /// Type into the selected field
    pub fn type_char(&mut self, ch: char) {
        let field = self.selected;
        if self.invalid == Some(field) {
            // First keystroke after an error replaces the rejected value
            self.values[field.index()].clear();
            self.invalid = None;
        }
        self.values[field.index()].push(ch);
    }

    pub fn backspace(&mut self) {
        self.values[self.selected.index()].pop();
    }
}

impl<P: SecretProvider> App<P> {
    #[must_use]
    pub fn new(provider: P, initial: ConfigCandidate) -> Self {
        Self {
            provider,
            screen: Screen::Options,
            form: OptionsForm::new(initial),
            game: None,
            messages: vec![Message {
                text: "Choose your options and press Enter to start.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Validate the options and start a game
    pub fn start_game(&mut self) {
        match GameState::start(&self.form.candidate(), &mut self.provider) {
            Ok(state) => {
                let config = *state.config();
                self.begin_play(state, config);
            }
            Err(err) => {
                if let SessionError::Config(config_err) = &err {
                    self.form.invalid = Some(match config_err {
                        ConfigError::InvalidMode(_) => OptionField::Mode,
                        ConfigError::OutOfRange { field, .. } => (*field).into(),
                    });
                }
                self.add_message(&capitalize(&err.to_string()), MessageStyle::Error);
            }
        }
    }

    /// Start another game with the same options
    pub fn play_again(&mut self) {
        let Some(config) = self.game.as_ref().map(|game| *game.state.config()) else {
            self.start_game();
            return;
        };

        match GameState::begin(config, &mut self.provider) {
            Ok(state) => self.begin_play(state, config),
            Err(err) => self.add_message(&capitalize(&err.to_string()), MessageStyle::Error),
        }
    }

    fn begin_play(&mut self, state: GameState, config: SessionConfig) {
        debug!(%config, "Game started from TUI");
        self.game = Some(Game {
            state,
            editor: RowEditor::new(config.mode(), config.secret_length(), 0),
        });
        self.screen = Screen::Playing;
        self.messages.clear();
        self.add_message(
            &format!(
                "Guess the {}-character {}. You have {} attempts.",
                config.secret_length(),
                config.mode().name().to_lowercase(),
                config.max_attempts()
            ),
            MessageStyle::Info,
        );
    }

    /// Submit the row being typed
    pub fn submit(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.state.submit_attempt(game.editor.attempt()) {
            Ok(next) => {
                game.state = next;
                if game.state.is_terminal() {
                    let text = outcome_text(&game.state);
                    let style = if game.state.outcome() == Outcome::Won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.screen = Screen::GameOver;
                    self.add_message(&text, style);
                    self.add_message(
                        "Press Enter to play again, Tab for options, Esc to quit.",
                        MessageStyle::Info,
                    );
                } else {
                    game.editor.start_row(game.state.current_attempt_index());
                }
            }
            Err(err) => self.add_message(&capitalize(&err.to_string()), MessageStyle::Error),
        }
    }

    pub fn back_to_options(&mut self) {
        if let Some(game) = &self.game {
            self.form = OptionsForm::new(ConfigCandidate::from(*game.state.config()));
        }
        self.screen = Screen::Options;
        self.add_message("Choose your options and press Enter to start.", MessageStyle::Info);
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
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Options => match key.code {
                KeyCode::Up | KeyCode::BackTab => self.form.select_previous(),
                KeyCode::Down | KeyCode::Tab => self.form.select_next(),
                KeyCode::Left => self.form.step(false),
                KeyCode::Right => self.form.step(true),
                KeyCode::Backspace => self.form.backspace(),
                KeyCode::Enter => self.start_game(),
                KeyCode::Char(c) => self.form.type_char(c),
                _ => {}
            },
            Screen::Playing => {
                let Some(game) = self.game.as_mut() else {
                    return;
                };
                match key.code {
                    KeyCode::Char(c) => {
                        // Characters outside the alphabet are dropped
                        game.editor.type_char(c);
                    }
                    KeyCode::Backspace => game.editor.backspace(),
                    KeyCode::Left => game.editor.move_left(),
                    KeyCode::Right => game.editor.move_right(),
                    KeyCode::Enter => self.submit(),
                    KeyCode::Tab => self.back_to_options(),
                    _ => {}
                }
            }
            Screen::GameOver => match key.code {
                KeyCode::Enter => self.play_again(),
                KeyCode::Tab => self.back_to_options(),
                _ => {}
            },
        }
    }
}

fn outcome_text(state: &GameState) -> String {
    let Ok(secret) = state.reveal() else {
        return String::new();
    };
    match state.outcome() {
        Outcome::Won => format!(
            "🟢 You cracked {secret} in {} of {} attempts!",
            state.current_attempt_index(),
            state.config().max_attempts()
        ),
        _ => format!("🔴 Out of attempts. The answer was {secret}."),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: SecretProvider>(app: App<P>) -> Result<()> {
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

    res
}

fn run_app<B, P>(terminal: &mut Terminal<B>, mut app: App<P>) -> Result<()>
where
    B: ratatui::backend::Backend,
    P: SecretProvider,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
