//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::WORD_LENGTH;
use crate::game::{Game, MAX_GUESSES, Outcome, Submission};
use crate::lexicon::Lexicon;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub config: &'a GameConfig,
    pub lexicon: &'a Lexicon,
    pub game: Game<'a>,
    pub rng: StdRng,
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

/// Results across the games of one session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won in `n` guesses
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    fn record(&mut self, outcome: Outcome) {
        self.total_games += 1;
        if let Outcome::Won { guesses } = outcome {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(config: &'a GameConfig, lexicon: &'a Lexicon) -> Self {
        let mut rng = config.rng();
        let game = config.new_game(lexicon, &mut rng);

        Self {
            config,
            lexicon,
            game,
            rng,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the word in {MAX_GUESSES} tries. Type a word and press Enter."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// True once the current game has ended
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.game.outcome().is_some()
    }

    /// Submit whatever is in the input buffer
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input) {
            Ok(Submission::Scored(_)) => self.after_scored(),
            Ok(Submission::WrongLength(_)) => {
                self.add_message(
                    &format!("Not a {WORD_LENGTH}-letter word"),
                    MessageStyle::Error,
                );
                self.input_buffer = input;
            }
            Ok(Submission::NotInWordList(word)) => {
                self.add_message(
                    &format!("{} not in word list", word.to_uppercase()),
                    MessageStyle::Error,
                );
                self.input_buffer = input;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn after_scored(&mut self) {
        let Some(outcome) = self.game.outcome() else {
            let left = self.game.state().guesses_remaining();
            self.add_message(
                &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                MessageStyle::Info,
            );
            return;
        };

        self.stats.record(outcome);
        let answer = self.game.answer().text().to_uppercase();

        match outcome {
            Outcome::Won { guesses } => {
                let celebration = match guesses {
                    1 => "HOLE IN ONE!",
                    2 => "MAGNIFICENT!",
                    3 => "SPLENDID!",
                    4 => "GREAT JOB!",
                    5 => "NICE WORK!",
                    _ => "PHEW!",
                };
                self.add_message(
                    &format!("{celebration} Found {answer} in {guesses}."),
                    MessageStyle::Success,
                );
            }
            Outcome::Lost => {
                self.add_message(
                    &format!("Game over. The word was {answer}"),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game = self.config.new_game(self.lexicon, &mut self.rng);
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
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.is_finished() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_LENGTH {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored before an
/// event loop error is returned.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, event::read);

    let restored = restore_terminal(&mut terminal);
    if let Err(err) = &res {
        log::error!("event loop failed: {err:#}");
    }

    res.and(restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<()>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
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

    log::info!(
        "session ended: {} of {} games won",
        app.stats.games_won,
        app.stats.total_games
    );
    Ok(())
}
