//! TUI application state and logic

use crate::core::Verdict;
use crate::game::{Outcome, StateStore};
use crate::session::{Key, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: StateStore> {
    pub session: Session<S>,
    pub messages: Vec<Message>,
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

impl<S: StateStore> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
        };

        if app.session.is_complete() {
            app.announce_result();
        } else {
            let length = app.session.game().word_length();
            app.add_message(
                &format!("Guess the {length}-letter word. Enter submits, Esc quits."),
                MessageStyle::Info,
            );
        }
        app
    }

    /// Route one key event to the session
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.session.is_complete() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
                self.should_quit = true;
            }
            return;
        }

        let input = match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(c) => Key::Letter(c),
            KeyCode::Backspace | KeyCode::Delete => Key::Delete,
            KeyCode::Enter => Key::Enter,
            _ => return,
        };

        self.press(input);
    }

    /// Apply a key to the session and report what happened
    pub fn press(&mut self, key: Key) {
        let pending = self.session.pending().to_string();

        match self.session.press(key) {
            Ok(Some(result)) => match result.verdict {
                Verdict::Invalid => self.add_message(
                    &format!("{} is not in the word list", pending.to_uppercase()),
                    MessageStyle::Error,
                ),
                Verdict::NiceTry | Verdict::Correct => {
                    self.messages.clear();
                    if self.session.is_complete() {
                        self.announce_result();
                    }
                }
            },
            Ok(None) => {}
            Err(e) => {
                self.add_message(&format!("Could not save progress: {e}"), MessageStyle::Error);
                if self.session.is_complete() {
                    self.announce_result();
                }
            }
        }
    }

    fn announce_result(&mut self) {
        let game = self.session.game();
        let (text, style) = match game.outcome() {
            Some(Outcome::Won { guesses: 1 }) => ("🎯 First try!".to_string(), MessageStyle::Success),
            Some(Outcome::Won { guesses }) => {
                (format!("🎉 Solved in {guesses} guesses!"), MessageStyle::Success)
            }
            _ => ("Out of guesses".to_string(), MessageStyle::Error),
        };
        let answer = format!("The correct word is {}", game.secret().to_uppercase());

        self.add_message(&text, style);
        self.add_message(&answer, MessageStyle::Info);
        self.add_message("Press q to quit.", MessageStyle::Info);
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StateStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: StateStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
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
