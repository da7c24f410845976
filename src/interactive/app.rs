//! TUI application state and logic

use crate::commands::pick_target;
use crate::core::jamo::is_syllable;
use crate::game::Session;
use crate::wordlists::Dictionary;
use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashSet;
use std::io;

/// Application state
pub struct App {
    pub dictionary: Dictionary,
    pub forced_length: Option<usize>,
    pub session: Session,
    /// In-progress guess row, one cell per target syllable
    pub cells: Vec<Option<char>>,
    /// Highlighted row positions; display-only, never affects scoring
    pub selected: FxHashSet<usize>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app with a fresh random target
    ///
    /// # Errors
    /// Fails when the dictionary has no candidate words (empty file, or
    /// nothing at the forced length).
    pub fn new(dictionary: Dictionary, forced_length: Option<usize>) -> Result<Self> {
        let mut rng = rand::rng();
        let target = pick_target(&dictionary, forced_length, &mut rng)
            .ok_or_else(|| anyhow!("No words in the dictionary"))?;
        let session = Session::new(target);
        let cells = vec![None; session.target().len()];

        let mut app = Self {
            dictionary,
            forced_length,
            session,
            cells,
            selected: FxHashSet::default(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            &format!(
                "The hidden word has {} syllables. Player 1 goes first.",
                app.session.target().len()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Type Hangul syllables, Enter submits, Ctrl-N starts a new round.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Put a syllable into the first blank cell
    ///
    /// Anything outside the composed-syllable range is ignored here; key
    /// bindings are handled before this point.
    pub fn push_char(&mut self, c: char) {
        if self.session.is_over() || !is_syllable(c) {
            return;
        }
        if let Some(slot) = self.cells.iter_mut().find(|cell| cell.is_none()) {
            *slot = Some(c);
        }
    }

    /// Blank the last filled cell
    pub fn pop_char(&mut self) {
        if let Some(slot) = self.cells.iter_mut().rev().find(|cell| cell.is_some()) {
            *slot = None;
        }
    }

    /// Toggle the highlight on a row position
    pub fn toggle_selected(&mut self, index: usize) {
        if index >= self.cells.len() {
            return;
        }
        if !self.selected.insert(index) {
            self.selected.remove(&index);
        }
    }

    /// Submit the current row to the session
    pub fn submit(&mut self) {
        let submitter = self.session.current_player();
        match self.session.submit(&self.cells) {
            Ok(submission) => {
                self.clear_row();
                if submission.won {
                    self.add_message(
                        &format!(
                            "🎉 Player {submitter} wins! The word was {}.",
                            self.session.target()
                        ),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                } else {
                    self.add_message(
                        &format!("Over to Player {}.", self.session.current_player()),
                        MessageStyle::Info,
                    );
                }
            }
            Err(error) => {
                self.add_message(&error.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Start a new round with a fresh target
    pub fn new_round(&mut self) {
        let mut rng = rand::rng();
        if let Some(target) = pick_target(&self.dictionary, self.forced_length, &mut rng) {
            self.session.reset(target);
            self.clear_row();
            self.messages.clear();
            self.add_message(
                &format!(
                    "New round! The hidden word has {} syllables.",
                    self.session.target().len()
                ),
                MessageStyle::Info,
            );
        } else {
            self.add_message("No words in the dictionary", MessageStyle::Error);
        }
    }

    fn clear_row(&mut self) {
        self.cells = vec![None; self.session.target().len()];
        self.selected.clear();
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
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_round();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ if app.session.is_over() => match key.code {
                    // Text entry is closed; plain letters act as commands
                    KeyCode::Char('n') => app.new_round(),
                    KeyCode::Char('q') => app.should_quit = true,
                    _ => {}
                },
                KeyCode::Enter => app.submit(),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Char(c @ '1'..='7') => {
                    if let Some(digit) = c.to_digit(10) {
                        app.toggle_selected(digit as usize - 1);
                    }
                }
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn app_with_target(target: &str) -> App {
        let dictionary = Dictionary::embedded();
        let mut app = App::new(dictionary, None).unwrap();
        app.session.reset(Word::new(target).unwrap());
        app.cells = vec![None; app.session.target().len()];
        app
    }

    #[test]
    fn push_char_fills_cells_left_to_right() {
        let mut app = app_with_target("바나나");
        app.push_char('사');
        app.push_char('과');
        assert_eq!(app.cells, vec![Some('사'), Some('과'), None]);
    }

    #[test]
    fn push_char_ignores_non_hangul() {
        let mut app = app_with_target("바나나");
        app.push_char('x');
        app.push_char('!');
        assert_eq!(app.cells, vec![None, None, None]);
    }

    #[test]
    fn push_char_stops_at_full_row() {
        let mut app = app_with_target("바나나");
        for _ in 0..5 {
            app.push_char('가');
        }
        assert_eq!(app.cells, vec![Some('가'); 3]);
    }

    #[test]
    fn pop_char_blanks_last_filled() {
        let mut app = app_with_target("바나나");
        app.push_char('사');
        app.push_char('과');
        app.pop_char();
        assert_eq!(app.cells, vec![Some('사'), None, None]);
    }

    #[test]
    fn toggle_selected_flips_membership() {
        let mut app = app_with_target("바나나");
        app.toggle_selected(1);
        assert!(app.selected.contains(&1));
        app.toggle_selected(1);
        assert!(!app.selected.contains(&1));
        // Out-of-range indices are ignored
        app.toggle_selected(9);
        assert!(app.selected.is_empty());
    }

    #[test]
    fn submit_clears_row_on_success() {
        let mut app = app_with_target("바나나");
        for c in ['도', '서', '관'] {
            app.push_char(c);
        }
        app.submit();
        assert_eq!(app.cells, vec![None, None, None]);
        assert_eq!(app.session.history(crate::game::Player::One).len(), 1);
    }

    #[test]
    fn submit_keeps_row_on_rejection() {
        let mut app = app_with_target("바나나");
        app.push_char('도');
        app.submit();
        assert_eq!(app.cells, vec![Some('도'), None, None]);
        assert!(app.session.history(crate::game::Player::One).is_empty());
    }
}
