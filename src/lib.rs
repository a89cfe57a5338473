//! # brain-cell
//!
//! A small multiple-choice IQ quiz. The engine ([`QuestionBank`] and
//! [`QuizSession`]) has no I/O of its own; a full-screen terminal
//! front-end and a line-based console front-end both drive it through the
//! same handful of calls.
//!
//! ## Usage
//!
//! ```rust
//! use brain_cell::{QuestionBank, QuizError, QuizSession};
//!
//! fn main() -> Result<(), QuizError> {
//!     let bank = QuestionBank::from_entries([
//!         ("2, 4, 8, 16, ?", vec!["18", "24", "32", "34"], 2),
//!     ])?;
//!     let mut session = QuizSession::new(&bank)?;
//!
//!     session.submit_answer(2)?;
//!
//!     let result = session.final_score()?;
//!     assert_eq!((result.score, result.max_score), (10, 10));
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod console;
mod data;
mod error;
pub mod logging;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use config::{Config, InvalidInputPolicy, Mode};
pub use console::Console;
pub use data::sample_bank;
pub use error::{AppError, InvalidQuestion, QuizError};
pub use models::{AppState, Question, QuestionBank};
pub use session::{AnswerOutcome, DEFAULT_AWARD, FinalScore, QuizSession, SessionState};

/// A quiz that can be run full-screen in the terminal.
pub struct Quiz<'a> {
    app: App<'a>,
}

impl<'a> Quiz<'a> {
    pub fn new(bank: &'a QuestionBank, config: &Config) -> Result<Self, QuizError> {
        Ok(Self {
            app: App::new(bank, config.award)?,
        })
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the screen until the user quits. Returns the final score
    /// if the session on screen was completed before quitting.
    pub fn run(mut self) -> Result<Option<FinalScore>, AppError> {
        let mut term = terminal::TerminalGuard::enter()?;
        run_event_loop(&mut term, &mut self.app)?;
        Ok(self.app.final_score().ok())
    }

    pub fn app(&self) -> &App<'a> {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App<'a> {
        &mut self.app
    }
}

/// Play a session over stdin/stdout.
pub fn run_console(bank: &QuestionBank, config: &Config) -> Result<FinalScore, AppError> {
    let mut session = QuizSession::with_award(bank, config.award)?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), config);
    console.run(&mut session)
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App<'_>) -> Result<(), AppError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App<'_>, key: KeyCode) -> Result<bool, QuizError> {
    match app.state {
        AppState::Welcome => Ok(handle_welcome_input(app, key)),
        AppState::Quiz => Ok(handle_quiz_input(app, key)),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App<'_>, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App<'_>, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.select_option(digit as usize - 1);
            }
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App<'_>, key: KeyCode) -> Result<bool, QuizError> {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart()?,
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App<'_>, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| handle_input(app, *key).unwrap())
    }

    #[test]
    fn test_keyboard_play_through() {
        let bank = sample_bank().unwrap();
        let mut app = App::new(&bank, DEFAULT_AWARD).unwrap();

        assert!(!press(&mut app, &[KeyCode::Enter]));
        assert_eq!(app.state, AppState::Quiz);

        // Enter with nothing selected keeps the question
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.current_question_number(), 1);
        assert!(app.notice().is_some());

        press(&mut app, &[KeyCode::Char('3'), KeyCode::Enter]);
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Char(' ')]);
        press(&mut app, &[KeyCode::Up, KeyCode::Enter]);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Enter]);

        assert_eq!(app.state, AppState::Result);
        assert_eq!(
            app.final_score().unwrap(),
            FinalScore {
                score: 50,
                max_score: 50
            }
        );
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let bank = sample_bank().unwrap();
        let mut app = App::new(&bank, DEFAULT_AWARD).unwrap();
        press(&mut app, &[KeyCode::Enter]);

        press(&mut app, &[KeyCode::Char('7'), KeyCode::Enter]);
        assert_eq!(app.selected_option(), None);
        assert_eq!(app.current_question_number(), 1);
    }

    #[test]
    fn test_quit_and_restart_from_results() {
        let bank = QuestionBank::from_entries([("q", vec!["a", "b"], 0)]).unwrap();
        let mut app = App::new(&bank, DEFAULT_AWARD).unwrap();
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('1'), KeyCode::Enter]);
        assert_eq!(app.state, AppState::Result);

        assert!(!press(&mut app, &[KeyCode::Char('r')]));
        assert_eq!(app.state, AppState::Welcome);
        assert_eq!(app.session().current_index(), 0);

        assert!(press(&mut app, &[KeyCode::Char('q')]));
    }
}
