use tracing::debug;

use crate::error::QuizError;
use crate::models::{AppState, Question, QuestionBank};
use crate::session::{FinalScore, QuizSession};

pub const NO_SELECTION_NOTICE: &str = "Please select an answer!";

/// State of the terminal front-end around one [`QuizSession`].
pub struct App<'a> {
    pub state: AppState,
    session: QuizSession<'a>,
    selected_option: Option<usize>,
    notice: Option<String>,
    result_scroll: usize,
}

impl<'a> App<'a> {
    pub fn new(bank: &'a QuestionBank, award: usize) -> Result<Self, QuizError> {
        Ok(Self {
            state: AppState::Welcome,
            session: QuizSession::with_award(bank, award)?,
            selected_option: None,
            notice: None,
            result_scroll: 0,
        })
    }

    pub fn session(&self) -> &QuizSession<'a> {
        &self.session
    }

    /// The question on screen, if the quiz is still running.
    pub fn current_question(&self) -> Option<&'a Question> {
        self.session.current_question().ok()
    }

    pub fn current_question_number(&self) -> usize {
        self.session.current_index() + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.total_questions()
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn final_score(&self) -> Result<FinalScore, QuizError> {
        self.session.final_score()
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, Question::option_count)
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        self.selected_option = Some(match self.selected_option {
            Some(selected) => (selected + 1) % count,
            None => 0,
        });
        self.notice = None;
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        self.selected_option = Some(match self.selected_option {
            Some(selected) => (selected + count - 1) % count,
            None => count - 1,
        });
        self.notice = None;
    }

    /// Select by 0-based index; out-of-range indices are ignored.
    pub fn select_option(&mut self, index: usize) {
        if index < self.option_count() {
            self.selected_option = Some(index);
            self.notice = None;
        }
    }

    pub fn start_quiz(&mut self) {
        self.state = AppState::Quiz;
    }

    /// Submit the highlighted option.
    ///
    /// With nothing selected the turn is kept and a notice is shown.
    pub fn submit_answer(&mut self) {
        let Some(choice) = self.selected_option else {
            self.notice = Some(NO_SELECTION_NOTICE.to_string());
            return;
        };

        match self.session.submit_answer(choice) {
            Ok(_) => {
                self.selected_option = None;
                self.notice = None;
                if self.session.is_complete() {
                    self.state = AppState::Result;
                }
            }
            Err(err) => {
                debug!(%err, "submission rejected");
                self.notice = Some(err.to_string());
            }
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.outcomes().len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.session = QuizSession::with_award(self.session.bank(), self.session.award())?;
        self.state = AppState::Welcome;
        self.selected_option = None;
        self.notice = None;
        self.result_scroll = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_bank;
    use crate::session::DEFAULT_AWARD;

    #[test]
    fn test_submit_without_selection_keeps_turn() {
        let bank = sample_bank().unwrap();
        let mut app = App::new(&bank, DEFAULT_AWARD).unwrap();
        app.start_quiz();

        app.submit_answer();
        assert_eq!(app.notice(), Some(NO_SELECTION_NOTICE));
        assert_eq!(app.current_question_number(), 1);
        assert_eq!(app.state, AppState::Quiz);

        app.select_next_option();
        assert_eq!(app.selected_option(), Some(0));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_selection_wraps() {
        let bank = sample_bank().unwrap();
        let mut app = App::new(&bank, DEFAULT_AWARD).unwrap();
        app.start_quiz();

        app.select_previous_option();
        assert_eq!(app.selected_option(), Some(3));
        app.select_next_option();
        assert_eq!(app.selected_option(), Some(0));

        app.select_option(9);
        assert_eq!(app.selected_option(), Some(0));
        app.select_option(2);
        assert_eq!(app.selected_option(), Some(2));
    }

    #[test]
    fn test_play_through_to_result() {
        let bank = sample_bank().unwrap();
        let mut app = App::new(&bank, DEFAULT_AWARD).unwrap();
        app.start_quiz();

        for choice in [2, 1, 1, 3, 1] {
            app.select_option(choice);
            app.submit_answer();
            assert_eq!(app.selected_option(), None);
        }

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.current_question(), None);
        assert_eq!(
            app.final_score().unwrap(),
            FinalScore {
                score: 40,
                max_score: 50
            }
        );
    }

    #[test]
    fn test_restart_keeps_award() {
        let bank = sample_bank().unwrap();
        let mut app = App::new(&bank, 4).unwrap();
        app.start_quiz();
        app.select_option(2);
        app.submit_answer();
        assert_eq!(app.session().score(), 4);

        app.restart().unwrap();
        assert_eq!(app.session().award(), 4);
        assert_eq!(app.session().max_score(), 20);
    }

    #[test]
    fn test_restart_resets_session() {
        let bank = sample_bank().unwrap();
        let mut app = App::new(&bank, DEFAULT_AWARD).unwrap();
        app.start_quiz();
        app.select_option(2);
        app.submit_answer();
        app.scroll_results_down();

        app.restart().unwrap();
        assert_eq!(app.state, AppState::Welcome);
        assert_eq!(app.session().score(), 0);
        assert_eq!(app.current_question_number(), 1);
        assert_eq!(app.result_scroll(), 0);
    }
}
