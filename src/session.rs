//! Progression through a question bank.
//!
//! A [`QuizSession`] is one play-through: it borrows a [`QuestionBank`],
//! walks it front to back exactly once and keeps the running score.
//! Rejected submissions never consume a turn.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::QuizError;
use crate::models::{Question, QuestionBank};

/// Points awarded for a correct answer unless configured otherwise.
pub const DEFAULT_AWARD: usize = 10;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for an answer to the question at this index.
    InProgress(usize),
    /// Every question has been answered.
    Completed,
}

/// The result of one accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub question_index: usize,
    pub choice: usize,
    pub correct: bool,
    pub awarded: usize,
}

/// Score reported once the session is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalScore {
    pub score: usize,
    pub max_score: usize,
}

impl FinalScore {
    pub fn percentage(&self) -> f64 {
        if self.max_score > 0 {
            (self.score as f64 / self.max_score as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    bank: &'a QuestionBank,
    current_index: usize,
    score: usize,
    award: usize,
    outcomes: Vec<AnswerOutcome>,
}

impl<'a> QuizSession<'a> {
    /// Start a session with the default award of 10 points.
    pub fn new(bank: &'a QuestionBank) -> Result<Self, QuizError> {
        Self::with_award(bank, DEFAULT_AWARD)
    }

    pub fn with_award(bank: &'a QuestionBank, award: usize) -> Result<Self, QuizError> {
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        if award == 0 || bank.len().checked_mul(award).is_none() {
            return Err(QuizError::InvalidAward);
        }

        info!(questions = bank.len(), award, "quiz session started");
        Ok(Self {
            bank,
            current_index: 0,
            score: 0,
            award,
            outcomes: Vec::with_capacity(bank.len()),
        })
    }

    pub fn bank(&self) -> &'a QuestionBank {
        self.bank
    }

    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Completed
        } else {
            SessionState::InProgress(self.current_index)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.bank.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Running score, readable at any point.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn award(&self) -> usize {
        self.award
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    pub fn max_score(&self) -> usize {
        self.bank.len() * self.award
    }

    /// Accepted submissions so far, in question order.
    pub fn outcomes(&self) -> &[AnswerOutcome] {
        &self.outcomes
    }

    pub fn current_question(&self) -> Result<&'a Question, QuizError> {
        if self.is_complete() {
            return Err(QuizError::SessionComplete);
        }
        self.bank.get(self.current_index)
    }

    /// Answer the current question with a 0-based option index.
    ///
    /// An out-of-range choice fails with [`QuizError::InvalidChoice`] and
    /// leaves both the index and the score untouched.
    pub fn submit_answer(&mut self, choice: usize) -> Result<AnswerOutcome, QuizError> {
        let question = self.current_question()?;

        let options = question.option_count();
        if choice >= options {
            debug!(
                question = self.current_index,
                choice, options, "choice rejected"
            );
            return Err(QuizError::InvalidChoice { choice, options });
        }

        let correct = question.is_correct(choice);
        let awarded = if correct { self.award } else { 0 };
        let outcome = AnswerOutcome {
            question_index: self.current_index,
            choice,
            correct,
            awarded,
        };

        self.score += awarded;
        self.current_index += 1;
        self.outcomes.push(outcome);
        debug!(
            question = outcome.question_index,
            choice,
            correct,
            score = self.score,
            "answer accepted"
        );

        if self.is_complete() {
            info!(
                score = self.score,
                max_score = self.max_score(),
                "quiz session complete"
            );
        }

        Ok(outcome)
    }

    pub fn final_score(&self) -> Result<FinalScore, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::SessionNotComplete {
                answered: self.current_index,
                total: self.bank.len(),
            });
        }

        Ok(FinalScore {
            score: self.score,
            max_score: self.max_score(),
        })
    }
}
