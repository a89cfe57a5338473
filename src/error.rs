//! Error types.
//!
//! [`QuizError`] covers everything the quiz core can reject. [`AppError`]
//! is what the presentation adapters return to `main`.

use std::io;

use thiserror::Error;

/// Why a single question failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidQuestion {
    /// The question has no options at all.
    #[error("question has no options")]
    NoOptions,

    /// The question has a single option, so there is nothing to choose.
    #[error("question needs at least 2 options, got {0}")]
    TooFewOptions(usize),

    /// The correct index does not point at one of the options.
    #[error("correct index {index} is outside 0..{len}")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

/// Errors raised by the question bank and quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// An entry handed to the bank failed validation.
    #[error("question {position} is invalid: {reason}")]
    InvalidQuestion {
        position: usize,
        reason: InvalidQuestion,
    },

    /// The bank was built from an empty list.
    #[error("question bank must contain at least one question")]
    EmptyBank,

    /// Indexed access past the end of the bank.
    #[error("question index {index} is out of range for a bank of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A submitted choice does not name one of the current options.
    #[error("choice {choice} is out of range, expected 0..{options}")]
    InvalidChoice { choice: usize, options: usize },

    /// Every question has been answered already.
    #[error("quiz session is already complete")]
    SessionComplete,

    /// The final score was requested before the last answer.
    #[error("quiz session is not complete: {answered} of {total} questions answered")]
    SessionNotComplete { answered: usize, total: usize },

    /// The award is zero, or so large the maximum score cannot be represented.
    #[error("award per correct answer must be at least 1 and keep the maximum score in range")]
    InvalidAward,
}

/// Errors surfaced by the console and terminal front-ends.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),

    /// Input ended while questions were still unanswered.
    #[error("input closed after {answered} of {total} questions")]
    InputClosed { answered: usize, total: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = QuizError::InvalidQuestion {
            position: 2,
            reason: InvalidQuestion::TooFewOptions(1),
        };
        assert_eq!(
            err.to_string(),
            "question 2 is invalid: question needs at least 2 options, got 1"
        );

        let err = QuizError::SessionNotComplete {
            answered: 3,
            total: 5,
        };
        assert!(err.to_string().contains("3 of 5"));
    }

    #[test]
    fn test_app_error_wraps_quiz_error() {
        let err: AppError = QuizError::EmptyBank.into();
        assert!(matches!(err, AppError::Quiz(QuizError::EmptyBank)));
        assert_eq!(
            err.to_string(),
            "question bank must contain at least one question"
        );
    }
}
