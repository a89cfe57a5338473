//! Line-based console front-end.
//!
//! Reads 1-based answers from any `BufRead` and writes prompts to any
//! `Write`, so the whole play-through can be driven from memory in tests.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::config::{Config, InvalidInputPolicy};
use crate::error::{AppError, QuizError};
use crate::session::{FinalScore, QuizSession};

/// What went wrong with a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    /// Not a number at all.
    Unparsable,
    /// A number, but not one of the option labels.
    OutOfRange,
}

pub struct Console<R, W> {
    input: R,
    output: W,
    on_invalid: InvalidInputPolicy,
    json: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            on_invalid: config.on_invalid,
            json: config.json,
        }
    }

    /// Play the session to completion and report the final score.
    pub fn run(&mut self, session: &mut QuizSession<'_>) -> Result<FinalScore, AppError> {
        writeln!(self.output, "🧠 Welcome to Brain Cell - IQ Quiz Game!")?;

        while !session.is_complete() {
            self.show_question(session)?;
            while !self.play_turn(session)? {}
        }

        let result = session.final_score()?;
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string(&result)?)?;
        } else {
            writeln!(
                self.output,
                "\n🎉 Quiz Completed! Your final score: {}/{}",
                result.score, result.max_score
            )?;
        }
        self.output.flush()?;

        Ok(result)
    }

    fn show_question(&mut self, session: &QuizSession<'_>) -> Result<(), AppError> {
        let question = session.current_question()?;

        writeln!(self.output, "\n{}", question.text())?;
        for (index, option) in question.options().iter().enumerate() {
            writeln!(self.output, "{}) {}", index + 1, option)?;
        }
        Ok(())
    }

    /// Returns true once the current question has been used up.
    fn play_turn(&mut self, session: &mut QuizSession<'_>) -> Result<bool, AppError> {
        let options = session.current_question()?.option_count();
        write!(self.output, "Enter your answer (1-{}): ", options)?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Err(AppError::InputClosed {
                answered: session.current_index(),
                total: session.total_questions(),
            });
        };

        let Ok(number) = line.trim().parse::<i64>() else {
            return self.reject(session, Rejection::Unparsable);
        };
        let Some(choice) = number
            .checked_sub(1)
            .and_then(|choice| usize::try_from(choice).ok())
        else {
            return self.reject(session, Rejection::OutOfRange);
        };

        match session.submit_answer(choice) {
            Ok(outcome) => {
                if outcome.correct {
                    writeln!(self.output, "✅ Correct!")?;
                } else {
                    writeln!(self.output, "❌ Wrong answer.")?;
                }
                Ok(true)
            }
            Err(QuizError::InvalidChoice { .. }) => self.reject(session, Rejection::OutOfRange),
            Err(e) => Err(e.into()),
        }
    }

    fn reject(
        &mut self,
        session: &mut QuizSession<'_>,
        rejection: Rejection,
    ) -> Result<bool, AppError> {
        match self.on_invalid {
            InvalidInputPolicy::Reprompt => {
                let options = session.current_question()?.option_count();
                writeln!(
                    self.output,
                    "Invalid input. Please enter a number between 1 and {}.",
                    options
                )?;
                Ok(false)
            }
            InvalidInputPolicy::Skip => {
                forfeit(session)?;
                match rejection {
                    Rejection::Unparsable => {
                        writeln!(self.output, "Invalid input. Skipping question.")?
                    }
                    Rejection::OutOfRange => writeln!(self.output, "❌ Wrong answer.")?,
                }
                Ok(true)
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Use up the current question without scoring it.
///
/// Goes through the ordinary submit path with an option that is known to
/// be wrong, so the session itself has no notion of a skipped turn.
fn forfeit(session: &mut QuizSession<'_>) -> Result<(), QuizError> {
    let question = session.current_question()?;
    let question_index = session.current_index();
    session.submit_answer(question.first_incorrect_index())?;
    warn!(question = question_index, "turn forfeited on invalid input");
    Ok(())
}
