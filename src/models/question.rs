use serde::Serialize;

use crate::error::InvalidQuestion;

/// A single multiple-choice question.
///
/// Fields are private so a `Question` can only exist once its correct
/// index has been checked against its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Minimum number of options a question must offer.
    pub const MIN_OPTIONS: usize = 2;

    pub fn new<T, O>(text: T, options: Vec<O>, correct_index: usize) -> Result<Self, InvalidQuestion>
    where
        T: Into<String>,
        O: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        match options.len() {
            0 => return Err(InvalidQuestion::NoOptions),
            n if n < Self::MIN_OPTIONS => return Err(InvalidQuestion::TooFewOptions(n)),
            _ => {}
        }

        if correct_index >= options.len() {
            return Err(InvalidQuestion::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            text: text.into(),
            options,
            correct_index,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    /// The first option that is not the answer.
    pub fn first_incorrect_index(&self) -> usize {
        if self.correct_index == 0 { 1 } else { 0 }
    }
}
