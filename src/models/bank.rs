use std::slice;

use tracing::debug;

use crate::error::QuizError;
use crate::models::Question;

/// The fixed, ordered set of questions for one game.
///
/// Insertion order is presentation order and never changes once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already validated questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        debug!(questions = questions.len(), "question bank built");
        Ok(Self { questions })
    }

    /// Validate and build a bank from `(text, options, correct_index)` entries.
    ///
    /// The first invalid entry aborts construction and its position is
    /// reported in [`QuizError::InvalidQuestion`].
    pub fn from_entries<I, T, O>(entries: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = (T, Vec<O>, usize)>,
        T: Into<String>,
        O: Into<String>,
    {
        let questions = entries
            .into_iter()
            .enumerate()
            .map(|(position, (text, options, correct_index))| {
                Question::new(text, options, correct_index)
                    .map_err(|reason| QuizError::InvalidQuestion { position, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(questions)
    }

    pub fn get(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::IndexOutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false` for a constructed bank.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidQuestion;

    #[test]
    fn test_from_entries_keeps_order() {
        let bank = QuestionBank::from_entries([
            ("first", vec!["a", "b"], 0),
            ("second", vec!["a", "b", "c"], 2),
        ])
        .unwrap();

        assert_eq!(bank.len(), 2);
        assert!(!bank.is_empty());
        let texts: Vec<&str> = bank.iter().map(Question::text).collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn test_from_entries_rejects_empty() {
        let entries: Vec<(&str, Vec<&str>, usize)> = Vec::new();
        assert_eq!(QuestionBank::from_entries(entries), Err(QuizError::EmptyBank));
        assert_eq!(QuestionBank::new(Vec::new()), Err(QuizError::EmptyBank));
    }

    #[test]
    fn test_from_entries_reports_invalid_position() {
        let result = QuestionBank::from_entries([
            ("ok", vec!["a", "b"], 1),
            ("bad", vec!["a", "b"], 5),
        ]);

        assert_eq!(
            result,
            Err(QuizError::InvalidQuestion {
                position: 1,
                reason: InvalidQuestion::CorrectIndexOutOfRange { index: 5, len: 2 },
            })
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let bank = QuestionBank::from_entries([("q", vec!["a", "b"], 0)]).unwrap();

        assert_eq!(bank.get(0).unwrap().text(), "q");
        assert_eq!(
            bank.get(1),
            Err(QuizError::IndexOutOfRange { index: 1, len: 1 })
        );
    }
}
