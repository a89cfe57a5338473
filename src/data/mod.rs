//! Built-in question data.

use crate::error::QuizError;
use crate::models::QuestionBank;

/// The five questions shipped with the game, in presentation order.
pub fn sample_bank() -> Result<QuestionBank, QuizError> {
    QuestionBank::from_entries([
        (
            "What comes next in the series: 2, 4, 8, 16, ?",
            vec!["18", "24", "32", "34"],
            2,
        ),
        (
            "Which shape has the most sides?",
            vec!["Hexagon", "Octagon", "Pentagon", "Heptagon"],
            1,
        ),
        ("What is 15% of 200?", vec!["25", "30", "35", "20"], 1),
        (
            "Which number is the odd one out? 3, 5, 7, 9, 11",
            vec!["3", "5", "7", "9"],
            3,
        ),
        (
            "If A=1, B=2... What is the value of the word 'ACE'?",
            vec!["9", "10", "11", "12"],
            0,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_bank() {
        let bank = sample_bank().unwrap();
        assert_eq!(bank.len(), 5);
        assert!(bank.iter().all(|q| q.option_count() == 4));

        let answers: Vec<&str> = bank
            .iter()
            .map(|q| q.options()[q.correct_index()].as_str())
            .collect();
        assert_eq!(answers, ["32", "Octagon", "30", "9", "9"]);
    }
}
