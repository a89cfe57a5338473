mod bank;
mod question;

pub use bank::QuestionBank;
pub use question::Question;

/// Which screen the terminal front-end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
