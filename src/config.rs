//! Runtime configuration assembled from command-line arguments.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::session::DEFAULT_AWARD;

/// Which front-end drives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Full-screen terminal interface.
    #[default]
    Tui,
    /// Line-based prompts on stdin/stdout.
    Console,
}

/// What the console does with input it cannot use as an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InvalidInputPolicy {
    /// Ask the same question again.
    #[default]
    Reprompt,
    /// Move on to the next question without scoring.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub on_invalid: InvalidInputPolicy,
    pub award: usize,
    pub json: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            on_invalid: InvalidInputPolicy::default(),
            award: DEFAULT_AWARD,
            json: false,
            log_file: None,
        }
    }
}
