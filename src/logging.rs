//! Tracing subscriber setup.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, Mode};

const DEFAULT_DIRECTIVE: &str = "brain_cell=warn";

/// Install the global subscriber.
///
/// Logs go to `--log-file` when given, otherwise to stderr. The terminal
/// front-end owns the screen, so it gets no subscriber without a log file.
pub fn init(config: &Config) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    match (&config.log_file, config.mode) {
        (Some(path), _) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, Mode::Console) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        (None, Mode::Tui) => {}
    }

    Ok(())
}
