use std::path::PathBuf;
use std::process;

use brain_cell::{AppError, Config, InvalidInputPolicy, Mode, Quiz, logging, sample_bank};
use clap::Parser;
use tracing::error;

#[derive(Parser, Debug)]
#[command(version, about = "Brain Cell - IQ quiz game", long_about = None)]
struct Args {
    /// Front-end to play with
    #[arg(long, value_enum, default_value_t = Mode::Tui)]
    mode: Mode,

    /// What the console does with input that is not a valid answer
    #[arg(long, value_enum, default_value_t = InvalidInputPolicy::Reprompt)]
    on_invalid: InvalidInputPolicy,

    /// Points awarded per correct answer
    #[arg(long, default_value_t = brain_cell::DEFAULT_AWARD, value_parser = parse_award)]
    award: usize,

    /// Print the final score as JSON (console mode)
    #[arg(long)]
    json: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            mode: args.mode,
            on_invalid: args.on_invalid,
            award: args.award,
            json: args.json,
            log_file: args.log_file,
        }
    }
}

fn parse_award(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("award must be at least 1".to_string()),
        Ok(award) => Ok(award),
        Err(e) => Err(e.to_string()),
    }
}

fn main() {
    let config = Config::from(Args::parse());

    if let Err(e) = logging::init(&config) {
        eprintln!("Error opening log file: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&config) {
        error!(%e, "quiz aborted");
        eprintln!("Error running quiz: {}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let bank = sample_bank()?;

    match config.mode {
        Mode::Console => {
            brain_cell::run_console(&bank, config)?;
        }
        Mode::Tui => {
            if let Some(result) = Quiz::new(&bank, config)?.run()? {
                println!(
                    "🎉 Quiz Completed! Your final score: {}/{}",
                    result.score, result.max_score
                );
            }
        }
    }

    Ok(())
}
