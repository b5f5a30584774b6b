//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quiz-challenge
#[derive(Parser, Debug)]
#[command(name = "quiz-challenge")]
#[command(author, version, about = "A countdown quiz game for the terminal")]
#[command(long_about = r#"
Quiz Challenge fetches a question with a set of acceptable answers and
lets you type answers against a countdown timer.

Commands inside the game:
  :start    start (or restart) the countdown
  :reset    reset the timer and fetch a fresh quiz
  :quit     leave the game
Anything else is submitted as an answer.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quiz.toml         Project-level config
3. ~/.config/quiz-challenge/config.toml   Global config
"#)]
pub struct Cli {
    /// Countdown period in seconds (overrides the config file)
    #[arg(short, long, value_name = "SECONDS")]
    pub period: Option<i64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
