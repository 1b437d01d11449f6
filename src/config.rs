//! Configuration parsing for abcquiz.
//!
//! Supports:
//! - Positional quiz arguments via clap
//! - Environment variable overrides for the database path and log filter
//! - Defaults matching a plain `abcquiz <user_id> <num_of_letters>` call

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::alphabet::LetterCount;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "abcquiz_app.sqlite3";

/// Rounds played when `--loops` is not given.
pub const DEFAULT_LOOPS: u32 = 10;

/// How the end-of-run summary is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// abcquiz: show random letters and record how many the learner knew.
#[derive(Parser, Debug, Clone)]
#[command(name = "abcquiz")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Id of the user taking the quiz
    #[arg(allow_negative_numbers = true)]
    pub user_id: i64,

    /// Number of letters to sample from, counted from 'A' (1-26)
    pub num_of_letters: LetterCount,

    /// Number of rounds to play
    #[arg(long, default_value_t = DEFAULT_LOOPS)]
    pub loops: u32,

    /// SQLite database file for run history
    #[arg(long, env = "ABCQUIZ_DB", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, env = "ABCQUIZ_LOG", default_value = "warn")]
    pub log_level: String,

    /// Summary output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
