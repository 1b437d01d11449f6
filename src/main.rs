//! abcquiz: an alphabet flashcard quiz.
//!
//! # Usage
//!
//! ```bash
//! abcquiz <user_id> <num_of_letters> [--loops 10]
//! ```
//!
//! Answer `y` when the letter was named correctly; anything else counts as a
//! miss. Environment variables can also be used:
//! - `ABCQUIZ_DB`: SQLite file for run history
//! - `ABCQUIZ_LOG` / `RUST_LOG`: Log filter (trace, debug, info, warn, error)

use abcquiz::config::Config;
use abcquiz::observability::tracing::init_tracing;
use abcquiz::quiz::input::LineAnswers;
use abcquiz::session::run_session;
use anyhow::Result;
use std::io;

fn main() -> Result<()> {
    // Parse configuration from CLI arguments and environment
    let config = Config::parse_args();

    init_tracing(&config.log_level);

    let mut rng = rand::rng();
    let mut answers = LineAnswers::stdin();
    let mut out = io::stdout().lock();

    let report = run_session(&config, &mut rng, &mut answers, &mut out)?;

    tracing::debug!(
        score = report.outcome.score,
        saved = report.run_id.is_some(),
        "Quiz finished"
    );
    Ok(())
}
