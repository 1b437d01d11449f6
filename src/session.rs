//! One quiz session from start to stored run.
//!
//! Storage problems never stop the quiz: they are logged and the session
//! carries on, and the returned report shows whether the run was saved.

use rand::Rng;
use serde::Serialize;
use std::io::{self, Write};

use crate::config::{Config, OutputFormat};
use crate::quiz::input::AnswerSource;
use crate::quiz::{write_summary, QuizOutcome, QuizRunner};
use crate::storage::{RunRecord, Store};

/// What a finished session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub outcome: QuizOutcome,
    /// Row id of the stored run, `None` when it could not be saved
    pub run_id: Option<i64>,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    #[serde(flatten)]
    record: &'a RunRecord,
    run_id: Option<i64>,
}

/// Open the database and create the tables, logging any failure.
fn prepare_store(config: &Config) -> Option<Store> {
    let store = match Store::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Could not open run history, results will not be saved");
            return None;
        }
    };

    if let Err(e) = store.initialize_schema() {
        tracing::error!(error = %e, "Schema initialization failed");
    }

    // Runs for unknown users are still recorded.
    match store.user_exists(config.user_id) {
        Ok(true) => {}
        Ok(false) => tracing::warn!(user_id = config.user_id, "User not found in users table"),
        Err(e) => tracing::error!(error = %e, "User lookup failed"),
    }

    Some(store)
}

fn save_run(store: Option<&Store>, record: &RunRecord) -> Option<i64> {
    let store = store?;
    match store.record_run(record) {
        Ok(id) => {
            tracing::info!(
                run_id = id,
                user_id = record.user_id,
                score = record.score,
                "Run recorded"
            );
            Some(id)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to record run");
            None
        }
    }
}

/// Run a full session: prepare storage, play, print the summary, save.
///
/// Only console I/O errors are returned.
pub fn run_session<R, A, W>(
    config: &Config,
    rng: &mut R,
    answers: &mut A,
    out: &mut W,
) -> io::Result<SessionReport>
where
    R: Rng,
    A: AnswerSource + ?Sized,
    W: Write + ?Sized,
{
    let store = prepare_store(config);

    tracing::info!(
        user_id = config.user_id,
        num_of_letters = %config.num_of_letters,
        loops = config.loops,
        "Starting quiz"
    );
    let runner = QuizRunner::new(config.num_of_letters, config.loops);
    let outcome = runner.run(rng, answers, out)?;

    if config.output == OutputFormat::Text {
        write_summary(out, &outcome)?;
    }

    let record = RunRecord::now(config.user_id, config.num_of_letters, &outcome);
    let run_id = save_run(store.as_ref(), &record);

    if config.output == OutputFormat::Json {
        let summary = JsonSummary {
            record: &record,
            run_id,
        };
        serde_json::to_writer(&mut *out, &summary)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(SessionReport { outcome, run_id })
}
