//! Run records.

use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

use crate::alphabet::LetterCount;
use crate::quiz::QuizOutcome;

/// Format of `runs.run_date`, matching SQLite's `datetime()`.
pub const RUN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A finished run, ready to insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub run_date: String,
    pub user_id: i64,
    pub num_of_letters: u8,
    pub num_of_loops: u32,
    pub score: u32,
    pub time: f64,
}

impl RunRecord {
    /// Build a record for `outcome` stamped with the given local time.
    pub fn new(
        user_id: i64,
        letters: LetterCount,
        outcome: &QuizOutcome,
        run_date: NaiveDateTime,
    ) -> Self {
        Self {
            run_date: run_date.format(RUN_DATE_FORMAT).to_string(),
            user_id,
            num_of_letters: letters.as_u8(),
            num_of_loops: outcome.rounds,
            score: outcome.score,
            time: outcome.elapsed_secs,
        }
    }

    /// Build a record for `outcome` stamped with the current local time.
    pub fn now(user_id: i64, letters: LetterCount, outcome: &QuizOutcome) -> Self {
        Self::new(user_id, letters, outcome, Local::now().naive_local())
    }
}

/// A run read back from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRun {
    pub id: i64,
    pub record: RunRecord,
}

/// Insert a run and return its row id.
pub fn insert_run(conn: &Connection, run: &RunRecord) -> rusqlite::Result<i64> {
    conn.execute(
        r#"
        INSERT INTO runs (run_date, user_id, num_of_letters, num_of_loops, score, time)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            run.run_date,
            run.user_id,
            run.num_of_letters,
            run.num_of_loops,
            run.score,
            run.time
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Whether a user row with this id exists.
pub fn user_exists(conn: &Connection, user_id: i64) -> rusqlite::Result<bool> {
    let found = conn
        .query_row("SELECT 1 FROM users WHERE id = ?1", params![user_id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// All runs for a user in insertion order.
pub fn runs_for_user(conn: &Connection, user_id: i64) -> rusqlite::Result<Vec<StoredRun>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, run_date, user_id, num_of_letters, num_of_loops, score, time
        FROM runs
        WHERE user_id = ?1
        ORDER BY id ASC
        "#,
    )?;
    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok(StoredRun {
                id: row.get(0)?,
                record: RunRecord {
                    run_date: row.get(1)?,
                    user_id: row.get(2)?,
                    num_of_letters: row.get(3)?,
                    num_of_loops: row.get(4)?,
                    score: row.get(5)?,
                    time: row.get(6)?,
                },
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Total number of rows in `runs`.
pub fn run_count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM runs", [], |row| row.get(0))
}
