//! Test utilities for abcquiz integration tests.
//!
//! Provides:
//! - Temporary database fixtures
//! - A seeded session runner with scripted answers

#![allow(dead_code)]

use abcquiz::config::Config;
use abcquiz::quiz::input::ScriptedAnswers;
use abcquiz::session::{run_session, SessionReport};
use abcquiz::storage::Store;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture that manages a temporary database directory.
///
/// The directory is automatically cleaned up when the fixture is dropped.
pub struct TestFixture {
    /// Temporary directory for test database
    pub temp_dir: TempDir,
    /// Path to the database file
    pub db_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with a temporary database directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let db_path = temp_dir.path().join("abcquiz_app.sqlite3");
        Self { temp_dir, db_path }
    }

    /// Config for a session against this fixture's database.
    pub fn config(&self, user_id: i64, letters: u8, loops: u32) -> Config {
        let mut config = Config::try_parse_from([
            "abcquiz".to_string(),
            user_id.to_string(),
            letters.to_string(),
            "--loops".to_string(),
            loops.to_string(),
        ])
        .expect("invalid quiz arguments");
        config.db_path = self.db_path.clone();
        config
    }

    /// Open the fixture database with the schema in place.
    pub fn store(&self) -> Store {
        let store = Store::open(&self.db_path).expect("failed to open store");
        store.initialize_schema().expect("failed to create schema");
        store
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a session with scripted answers and a fixed seed.
///
/// Returns the report and everything written to the console.
pub fn play(config: &Config, answers: &[&str]) -> (SessionReport, String) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut answers = ScriptedAnswers::new(answers.iter().copied());
    let mut out = Vec::new();
    let report = run_session(config, &mut rng, &mut answers, &mut out).expect("session failed");
    (report, String::from_utf8(out).expect("non-utf8 output"))
}

/// Number of prompts in a session transcript.
pub fn prompt_count(output: &str) -> usize {
    output
        .lines()
        .filter(|line| line.starts_with("What letter is this '"))
        .count()
}
