//! abcquiz: an alphabet flashcard quiz with SQLite run history.
//!
//! Each round shows a random uppercase letter and the supervising adult
//! answers `y` when the learner named it. The session is timed and one run
//! record is written to a local SQLite file at the end.
//!
//! # Modules
//!
//! - [`alphabet`]: The fixed letter table and the validated letter count
//! - [`config`]: CLI and environment configuration
//! - [`observability`]: Tracing setup
//! - [`quiz`]: The round loop and the answer input seam
//! - [`session`]: Wires storage, quiz and summary output together
//! - [`storage`]: SQLite persistence layer

// Lint configuration
#![warn(clippy::all)]
#![allow(
    clippy::module_name_repetitions,    // storage::StorageError is fine
    clippy::must_use_candidate,         // Not all functions need #[must_use]
    clippy::missing_errors_doc,         // Error docs can be verbose
    clippy::needless_raw_string_hashes  // r#""# is fine for SQL
)]

pub mod alphabet;
pub mod config;
pub mod observability;
pub mod quiz;
pub mod session;
pub mod storage;
