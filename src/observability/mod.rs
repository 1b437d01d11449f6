//! Logging infrastructure.
//!
//! Provides structured tracing written to stderr, so log lines never mix
//! with the quiz prompts on stdout.

pub mod tracing;
