//! Where quiz answers come from.
//!
//! The runner only sees [`AnswerSource`], so the blocking console read can be
//! swapped for a scripted source in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A source of one answer line per round.
pub trait AnswerSource {
    /// Block until the next answer line is available.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn next_answer(&mut self) -> io::Result<Option<String>>;
}

/// Reads answers line by line from any buffered reader.
#[derive(Debug)]
pub struct LineAnswers<R> {
    reader: R,
}

impl<R: BufRead> LineAnswers<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineAnswers<io::StdinLock<'static>> {
    /// Answers typed on standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> AnswerSource for LineAnswers<R> {
    fn next_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Answers fixed up front.
#[derive(Debug, Default, Clone)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(&mut self) -> io::Result<Option<String>> {
        Ok(self.answers.pop_front())
    }
}
