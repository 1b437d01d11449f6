//! The quiz round loop.
//!
//! Each round samples a letter, prompts for it, reads one answer line and
//! scores it. The caller owns the RNG, the answer source and the output, so
//! the loop runs the same against a terminal or a test script.

pub mod input;

use rand::Rng;
use std::io::{self, Write};
use std::time::Instant;

use crate::alphabet::{letter_at, LetterCount};
use input::AnswerSource;

/// Result of a completed quiz loop.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    /// Rounds answered correctly
    pub score: u32,
    /// Rounds played
    pub rounds: u32,
    /// Wall time of the whole loop
    pub elapsed_secs: f64,
}

/// Whether an answer line counts as a correct round.
pub fn is_correct(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Prompt shown for each letter.
pub fn prompt(letter: char) -> String {
    format!("What letter is this '{letter}'?")
}

/// Write the end-of-run summary lines.
pub fn write_summary<W: Write + ?Sized>(out: &mut W, outcome: &QuizOutcome) -> io::Result<()> {
    writeln!(out, "Score: {}", outcome.score)?;
    writeln!(out, "Time: {:.4}", outcome.elapsed_secs)?;
    Ok(())
}

/// Plays a fixed number of rounds over a letter range.
#[derive(Debug, Clone, Copy)]
pub struct QuizRunner {
    letters: LetterCount,
    rounds: u32,
}

impl QuizRunner {
    pub fn new(letters: LetterCount, rounds: u32) -> Self {
        Self { letters, rounds }
    }

    /// Play every round and return the tally.
    ///
    /// An exhausted answer source scores the remaining rounds as incorrect,
    /// so the number of prompts always equals the configured rounds.
    pub fn run<R, A, W>(
        &self,
        rng: &mut R,
        answers: &mut A,
        out: &mut W,
    ) -> io::Result<QuizOutcome>
    where
        R: Rng,
        A: AnswerSource + ?Sized,
        W: Write + ?Sized,
    {
        let start = Instant::now();
        let mut score = 0u32;
        let mut input_closed = false;

        for round in 1..=self.rounds {
            let index = rng.random_range(0..self.letters.get());
            let letter = letter_at(index).ok_or_else(|| {
                io::Error::other(format!("letter index {index} is outside the alphabet"))
            })?;

            writeln!(out, "{}", prompt(letter))?;
            out.flush()?;

            let answer = if input_closed {
                None
            } else {
                answers.next_answer()?
            };
            let correct = match answer {
                Some(answer) => is_correct(&answer),
                None => {
                    if !input_closed {
                        tracing::warn!(round, "Input closed, remaining rounds count as incorrect");
                        input_closed = true;
                    }
                    false
                }
            };
            if correct {
                score += 1;
            }
            tracing::debug!(round, %letter, correct, "Round answered");

            writeln!(out)?;
        }

        let elapsed_secs = start.elapsed().as_secs_f64();

        Ok(QuizOutcome {
            score,
            rounds: self.rounds,
            elapsed_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::ScriptedAnswers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn play(letters: i64, rounds: u32, answers: &[&str]) -> (QuizOutcome, String) {
        let runner = QuizRunner::new(LetterCount::new(letters).unwrap(), rounds);
        let mut rng = StdRng::seed_from_u64(7);
        let mut answers = ScriptedAnswers::new(answers.iter().copied());
        let mut out = Vec::new();
        let outcome = runner.run(&mut rng, &mut answers, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn prompted_letters(output: &str) -> Vec<char> {
        output
            .lines()
            .filter_map(|line| line.strip_prefix("What letter is this '"))
            .filter_map(|rest| rest.chars().next())
            .collect()
    }

    #[test]
    fn test_is_correct() {
        assert!(is_correct("y"));
        assert!(is_correct("Y"));
        assert!(is_correct("  y \t"));
        assert!(!is_correct(""));
        assert!(!is_correct("n"));
        assert!(!is_correct("yes"));
        assert!(!is_correct("yy"));
    }

    #[test]
    fn test_scores_answers() {
        let (outcome, output) = play(5, 3, &["y", "n", "Y"]);
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.rounds, 3);
        assert!(outcome.elapsed_secs >= 0.0);
        assert_eq!(prompted_letters(&output).len(), 3);
    }

    #[test]
    fn test_output_layout() {
        let (_, output) = play(1, 2, &["y", "y"]);
        assert_eq!(output, "What letter is this 'A'?\n\nWhat letter is this 'A'?\n\n");
    }

    #[test]
    fn test_letters_stay_in_range() {
        for letters in 1..=26 {
            let answers = vec!["n"; 50];
            let (_, output) = play(letters, 50, &answers);
            let shown = prompted_letters(&output);
            assert_eq!(shown.len(), 50);
            let last = LetterCount::new(letters).unwrap().letters()[letters as usize - 1];
            assert!(shown.iter().all(|c| ('A'..=last).contains(c)));
        }
    }

    #[test]
    fn test_zero_rounds() {
        let (outcome, output) = play(5, 0, &["y"]);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.rounds, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_closed_input_counts_as_incorrect() {
        let (outcome, output) = play(26, 4, &["y"]);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.rounds, 4);
        assert_eq!(prompted_letters(&output).len(), 4);
    }

    #[test]
    fn test_score_never_exceeds_rounds() {
        for rounds in 0..20 {
            let answers = vec!["y"; 25];
            let (outcome, _) = play(10, rounds, &answers);
            assert_eq!(outcome.score, rounds);
            assert!(outcome.score <= outcome.rounds);
        }
    }

    #[test]
    fn test_write_summary() {
        let outcome = QuizOutcome {
            score: 7,
            rounds: 10,
            elapsed_secs: 12.34567,
        };
        let mut out = Vec::new();
        write_summary(&mut out, &outcome).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Score: 7\nTime: 12.3457\n");
    }
}
