//! The letter table the quiz samples from.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Uppercase Latin letters in alphabetical order.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Look up the letter at `index`, or `None` past 'Z'.
pub fn letter_at(index: usize) -> Option<char> {
    ALPHABET.get(index).copied()
}

/// Error returned when a letter count falls outside the alphabet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LetterCountError {
    #[error("number of letters must be between 1 and {max}, got {0}", max = ALPHABET.len())]
    OutOfRange(i64),

    #[error("invalid number of letters '{0}'")]
    NotANumber(String),
}

/// How many letters, counted from 'A', a quiz samples from.
///
/// Always within `1..=26`, so every index below the count maps to a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCount(u8);

impl LetterCount {
    /// The whole alphabet.
    pub const ALL: LetterCount = LetterCount(26);

    pub fn new(count: i64) -> Result<Self, LetterCountError> {
        match u8::try_from(count) {
            Ok(n) if (1..=ALPHABET.len()).contains(&usize::from(n)) => Ok(Self(n)),
            _ => Err(LetterCountError::OutOfRange(count)),
        }
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// The letters this count covers, 'A' first.
    pub fn letters(self) -> &'static [char] {
        &ALPHABET[..self.get()]
    }
}

impl FromStr for LetterCount {
    type Err = LetterCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s
            .trim()
            .parse::<i64>()
            .map_err(|_| LetterCountError::NotANumber(s.to_string()))?;
        Self::new(count)
    }
}

impl fmt::Display for LetterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
