//! Colour feedback for a guess.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{RoundError, Word, WORD_LEN};

/// A "grade" that indicates the correctness of one letter in a guess.
///
/// `Correct` means that the letter is in the correct position (green).
/// `Almost` means that the letter is in the word, but not in that position
/// (yellow). `Incorrect` means that the word does not contain that letter
/// (gray).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
pub enum Grade {
    /// The letter guessed is in the correct position.
    Correct,

    /// The letter guessed is in the word, but not there.
    Almost,

    /// The letter guessed is not in the word.
    Incorrect,
}

impl Grade {
    /// Reads one feedback symbol: `g`, `y` or `x`, in either case.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(Grade::Correct),
            'y' => Some(Grade::Almost),
            'x' => Some(Grade::Incorrect),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Grade::Correct => 'g',
            Grade::Almost => 'y',
            Grade::Incorrect => 'x',
        }
    }
}

/// The grades for all five positions of a guess.
///
/// A slot is `None` when the symbol typed for it was not one of `g`, `y` or
/// `x`. Such a slot is kept so the round can still be shown, but it teaches
/// the [`Constraints`](crate::Constraints) nothing.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Feedback {
    grades: [Option<Grade>; WORD_LEN],
}

impl Feedback {
    /// Parses a feedback string such as `"xxyxg"`.
    ///
    /// The string must be exactly five characters long. Unknown symbols are
    /// not an error; they become `None` slots.
    pub fn parse(symbols: &str) -> Result<Self, RoundError> {
        let len = symbols.chars().count();
        if len != WORD_LEN {
            return Err(RoundError::FeedbackLength(len));
        }

        let mut grades = [None; WORD_LEN];
        for (slot, c) in grades.iter_mut().zip(symbols.chars()) {
            *slot = Grade::from_symbol(c);
        }
        Ok(Feedback { grades })
    }

    pub fn grades(&self) -> &[Option<Grade>; WORD_LEN] {
        &self.grades
    }

    /// Positions whose symbol was not recognized.
    pub fn unrecognized(&self) -> impl Iterator<Item = usize> + '_ {
        self.grades
            .iter()
            .enumerate()
            .filter(|(_, g)| g.is_none())
            .map(|(i, _)| i)
    }

    pub fn is_win(&self) -> bool {
        self.grades.iter().all(|g| *g == Some(Grade::Correct))
    }
}

impl From<[Grade; WORD_LEN]> for Feedback {
    fn from(grades: [Grade; WORD_LEN]) -> Self {
        Feedback {
            grades: grades.map(Some),
        }
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for grade in self.grades.iter() {
            write!(f, "{}", grade.map_or('?', Grade::symbol))?;
        }
        Ok(())
    }
}

/// One submitted guess together with the feedback it received.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
}

impl Round {
    /// Validates a guess and a feedback string typed in by the user.
    ///
    /// Both must be exactly five characters long, and the guess must be made
    /// of letters. Surrounding whitespace counts towards the length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_sieve::{Grade, Round, RoundError};
    ///
    /// let round = Round::parse("CRANE", "xxYxg")?;
    /// assert_eq!(round.guess, "crane");
    /// assert_eq!(round.feedback.grades()[2], Some(Grade::Almost));
    ///
    /// assert_eq!(
    ///     Round::parse("crane", "xxxx"),
    ///     Err(RoundError::FeedbackLength(4))
    /// );
    /// #
    /// # Ok::<_, RoundError>(())
    /// ```
    pub fn parse(guess: &str, feedback: &str) -> Result<Self, RoundError> {
        let guess = Word::new(guess)?;
        let feedback = Feedback::parse(feedback)?;
        Ok(Round { guess, feedback })
    }
}

impl Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.guess.to_uppercase(), self.feedback)
    }
}
