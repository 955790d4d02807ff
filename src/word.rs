//! Five-letter words.

use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::WordError;

/// The number of letters in every word.
pub const WORD_LEN: usize = 5;

/// A five-letter lowercase word.
///
/// Construction is validated, so every instance holds exactly
/// [`WORD_LEN`] letters from `a` to `z`. Uppercase ASCII input is lowercased.
///
/// # Examples
///
/// ```rust
/// use wordle_sieve::Word;
///
/// let crane = Word::new("Crane")?;
/// assert_eq!(crane, "crane");
/// assert_eq!(crane.letter(0), 'c');
///
/// assert!(Word::new("cranes").is_err());
/// assert!(Word::new("cr4ne").is_err());
/// #
/// # Ok::<_, wordle_sieve::WordError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", try_from = "String", into = "String")
)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

impl Word {
    /// Creates a new [`Word`] from a five letter string.
    pub fn new(word: &str) -> Result<Self, WordError> {
        let len = word.chars().count();
        if len != WORD_LEN {
            return Err(WordError::WrongLength {
                word: word.to_string(),
                len,
            });
        }
        if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::NotAlphabetic(word.to_string()));
        }

        let mut letters = [0; WORD_LEN];
        for (slot, b) in letters.iter_mut().zip(word.bytes()) {
            *slot = b.to_ascii_lowercase();
        }
        Ok(Word { letters })
    }

    /// The letter at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= WORD_LEN`.
    pub fn letter(&self, i: usize) -> char {
        self.letters[i] as char
    }

    /// Iterates over the letters in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|&b| b as char)
    }

    /// Returns true if `c` appears anywhere in the word.
    pub fn contains(&self, c: char) -> bool {
        self.chars().any(|l| l == c)
    }

    /// Returns true if `c` appears at some position other than `i`.
    pub fn contains_elsewhere(&self, c: char, i: usize) -> bool {
        self.chars().enumerate().any(|(j, l)| j != i && l == c)
    }

    /// The word in uppercase, the way it is shown to players.
    pub fn to_uppercase(&self) -> String {
        self.chars().map(|c| c.to_ascii_uppercase()).collect()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.letters.as_slice() == other.as_bytes()
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
