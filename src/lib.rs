#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod word;
pub use word::{Word, WORD_LEN};

pub mod words;
pub use words::WordList;

pub mod feedback;
pub use feedback::{Feedback, Grade, Round};

pub mod constraints;
pub use constraints::Constraints;

pub mod filter;
pub use filter::{filter_candidates, is_valid};

pub mod rank;
pub use rank::{rank_candidates, Suggestion};

pub mod session;
pub use session::{Report, Session};

pub mod render;

/// The errors that `wordle_sieve` can produce.
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("invalid word")]
    Word {
        #[from]
        kind: WordError,
    },

    #[error("round rejected")]
    Round {
        #[from]
        kind: RoundError,
    },

    #[error("general IO error")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("trouble serializing report")]
    Serde(#[from] serde_json::Error),
}

/// Problems with a string that was supposed to be a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// The string does not have exactly [`WORD_LEN`] characters.
    #[error("\"{word}\" has {len} characters, expected 5")]
    WrongLength { word: String, len: usize },

    /// The string contains something other than ASCII letters.
    #[error("\"{0}\" contains characters other than a-z")]
    NotAlphabetic(String),
}

/// Problems with a guess/feedback pair typed in by the user.
///
/// A round that fails with one of these never reaches the
/// [`Constraints`], so the session is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("bad guess")]
    Guess(#[from] WordError),

    #[error("feedback has {0} characters, expected 5")]
    FeedbackLength(usize),
}

pub type Result<T> = std::result::Result<T, SieveError>;
