//! A solving session: one word list, one set of constraints, and the rounds
//! played so far.

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    filter_candidates, rank_candidates, Constraints, Result, Round, Suggestion, Word, WordList,
};

/// How many suggestions a [`Report`] shows unless told otherwise.
pub const DEFAULT_TOP: usize = 20;

/// A solving session.
///
/// Create a new session with [`new()`](Session::new()). You can then
/// configure it using various methods. Note that these configuration methods
/// consume the existing [`Session`] and return a new one.
///
/// Each accepted round is folded into the session's [`Constraints`], and the
/// candidates are recomputed from the full word list and ranked again.
///
/// # Examples
///
/// ```rust
/// use wordle_sieve::{Session, WordList};
///
/// let words = WordList::from_reader("crane\nslate\ntrace\nthose\nglide\n".as_bytes())?;
/// let mut session = Session::new(words).top(1);
///
/// let report = session.submit("crane", "xxxxg")?;
/// assert_eq!(report.remaining(), 2);
/// assert_eq!(report.top().len(), 1);
///
/// // A malformed round changes nothing.
/// assert!(session.submit("crane", "xxg").is_err());
/// assert_eq!(session.history().len(), 1);
/// #
/// # Ok::<_, wordle_sieve::SieveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    words: WordList,
    constraints: Constraints,
    history: Vec<Round>,
    top: usize,
}

impl Session {
    /// Creates a new session over `words` with default configuration.
    ///
    /// Defaults:
    /// 1. nothing is known about the answer
    /// 2. reports show the best [`DEFAULT_TOP`] suggestions
    pub fn new(words: WordList) -> Self {
        Session {
            words,
            constraints: Constraints::new(),
            history: Vec::new(),
            top: DEFAULT_TOP,
        }
    }

    /// Sets how many suggestions each [`Report`] displays.
    pub fn top(self, top: usize) -> Self {
        Session { top, ..self }
    }

    /// Validates a typed guess and feedback, then plays the round.
    ///
    /// If either string is malformed the error is returned and the session
    /// is left exactly as it was.
    pub fn submit(&mut self, guess: &str, feedback: &str) -> Result<Report> {
        let round = Round::parse(guess, feedback)?;
        Ok(self.apply(round))
    }

    /// Plays an already validated round.
    pub fn apply(&mut self, round: Round) -> Report {
        self.constraints.apply(&round.guess, &round.feedback);
        self.history.push(round);

        let candidates = self.candidates();
        debug!(
            "round {} ({}): {} of {} words remain",
            self.history.len(),
            round,
            candidates.len(),
            self.words.len()
        );

        Report {
            round,
            number: self.history.len(),
            suggestions: rank_candidates(&candidates),
            top: self.top,
        }
    }

    /// The words still consistent with everything learned, in word list
    /// order.
    pub fn candidates(&self) -> Vec<Word> {
        filter_candidates(&self.words, &self.constraints)
    }

    /// The current candidates, best first.
    pub fn ranked(&self) -> Vec<Suggestion> {
        rank_candidates(&self.candidates())
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }
}

/// The outcome of one round: the remaining candidates, ranked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Report {
    round: Round,
    number: usize,
    suggestions: Vec<Suggestion>,
    top: usize,
}

impl Report {
    /// The round that produced this report.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Which round of the session this was, starting at 1.
    pub fn number(&self) -> usize {
        self.number
    }

    /// How many candidates are left.
    pub fn remaining(&self) -> usize {
        self.suggestions.len()
    }

    /// Every remaining candidate, best first.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// The suggestions to display.
    pub fn top(&self) -> &[Suggestion] {
        &self.suggestions[..self.top.min(self.suggestions.len())]
    }

    /// Serializes the report as JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
