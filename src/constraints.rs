//! Everything learned from the feedback so far.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
};

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Feedback, Grade, Word, WORD_LEN};

/// The knowledge accumulated over a solving session.
///
/// There are three independent parts:
///
/// 1. `confirmed`: the letter known to sit at each position, if any.
/// 2. `present`: letters known to be in the word, with the positions where
///    they were seen but are known *not* to be.
/// 3. `absent`: letters known to be missing from the word.
///
/// Everything only ever grows. A confirmed slot is only replaced by a later
/// confirmation at the same position. The three parts are never reconciled
/// with each other, so a letter can be both absent and present after
/// contradictory rounds; see [`conflicts()`](Constraints::conflicts()).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Constraints {
    confirmed: [Option<char>; WORD_LEN],
    present: BTreeMap<char, BTreeSet<usize>>,
    absent: BTreeSet<char>,
}

impl Constraints {
    /// Creates a new, empty set of constraints that every word satisfies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one round of feedback into the constraints.
    ///
    /// For each position:
    ///
    /// - [`Grade::Correct`] sets the confirmed letter for that position.
    /// - [`Grade::Almost`] records the position as wrong for that letter.
    /// - [`Grade::Incorrect`] marks the letter absent, but only if the letter
    ///   does not appear anywhere else in the guess. Whatever grade the other
    ///   occurrence got does not matter.
    /// - An unrecognized symbol does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_sieve::{Constraints, Round};
    ///
    /// let mut constraints = Constraints::new();
    /// let round = Round::parse("sassy", "gxxyx")?;
    /// constraints.apply(&round.guess, &round.feedback);
    ///
    /// assert_eq!(constraints.confirmed()[0], Some('s'));
    /// assert!(constraints.absent().contains(&'a'));
    /// // `s` shows up elsewhere in the guess, so its gray is ignored
    /// assert!(!constraints.absent().contains(&'s'));
    /// #
    /// # Ok::<_, wordle_sieve::RoundError>(())
    /// ```
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, (c, grade)) in guess.chars().zip(feedback.grades().iter()).enumerate() {
            match grade {
                Some(Grade::Correct) => self.confirmed[i] = Some(c),
                Some(Grade::Almost) => {
                    self.present.entry(c).or_insert_with(BTreeSet::new).insert(i);
                }
                Some(Grade::Incorrect) => {
                    if !guess.contains_elsewhere(c, i) {
                        self.absent.insert(c);
                    }
                }
                None => {}
            }
        }

        trace!("applied {} {}: {}", guess, feedback, self);
    }

    /// The letter confirmed at each position.
    pub fn confirmed(&self) -> &[Option<char>; WORD_LEN] {
        &self.confirmed
    }

    /// Letters known to be in the word, each with the positions it cannot
    /// occupy.
    pub fn present(&self) -> &BTreeMap<char, BTreeSet<usize>> {
        &self.present
    }

    /// Letters known to be missing from the word.
    pub fn absent(&self) -> &BTreeSet<char> {
        &self.absent
    }

    /// Returns true if nothing has been learned yet.
    pub fn is_empty(&self) -> bool {
        self.confirmed.iter().all(Option::is_none)
            && self.present.is_empty()
            && self.absent.is_empty()
    }

    /// Letters that are marked absent but are also required, either as a
    /// present letter or as a confirmed one.
    ///
    /// This only reports; it never changes the constraints. A non-empty
    /// result usually means a round was typed in wrong, or a guess had a
    /// repeated letter that got one gray and one coloured grade in an
    /// earlier round.
    pub fn conflicts(&self) -> BTreeSet<char> {
        self.absent
            .iter()
            .copied()
            .filter(|c| self.present.contains_key(c) || self.confirmed.contains(&Some(*c)))
            .collect()
    }
}

impl Display for Constraints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in self.confirmed.iter() {
            write!(f, "{}", slot.unwrap_or('_'))?;
        }

        write!(f, " | present:")?;
        for (c, positions) in self.present.iter() {
            write!(f, " {}{:?}", c, positions)?;
        }

        write!(f, " | absent: ")?;
        for c in self.absent.iter() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
