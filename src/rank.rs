//! Ordering candidates by how common their letters are.

use std::collections::BTreeMap;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Word;

/// A candidate word and its letter-frequency score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Suggestion {
    pub word: Word,
    pub score: u32,
}

/// Counts, for each letter, how many of `words` contain it at least once.
///
/// A letter repeated within one word still counts once for that word.
pub fn letter_frequencies<'a>(words: impl IntoIterator<Item = &'a Word>) -> BTreeMap<char, u32> {
    let mut map = BTreeMap::new();

    words
        .into_iter()
        .flat_map(|word| word.chars().unique())
        .for_each(|c| {
            let key = map.entry(c).or_insert(0);
            *key += 1;
        });

    map
}

/// The sum of the frequencies of the distinct letters in `word`.
pub fn score(word: &Word, frequencies: &BTreeMap<char, u32>) -> u32 {
    word.chars()
        .unique()
        .map(|c| frequencies.get(&c).copied().unwrap_or(0))
        .sum()
}

/// Scores every candidate and sorts them best first.
///
/// The sort is stable: candidates with equal scores stay in the order they
/// were given in. The whole list is returned; cutting it down for display
/// is left to the caller.
///
/// # Examples
///
/// ```rust
/// use wordle_sieve::{rank_candidates, Word};
///
/// let candidates = [Word::new("fuzzy")?, Word::new("stare")?, Word::new("stale")?];
/// let ranked = rank_candidates(&candidates);
///
/// assert_eq!(ranked[0].word, "stare");
/// assert_eq!(ranked[0].score, 9);
/// assert_eq!(ranked[2].word, "fuzzy");
/// #
/// # Ok::<_, wordle_sieve::WordError>(())
/// ```
pub fn rank_candidates(candidates: &[Word]) -> Vec<Suggestion> {
    let frequencies = letter_frequencies(candidates);

    let mut ranked: Vec<_> = candidates
        .iter()
        .map(|&word| Suggestion {
            word,
            score: score(&word, &frequencies),
        })
        .collect();

    // `sort_by` is stable, which keeps ties in word list order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
