//! Narrowing a word list down to the words that fit the constraints.

use crate::{Constraints, Word};

/// Returns true if `word` could still be the answer.
///
/// A word is valid when all of these hold:
///
/// 1. it has the confirmed letter at every confirmed position;
/// 2. it contains no absent letter, at any position;
/// 3. it contains every present letter somewhere, but never at a position
///    where that letter was already seen and rejected.
pub fn is_valid(word: &Word, constraints: &Constraints) -> bool {
    let confirmed = constraints
        .confirmed()
        .iter()
        .enumerate()
        .all(|(i, slot)| slot.map_or(true, |c| word.letter(i) == c));

    confirmed
        && !word.chars().any(|c| constraints.absent().contains(&c))
        && constraints.present().iter().all(|(&c, positions)| {
            word.contains(c) && positions.iter().all(|&i| word.letter(i) != c)
        })
}

/// Keeps the words of `words` that are [valid](is_valid), in their original
/// order.
///
/// This always scans the whole list, so the result depends only on `words`
/// and the current constraints, never on earlier results.
///
/// # Examples
///
/// ```rust
/// use wordle_sieve::{filter_candidates, Constraints, Round, WordList};
///
/// let words = WordList::from_reader("crane\nslate\ntrace\nthose\n".as_bytes())?;
/// let mut constraints = Constraints::new();
/// let round = Round::parse("crane", "xxxxg")?;
/// constraints.apply(&round.guess, &round.feedback);
///
/// let left = filter_candidates(&words, &constraints);
/// assert_eq!(left, ["those"]);
/// #
/// # Ok::<_, wordle_sieve::SieveError>(())
/// ```
pub fn filter_candidates(words: &[Word], constraints: &Constraints) -> Vec<Word> {
    words
        .iter()
        .filter(|word| is_valid(word, constraints))
        .copied()
        .collect()
}
