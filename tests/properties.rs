use proptest::prelude::*;

use wordle_sieve::{rank::score, rank_candidates, Session, Word, WordList};

/// Grades `guess` against `answer` the way the game does, so the rounds fed
/// to the session never contradict each other.
fn grade(answer: &str, guess: &str) -> String {
    let answer = answer.as_bytes();
    let guess = guess.as_bytes();
    let mut out = [b'x'; 5];
    let mut unused = [0_u8; 26];

    for i in 0..5 {
        if guess[i] == answer[i] {
            out[i] = b'g';
        } else {
            unused[(answer[i] - b'a') as usize] += 1;
        }
    }
    for i in 0..5 {
        let k = (guess[i] - b'a') as usize;
        if out[i] != b'g' && unused[k] > 0 {
            unused[k] -= 1;
            out[i] = b'y';
        }
    }

    out.iter().map(|&b| b as char).collect()
}

fn is_subsequence(short: &[Word], long: &[Word]) -> bool {
    let mut long = long.iter();
    short.iter().all(|w| long.any(|l| l == w))
}

fn word_list(words: &[String]) -> WordList {
    words.iter().map(|w| Word::new(w).unwrap()).collect()
}

#[test]
fn grading_helper() {
    assert_eq!(grade("crane", "crane"), "ggggg");
    assert_eq!(grade("abbey", "babes"), "yyggx");
    assert_eq!(grade("those", "geese"), "xxxgg");
}

proptest! {
    #[test]
    fn candidates_only_shrink(
        answer in "[a-f]{5}",
        mut dictionary in prop::collection::vec("[a-f]{5}", 0..80),
        guesses in prop::collection::vec("[a-f]{5}", 1..6),
    ) {
        dictionary.push(answer.clone());
        let mut session = Session::new(word_list(&dictionary));
        let answer_word = Word::new(&answer).unwrap();
        let mut previous = session.candidates();

        for guess in guesses.iter() {
            session.submit(guess, &grade(&answer, guess)).unwrap();
            let current = session.candidates();

            prop_assert!(is_subsequence(&current, &previous));
            prop_assert!(current.contains(&answer_word));
            previous = current;
        }
    }

    #[test]
    fn candidates_respect_every_constraint(
        answer in "[a-f]{5}",
        dictionary in prop::collection::vec("[a-f]{5}", 0..80),
        guesses in prop::collection::vec("[a-f]{5}", 1..6),
    ) {
        let mut session = Session::new(word_list(&dictionary));
        for guess in guesses.iter() {
            session.submit(guess, &grade(&answer, guess)).unwrap();
        }

        let constraints = session.constraints();
        for word in session.candidates() {
            for (i, slot) in constraints.confirmed().iter().enumerate() {
                if let Some(c) = slot {
                    prop_assert_eq!(word.letter(i), *c);
                }
            }
            for c in constraints.absent() {
                prop_assert!(!word.contains(*c));
            }
            for (&c, positions) in constraints.present() {
                prop_assert!(word.contains(c));
                for &i in positions {
                    prop_assert_ne!(word.letter(i), c);
                }
            }
        }
    }

    #[test]
    fn ranking_is_stable(words in prop::collection::vec("[a-h]{5}", 0..60)) {
        let words = word_list(&words);
        let ranked = rank_candidates(&words);

        prop_assert_eq!(&ranked, &rank_candidates(&words));
        prop_assert_eq!(ranked.len(), words.len());
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));

        let frequencies = wordle_sieve::rank::letter_frequencies(words.iter());
        for suggestion in ranked.iter() {
            prop_assert_eq!(suggestion.score, score(&suggestion.word, &frequencies));
        }

        // within one score, words keep their input order
        for s in ranked.iter().map(|s| s.score) {
            let in_ranking: Vec<Word> = ranked
                .iter()
                .filter(|r| r.score == s)
                .map(|r| r.word)
                .collect();
            let in_input: Vec<Word> = words
                .iter()
                .filter(|w| score(w, &frequencies) == s)
                .copied()
                .collect();
            prop_assert_eq!(in_ranking, in_input);
        }
    }
}
