use std::collections::BTreeSet;

use wordle_sieve::{
    filter_candidates, is_valid, rank::letter_frequencies, rank_candidates, Constraints, Round,
    Session, Word, WordList,
};

fn list(words: &[&str]) -> WordList {
    words.iter().map(|w| Word::new(w).unwrap()).collect()
}

fn played(rounds: &[(&str, &str)]) -> Constraints {
    let mut constraints = Constraints::new();
    for (guess, feedback) in rounds {
        let round = Round::parse(guess, feedback).unwrap();
        constraints.apply(&round.guess, &round.feedback);
    }
    constraints
}

#[test]
fn crane_then_final_e() {
    let constraints = played(&[("crane", "xxxxg")]);
    assert_eq!(constraints.confirmed()[4], Some('e'));
    for c in ['c', 'r', 'a', 'n'] {
        assert!(constraints.absent().contains(&c));
    }

    let words = list(&["crane", "slate", "trace"]);
    let trace = Word::new("trace").unwrap();
    assert!(!is_valid(&trace, &constraints));
    // `slate` ends in `e` but holds the ruled out `a`
    assert!(!is_valid(&Word::new("slate").unwrap(), &constraints));
    assert!(filter_candidates(&words, &constraints).is_empty());

    let words = list(&["crane", "slate", "trace", "stole"]);
    assert_eq!(filter_candidates(&words, &constraints), ["stole"]);
}

#[test]
fn yellow_first_letter() {
    let constraints = played(&[("abcde", "yxxxx")]);
    assert_eq!(constraints.present()[&'a'], BTreeSet::from([0]));
    assert_eq!(
        constraints.absent(),
        &['b', 'c', 'd', 'e'].into_iter().collect::<BTreeSet<_>>()
    );

    assert!(!is_valid(&Word::new("axiom").unwrap(), &constraints));
    // no `a` anywhere
    assert!(!is_valid(&Word::new("hotly").unwrap(), &constraints));
    assert!(is_valid(&Word::new("squat").unwrap(), &constraints));
}

#[test]
fn repeated_guess_letter() {
    let constraints = played(&[("sassy", "gxxyx")]);
    assert!(!constraints.absent().contains(&'s'));
    assert_eq!(constraints.confirmed()[0], Some('s'));

    // words with an `s` are not thrown out for it
    let words = list(&["stubs", "shows", "tulip"]);
    assert_eq!(filter_candidates(&words, &constraints), ["stubs", "shows"]);
}

#[test]
fn abide_and_badge() {
    let words = list(&["abide", "badge"]);
    let frequencies = letter_frequencies(words.iter());
    for c in ['a', 'b', 'd', 'e'] {
        assert_eq!(frequencies[&c], 2);
    }
    assert_eq!(frequencies[&'i'], 1);
    assert_eq!(frequencies[&'g'], 1);

    let ranked = rank_candidates(&words);
    assert_eq!(ranked[0].score, 9);
    assert_eq!(ranked[1].score, 9);
    assert_eq!(ranked[0].word, "abide");
    assert_eq!(ranked[1].word, "badge");
}

#[test]
fn full_session() {
    let words = list(&[
        "crane", "slate", "trace", "those", "glide", "lodge", "stole", "ghost", "dodge", "pique",
    ]);
    let mut session = Session::new(words).top(3);

    let report = session.submit("crane", "xxxxg").unwrap();
    let left: Vec<String> = report
        .suggestions()
        .iter()
        .map(|s| s.word.to_string())
        .collect();
    assert_eq!(left, ["lodge", "glide", "stole", "dodge", "those", "pique"]);
    assert_eq!(report.top().len(), 3);

    let report = session.submit("lodge", "xyxxg").unwrap();
    assert_eq!(report.number(), 2);
    let left: Vec<String> = report
        .suggestions()
        .iter()
        .map(|s| s.word.to_string())
        .collect();
    assert_eq!(left, ["those"]);

    // malformed rounds are rejected without touching anything
    let before = session.constraints().clone();
    assert!(session.submit("tho", "ggggg").is_err());
    assert!(session.submit("those", "gg").is_err());
    assert_eq!(session.constraints(), &before);
    assert_eq!(session.history().len(), 2);
}
