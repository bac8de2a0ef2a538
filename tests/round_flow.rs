//! End-to-end round scenarios driven through the public engine API.

use std::time::{Duration, Instant};

use viselitsa::core::round::{Round, MAX_MISTAKES, ROUND_SECONDS};
use viselitsa::Category;

#[test]
fn full_round_with_ticks_and_guesses() {
    let t0 = Instant::now();
    let mut round = Round::from_word(Category::Space, "РАКЕТА", Some(true), t0);

    round.tick(t0 + Duration::from_secs(5));
    assert_eq!(round.remaining_seconds, ROUND_SECONDS - 5);

    round.guess('Р');
    round.guess('Ы'); // wrong
    round.tick(t0 + Duration::from_secs(10));
    round.guess('А');
    round.guess('К');
    round.guess('Е');
    assert!(!round.is_over());

    round.guess('Т');
    assert!(round.won);
    assert_eq!(round.mistakes, 1);
    assert_eq!(round.wrong_letters(), vec!['Ы']);

    // Frozen: later ticks and guesses change nothing.
    round.tick(t0 + Duration::from_secs(500));
    round.guess('Б');
    assert!(round.won);
    assert!(!round.lost);
    assert_eq!(round.mistakes, 1);
}

#[test]
fn timer_expiry_loses_an_active_round() {
    let t0 = Instant::now();
    let mut round = Round::from_word(Category::Nature, "ОКЕАН", Some(true), t0);
    round.guess('О');

    let mut secs = 0;
    while !round.is_over() {
        secs += 1;
        assert!(secs <= ROUND_SECONDS, "round never expired");
        round.tick(t0 + Duration::from_secs(secs));
    }
    assert!(round.lost);
    assert!(!round.won);
    assert_eq!(round.remaining_seconds, 0);
    assert_eq!(secs, ROUND_SECONDS);
}

#[test]
fn timeout_beats_completion_when_both_hold() {
    // Guess Е with the rule off (one mistake, Ё stays hidden), finish the
    // other letters, then flip the rule on: every letter now counts as
    // shown, but the toggle never resolves, so the round is still active.
    // The next tick past the deadline must record the loss on time — the
    // timeout branch comes before the completion check.
    let t0 = Instant::now();
    let mut round = Round::from_word(Category::YoWords, "ЁЛКА", Some(false), t0);
    round.guess('Е');
    round.guess('Л');
    round.guess('К');
    round.guess('А');
    assert!(!round.is_over());
    round.toggle_equivalence();
    assert!(round.all_letters_shown());
    assert!(!round.is_over());

    round.tick(t0 + Duration::from_secs(ROUND_SECONDS + 1));
    assert!(round.lost);
    assert!(!round.won);
}

#[test]
fn remaining_seconds_never_increase() {
    let t0 = Instant::now();
    let mut round = Round::from_word(Category::Space, "КВАНТ", Some(true), t0);
    let mut last = round.remaining_seconds;
    for s in [1u64, 3, 3, 10, 40, 89, 90, 95] {
        round.tick(t0 + Duration::from_secs(s));
        assert!(round.remaining_seconds <= last);
        last = round.remaining_seconds;
    }
    assert_eq!(last, 0);
}

#[test]
fn mixed_wrong_guesses_and_hints_reach_the_cap() {
    let mut round = Round::from_word(Category::Tech, "ПИТОН", Some(true), Instant::now());
    round.guess('Ж'); // 1
    round.guess('З'); // 2
    assert!(round.reveal_hint()); // 3
    round.guess('Щ'); // 4
    round.guess('Ш'); // 5
    assert_eq!(round.mistakes, 5);
    round.guess('Ц'); // 6
    assert!(round.lost);
    assert_eq!(round.mistakes, MAX_MISTAKES);
}

#[test]
fn hints_alone_can_win_a_short_word() {
    let mut round = Round::from_word(Category::YoWords, "ЁЛКА", Some(true), Instant::now());
    for _ in 0..4 {
        assert!(round.reveal_hint());
    }
    assert!(round.won);
    assert_eq!(round.mistakes, 4);
}

#[test]
fn equivalence_carry_over_matches_the_play_again_contract() {
    let first = Round::from_word(Category::Space, "ВИХРЬ", Some(false), Instant::now());
    let next = Round::new(first.category, Some(first.eyo_equivalence), Instant::now());
    assert_eq!(next.category, Category::Space);
    assert!(!next.eyo_equivalence);
    assert!(next.used.is_empty());
    assert!(!next.is_over());
}
