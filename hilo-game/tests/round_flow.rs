use rand::SeedableRng;
use rand::rngs::SmallRng;

use hilo_game::{
    Difficulty, GuessInput, GuessResult, Hint, Round, SECRET_MAX, SECRET_MIN, SessionState, Tier,
    parse_guess,
};

#[test]
fn secrets_stay_in_range() {
    let mut rng = SmallRng::seed_from_u64(1337);
    for _ in 0..500 {
        let round = Round::new(Difficulty::Normal, &mut rng);
        assert!((SECRET_MIN..=SECRET_MAX).contains(&round.secret()));
    }
}

#[test]
fn seeded_rounds_are_reproducible() {
    let mut a = SmallRng::seed_from_u64(99);
    let mut b = SmallRng::seed_from_u64(99);
    for _ in 0..50 {
        let ra = Round::new(Difficulty::Hard, &mut a);
        let rb = Round::new(Difficulty::Hard, &mut b);
        assert_eq!(ra.secret(), rb.secret());
    }
}

#[test]
fn first_attempt_win_is_godlike() {
    let mut round = Round::with_secret(Difficulty::Normal, 57);
    let feedback = round.submit(57);
    assert_eq!(feedback.hint, Hint::Opening);
    assert_eq!(
        feedback.result,
        GuessResult::Won {
            tier: Some(Tier::Godlike)
        }
    );
    assert!(round.is_won());
    assert!(round.is_over());
    assert_eq!(round.attempts(), 1);

    let record = round.into_record();
    assert!(record.won);
    assert_eq!(record.attempts, 1);
    assert_eq!(record.secret, 57);
    assert!(record.elapsed_secs >= 0.0);

    let mut session = SessionState::new();
    session.record_round(record);
    assert_eq!(session.stats().best_score, Some(1));
}

#[test]
fn comparisons_point_at_the_secret() {
    let mut round = Round::with_secret(Difficulty::Normal, 50);
    assert_eq!(round.submit(30).result, GuessResult::TooLow);
    assert_eq!(round.submit(70).result, GuessResult::TooHigh);
    assert_eq!(
        round.submit(50).result,
        GuessResult::Won {
            tier: Some(Tier::Master)
        }
    );
}

#[test]
fn exhausting_the_budget_ends_the_round_as_a_loss() {
    let mut round = Round::with_secret(Difficulty::Hard, 1);
    let budget = round.max_attempts();
    assert_eq!(budget, 8);
    for i in 0..budget {
        assert!(!round.is_over(), "ended early at attempt {i}");
        round.submit(100);
    }
    assert!(round.is_exhausted());
    assert!(!round.is_won());
    assert_eq!(round.remaining(), 0);

    let record = round.into_record();
    assert!(!record.won);
    assert_eq!(record.attempts, budget);

    let mut session = SessionState::new();
    let unlocked = session.record_round(record);
    assert!(unlocked.is_empty());
    assert_eq!(session.stats().total_games, 1);
    assert_eq!(session.stats().wins, 0);
    // The fixed tier for a lost round.
    assert_eq!(Tier::Beginner.label(), "Beginner! More practice needed!");
}

#[test]
fn invalid_input_does_not_consume_an_attempt() {
    let mut round = Round::with_secret(Difficulty::Normal, 50);
    // The front-end loop only calls submit on a parsed value, so a rejected
    // line followed by a valid one advances the counter by exactly 1.
    assert!(parse_guess("abc").is_err());
    assert_eq!(round.attempts(), 0);
    match parse_guess("50") {
        Ok(GuessInput::Value(v)) => {
            round.submit(v);
        }
        other => panic!("expected value, got {other:?}"),
    }
    assert_eq!(round.attempts(), 1);
}

#[test]
fn quit_sentinel_leaves_no_trace() {
    let session = SessionState::new();
    assert_eq!(parse_guess("Q"), Ok(GuessInput::Quit));
    // Aborting means into_record is never called; nothing to append.
    assert_eq!(session.stats().total_games, 0);
    assert!(session.history().is_empty());
}

#[test]
fn hints_tighten_with_the_attempt_number() {
    let mut round = Round::with_secret(Difficulty::Easy, 50);
    assert_eq!(round.submit(10).hint, Hint::Opening);
    assert_eq!(round.submit(45).hint, Hint::VeryClose);
    assert_eq!(round.submit(45).hint, Hint::ExtremelyClose);
    assert_eq!(round.submit(45).hint, Hint::VeryCloseRetry);
    assert_eq!(round.submit(48).hint, Hint::AlmostThere);
}

#[test]
fn remaining_counts_down_from_the_budget() {
    let mut round = Round::with_secret(Difficulty::Normal, 99);
    assert_eq!(round.remaining(), 10);
    round.submit(1);
    round.submit(2);
    assert_eq!(round.remaining(), 8);
}

#[test]
fn easy_win_above_ten_attempts_is_unranked() {
    let mut round = Round::with_secret(Difficulty::Easy, 1);
    for _ in 0..10 {
        round.submit(100);
    }
    let feedback = round.submit(1);
    assert_eq!(feedback.result, GuessResult::Won { tier: None });
    assert_eq!(round.attempts(), 11);
}
