mod common;

use ciphers::optimizer::mutation::pick_swap;
use ciphers::optimizer::runner::{
    break_substitution, AttackOptions, Attacker, AttemptCallback, Silent,
};
use ciphers::optimizer::{hill_climb, ClimbOutcome, ClimbState, Climber, StepOutcome};
use ciphers::scorer::QuadgramScorer;
use ciphers::substitution::SubstitutionKey;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

fn english_scorer() -> &'static QuadgramScorer {
    static SCORER: OnceLock<QuadgramScorer> = OnceLock::new();
    SCORER.get_or_init(|| common::markov_scorer(&common::corpus()))
}

fn secret_key() -> SubstitutionKey {
    let mut rng = fastrand::Rng::with_seed(0xC1_9E25);
    SubstitutionKey::random(&mut rng)
}

#[test]
fn test_pick_swap_positions_are_distinct_and_in_range() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..10_000 {
        let (a, b) = pick_swap(&mut rng);
        assert_ne!(a, b);
        assert!(a < 26 && b < 26);
    }
}

#[test]
fn test_best_score_never_decreases() {
    let scorer = english_scorer();
    let ct = secret_key().encrypt(common::TWO_CITIES);
    let mut climber = Climber::new(scorer, &ct, 500, fastrand::Rng::with_seed(3));

    let mut last = climber.score();
    let mut accepted = 0;
    while climber.state() == ClimbState::Searching {
        match climber.step() {
            StepOutcome::Accepted { score } => {
                assert!(score > last, "accepted {} after {}", score, last);
                accepted += 1;
            }
            StepOutcome::Rejected => {}
        }
        assert!(climber.score() >= last);
        last = climber.score();
    }
    assert_eq!(climber.accepted(), accepted);
    assert_eq!(climber.stagnation(), 500);
    assert!(climber.iterations() >= 500 + accepted);
    assert_eq!(
        climber.score(),
        scorer.score_text(&climber.key().apply(&ct))
    );
}

#[test]
fn test_tracked_score_matches_rescoring_the_text() {
    let scorer = english_scorer();
    let ct = secret_key().encrypt(common::PRIDE);
    let outcome = hill_climb(scorer, &ct, 200, fastrand::Rng::with_seed(11));

    assert_eq!(outcome.best.text, outcome.key.apply(&ct));
    assert_eq!(outcome.best.score, scorer.score_text(&outcome.best.text));
}

#[test]
fn test_zero_stagnation_limit_returns_initial_key() {
    let scorer = english_scorer();
    let outcome = hill_climb(scorer, "SOME TEXT HERE", 0, fastrand::Rng::with_seed(1));
    assert_eq!(outcome.iterations, 0);
    assert_eq!(outcome.accepted, 0);
}

#[test]
fn test_degenerate_ciphertext_still_terminates() {
    let scorer = english_scorer();
    for ct in ["", "abc", "12 !? 34"] {
        let outcome = hill_climb(scorer, ct, 50, fastrand::Rng::with_seed(5));
        assert_eq!(outcome.best.score, 0.0);
        // Nothing ever improves on a constant score
        assert_eq!(outcome.iterations, 50);
        assert_eq!(outcome.accepted, 0);
    }
}

#[test]
fn test_non_letters_survive_decryption() {
    let scorer = english_scorer();
    let outcome = hill_climb(scorer, "Xy, 12 zz!", 20, fastrand::Rng::with_seed(2));
    let text = outcome.best.text;
    assert_eq!(&text[2..7], ", 12 ");
    assert!(text.ends_with('!'));
}

#[test]
fn test_same_seed_same_result() {
    let scorer = english_scorer();
    let ct = secret_key().encrypt(common::TWO_CITIES);
    let options = AttackOptions {
        attempts: 4,
        stagnation_limit: 300,
    };
    let attacker = Attacker::new(scorer, options).unwrap();

    let a = attacker.run(&ct, &mut fastrand::Rng::with_seed(99), &Silent);
    let b = attacker.run(&ct, &mut fastrand::Rng::with_seed(99), &Silent);

    assert_eq!(a.best, b.best);
    assert_eq!(a.key, b.key);
    assert_eq!(a.best_attempt, b.best_attempt);
    let seeds_a: Vec<u64> = a.attempts.iter().map(|s| s.seed).collect();
    let seeds_b: Vec<u64> = b.attempts.iter().map(|s| s.seed).collect();
    assert_eq!(seeds_a, seeds_b);
}

#[test]
fn test_attack_keeps_best_attempt() {
    let scorer = english_scorer();
    let ct = secret_key().encrypt(common::PRIDE);
    let attacker = Attacker::new(
        scorer,
        AttackOptions {
            attempts: 5,
            stagnation_limit: 200,
        },
    )
    .unwrap();
    let result = attacker.run(&ct, &mut fastrand::Rng::with_seed(4), &Silent);

    assert_eq!(result.attempts.len(), 5);
    let max = result
        .attempts
        .iter()
        .map(|a| a.score)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(result.best.score, max);
    assert_eq!(result.attempts[result.best_attempt].score, max);
    // Earliest attempt wins ties
    let first_max = result.attempts.iter().position(|a| a.score == max).unwrap();
    assert_eq!(result.best_attempt, first_max);
}

#[test]
fn test_callback_sees_every_attempt() {
    struct Counter(AtomicUsize);
    impl AttemptCallback for Counter {
        fn on_attempt(&self, _attempt: usize, _outcome: &ClimbOutcome) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let scorer = english_scorer();
    let counter = Counter(AtomicUsize::new(0));
    let attacker = Attacker::new(
        scorer,
        AttackOptions {
            attempts: 3,
            stagnation_limit: 10,
        },
    )
    .unwrap();
    attacker.run("HELLO THERE", &mut fastrand::Rng::with_seed(0), &counter);
    assert_eq!(counter.0.load(Ordering::SeqCst), 3);
}

#[test]
fn test_zero_attempts_rejected() {
    let scorer = english_scorer();
    let options = AttackOptions {
        attempts: 0,
        stagnation_limit: 500,
    };
    assert!(Attacker::new(scorer, options).is_err());
}

#[test]
fn test_recovers_long_english_ciphertext() {
    let scorer = english_scorer();
    let plaintext = common::GETTYSBURG;
    let ct = secret_key().encrypt(plaintext);
    let true_score = scorer.score_text(plaintext);

    let attacker = Attacker::new(scorer, AttackOptions::default()).unwrap();
    let result = attacker.run(&ct, &mut fastrand::Rng::with_seed(2024), &Silent);

    let tolerance = true_score.abs() * 0.03;
    assert!(
        result.best.score >= true_score - tolerance,
        "best {:.2} vs plaintext {:.2}\n{}",
        result.best.score,
        true_score,
        result.best.text
    );
}

#[test]
fn test_recovers_ciphertext_with_counted_quadgram_table() {
    static COUNTED: OnceLock<QuadgramScorer> = OnceLock::new();
    let scorer = COUNTED.get_or_init(|| QuadgramScorer::from_text(&common::corpus()));
    let plaintext = common::GETTYSBURG;
    let ct = secret_key().encrypt(plaintext);
    let true_score = scorer.score_text(plaintext);

    // Floor plateaus are wider with a sparse table, so search harder
    let attacker = Attacker::new(
        scorer,
        AttackOptions {
            attempts: 20,
            stagnation_limit: 2000,
        },
    )
    .unwrap();
    let result = attacker.run(&ct, &mut fastrand::Rng::with_seed(2024), &Silent);

    let tolerance = true_score.abs() * 0.05;
    assert!(
        result.best.score >= true_score - tolerance,
        "best {:.2} vs plaintext {:.2}\n{}",
        result.best.score,
        true_score,
        result.best.text
    );
}

#[test]
fn test_break_substitution_matches_default_attacker() {
    let scorer = english_scorer();
    let ct = secret_key().encrypt("It was the best of times, it was the worst of times.");

    let quick = break_substitution(scorer, &ct, &mut fastrand::Rng::with_seed(8));
    let attacker = Attacker::new(scorer, AttackOptions::default()).unwrap();
    let full = attacker.run(&ct, &mut fastrand::Rng::with_seed(8), &Silent);

    assert_eq!(quick.attempts.len(), 10);
    assert_eq!(quick.key, full.key);
    assert_eq!(quick.best, full.best);
}
