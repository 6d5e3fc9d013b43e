use crate::alphabet::clean_indices;
use crate::config::SearchParams;
use crate::error::CipherResult;
use crate::optimizer::{hill_climb, ClimbOutcome};
use crate::scorer::{Candidate, QuadgramScorer, QUADGRAM_LEN};
use crate::substitution::SubstitutionKey;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy)]
pub struct AttackOptions {
    pub attempts: usize,
    pub stagnation_limit: usize,
}

impl Default for AttackOptions {
    fn default() -> Self {
        Self::from(&SearchParams::default())
    }
}

impl From<&SearchParams> for AttackOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            attempts: params.attempts,
            stagnation_limit: params.stagnation_limit,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptSummary {
    pub attempt: usize,
    pub seed: u64,
    pub score: f64,
    pub iterations: usize,
    pub accepted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttackResult {
    pub best: Candidate,
    pub key: SubstitutionKey,
    pub best_attempt: usize,
    pub attempts: Vec<AttemptSummary>,
}

/// Receives every finished attempt. With attempts running in parallel the
/// call order is not the attempt order.
pub trait AttemptCallback: Send + Sync {
    fn on_attempt(&self, attempt: usize, outcome: &ClimbOutcome);
}

/// Callback that ignores everything.
pub struct Silent;

impl AttemptCallback for Silent {
    fn on_attempt(&self, _attempt: usize, _outcome: &ClimbOutcome) {}
}

/// Random-restart driver: runs independent hill-climbing attempts and keeps
/// the highest-scoring decryption.
pub struct Attacker<'a> {
    scorer: &'a QuadgramScorer,
    options: AttackOptions,
}

impl<'a> Attacker<'a> {
    pub fn new(scorer: &'a QuadgramScorer, options: AttackOptions) -> CipherResult<Self> {
        SearchParams {
            attempts: options.attempts,
            stagnation_limit: options.stagnation_limit,
        }
        .validate()?;
        Ok(Self { scorer, options })
    }

    pub fn options(&self) -> &AttackOptions {
        &self.options
    }

    /// Per-attempt seeds are drawn from `rng` up front, so the outcome depends
    /// only on the state of `rng` and not on how attempts are scheduled.
    /// Equal scores resolve to the earliest attempt.
    pub fn run<CB: AttemptCallback>(
        &self,
        ciphertext: &str,
        rng: &mut fastrand::Rng,
        callback: &CB,
    ) -> AttackResult {
        let opts = &self.options;
        let letter_count = clean_indices(ciphertext).len();
        if letter_count < QUADGRAM_LEN {
            warn!(
                "Ciphertext has only {} letters; every key scores the same",
                letter_count
            );
        }

        let seeds: Vec<u64> = (0..opts.attempts).map(|_| rng.u64(..)).collect();
        let start_time = Instant::now();

        let outcomes: Vec<ClimbOutcome> = seeds
            .par_iter()
            .enumerate()
            .map(|(i, &seed)| {
                let outcome = hill_climb(
                    self.scorer,
                    ciphertext,
                    opts.stagnation_limit,
                    fastrand::Rng::with_seed(seed),
                );
                debug!(
                    "Attempt {} converged: score {:.2} after {} iterations ({} accepted)",
                    i + 1,
                    outcome.best.score,
                    outcome.iterations,
                    outcome.accepted
                );
                callback.on_attempt(i, &outcome);
                outcome
            })
            .collect();

        let mut best_attempt = 0;
        for (i, outcome) in outcomes.iter().enumerate() {
            if outcomes[best_attempt].best.is_beaten_by(&outcome.best) {
                best_attempt = i;
            }
        }

        let attempts = outcomes
            .iter()
            .zip(&seeds)
            .enumerate()
            .map(|(i, (o, &seed))| AttemptSummary {
                attempt: i,
                seed,
                score: o.best.score,
                iterations: o.iterations,
                accepted: o.accepted,
            })
            .collect();

        let winner = &outcomes[best_attempt];
        info!(
            "Attack finished: {} attempts in {:.2}s, best score {:.2} (attempt {})",
            opts.attempts,
            start_time.elapsed().as_secs_f32(),
            winner.best.score,
            best_attempt + 1
        );

        AttackResult {
            best: winner.best.clone(),
            key: winner.key,
            best_attempt,
            attempts,
        }
    }
}

/// Convenience wrapper with the default attempt count and stagnation bound.
pub fn break_substitution(
    scorer: &QuadgramScorer,
    ciphertext: &str,
    rng: &mut fastrand::Rng,
) -> AttackResult {
    let attacker = Attacker {
        scorer,
        options: AttackOptions::default(),
    };
    attacker.run(ciphertext, rng, &Silent)
}
