pub mod mutation;
pub mod runner;

use crate::alphabet::clean_indices;
use crate::scorer::{Candidate, QuadgramScorer};
use crate::substitution::SubstitutionKey;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbState {
    Searching,
    Converged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    Accepted { score: f64 },
    Rejected,
}

/// What survives an attempt once its key search has converged.
#[derive(Debug, Clone, Serialize)]
pub struct ClimbOutcome {
    pub key: SubstitutionKey,
    pub best: Candidate,
    pub iterations: usize,
    pub accepted: usize,
}

/// One hill-climbing attempt against a substitution ciphertext.
///
/// The current key is only ever replaced by a neighbour that scores strictly
/// higher, so `score` never decreases. The attempt converges once
/// `stagnation_limit` consecutive neighbours fail to improve on it.
pub struct Climber<'a> {
    scorer: &'a QuadgramScorer,
    ciphertext: &'a str,

    // Ciphertext letters as alphabet indices, plus a reusable decryption buffer
    letters: Vec<u8>,
    scratch: Vec<u8>,

    key: SubstitutionKey,
    score: f64,

    stagnation: usize,
    stagnation_limit: usize,
    iterations: usize,
    accepted: usize,

    rng: fastrand::Rng,
}

impl<'a> Climber<'a> {
    pub fn new(
        scorer: &'a QuadgramScorer,
        ciphertext: &'a str,
        stagnation_limit: usize,
        mut rng: fastrand::Rng,
    ) -> Self {
        let letters = clean_indices(ciphertext);
        let scratch = vec![0u8; letters.len()];
        let key = mutation::random_key(&mut rng);

        let mut climber = Self {
            scorer,
            ciphertext,
            letters,
            scratch,
            key,
            score: 0.0,
            stagnation: 0,
            stagnation_limit,
            iterations: 0,
            accepted: 0,
            rng,
        };
        climber.score = climber.score_key(&key);
        climber
    }

    /// Score of the ciphertext decrypted under `key`. Identical to
    /// `scorer.score_text(&key.apply(ciphertext))`.
    #[inline(always)]
    pub fn score_key(&mut self, key: &SubstitutionKey) -> f64 {
        for (dst, &src) in self.scratch.iter_mut().zip(&self.letters) {
            *dst = key.map_index(src);
        }
        self.scorer.score_indices(&self.scratch)
    }

    pub fn key(&self) -> SubstitutionKey {
        self.key
    }

    /// Best score so far, which is the score of `key()`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Consecutive rejected neighbours since the last improvement.
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn state(&self) -> ClimbState {
        if self.stagnation >= self.stagnation_limit {
            ClimbState::Converged
        } else {
            ClimbState::Searching
        }
    }

    #[inline(always)]
    pub fn step(&mut self) -> StepOutcome {
        self.iterations += 1;
        let candidate = mutation::neighbour(&self.key, &mut self.rng);
        let candidate_score = self.score_key(&candidate);

        if candidate_score > self.score {
            self.key = candidate;
            self.score = candidate_score;
            self.stagnation = 0;
            self.accepted += 1;
            StepOutcome::Accepted {
                score: candidate_score,
            }
        } else {
            self.stagnation += 1;
            StepOutcome::Rejected
        }
    }

    pub fn best(&self) -> Candidate {
        Candidate::new(self.key.apply(self.ciphertext), self.score)
    }

    pub fn run(mut self) -> ClimbOutcome {
        while self.state() == ClimbState::Searching {
            self.step();
        }
        ClimbOutcome {
            key: self.key,
            best: self.best(),
            iterations: self.iterations,
            accepted: self.accepted,
        }
    }
}

/// Single attempt from a fresh random key.
pub fn hill_climb(
    scorer: &QuadgramScorer,
    ciphertext: &str,
    stagnation_limit: usize,
    rng: fastrand::Rng,
) -> ClimbOutcome {
    Climber::new(scorer, ciphertext, stagnation_limit, rng).run()
}
