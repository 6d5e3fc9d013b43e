pub mod engine;
pub mod loader;
pub mod types;

pub use self::types::Candidate;
use crate::alphabet::{letter_index, ALPHABET_LEN};
use tracing::debug;

pub const QUADGRAM_LEN: usize = 4;
pub const TABLE_SIZE: usize = ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN;

/// Occurrence count standing in for a quadgram that was never observed.
const FLOOR_COUNT: f64 = 0.01;

/// English quadgram model. Scores are `log10(count / total)`; quadgrams
/// missing from the table get `log10(0.01 / total)`.
pub struct QuadgramScorer {
    // Flattened 26^4 table of log10 probabilities, floor-filled
    log_probs: Vec<f64>,
    floor: f64,
    total: u64,
    known: usize,
}

impl QuadgramScorer {
    /// Builds the model from `(quadgram, count)` pairs. Every count feeds the
    /// total, but only 4-letter ASCII keys are scorable. Repeated keys add up;
    /// a zero count behaves like an unseen quadgram.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut counts = vec![0u64; TABLE_SIZE];
        let mut total: u64 = 0;
        let mut skipped = 0usize;

        for (quad, count) in entries {
            total = total.saturating_add(count);
            match quad_index(quad.as_ref()) {
                Some(idx) => counts[idx] = counts[idx].saturating_add(count),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Quadgram table: {} entries are not 4-letter keys", skipped);
        }

        // An empty table degenerates to every quadgram scoring the floor
        let denom = if total == 0 { 1.0 } else { total as f64 };
        let floor = (FLOOR_COUNT / denom).log10();

        let mut known = 0;
        let log_probs = counts
            .iter()
            .map(|&c| {
                if c == 0 {
                    floor
                } else {
                    known += 1;
                    (c as f64 / denom).log10()
                }
            })
            .collect();

        Self {
            log_probs,
            floor,
            total,
            known,
        }
    }

    /// Counts every overlapping quadgram of a training text.
    pub fn from_text(corpus: &str) -> Self {
        let letters = crate::alphabet::clean_indices(corpus);
        let mut counts = vec![0u64; TABLE_SIZE];
        for w in letters.windows(QUADGRAM_LEN) {
            counts[engine::window_index(w)] += 1;
        }
        let entries = counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(idx, &c)| (index_to_quad(idx), c));
        Self::new(entries)
    }

    /// Score of a single quadgram; anything that is not four letters scores the floor.
    pub fn score(&self, quadgram: &str) -> f64 {
        quad_index(quadgram)
            .map(|idx| self.log_probs[idx])
            .unwrap_or(self.floor)
    }

    /// English-ness of arbitrary text.
    pub fn score_text(&self, text: &str) -> f64 {
        engine::score_text(self, text)
    }

    /// Same as `score_text` for text already reduced to alphabet indices.
    #[inline(always)]
    pub fn score_indices(&self, letters: &[u8]) -> f64 {
        engine::score_indices(self, letters)
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Number of distinct scorable quadgrams with a non-zero count.
    pub fn len(&self) -> usize {
        self.known
    }

    pub fn is_empty(&self) -> bool {
        self.known == 0
    }

    #[inline(always)]
    pub(crate) fn log_prob_at(&self, idx: usize) -> f64 {
        self.log_probs[idx]
    }
}

fn quad_index(quad: &str) -> Option<usize> {
    let mut idx = 0;
    let mut len = 0;
    for c in quad.chars() {
        len += 1;
        if len > QUADGRAM_LEN {
            return None;
        }
        idx = idx * ALPHABET_LEN + letter_index(c)?;
    }
    (len == QUADGRAM_LEN).then_some(idx)
}

fn index_to_quad(mut idx: usize) -> String {
    let mut buf = [b'A'; QUADGRAM_LEN];
    for slot in buf.iter_mut().rev() {
        *slot = b'A' + (idx % ALPHABET_LEN) as u8;
        idx /= ALPHABET_LEN;
    }
    String::from_utf8_lossy(&buf).into_owned()
}
