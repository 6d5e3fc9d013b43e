use super::{QuadgramScorer, QUADGRAM_LEN};
use crate::alphabet::{clean_indices, ALPHABET_LEN};

#[inline(always)]
pub fn window_index(w: &[u8]) -> usize {
    let n = ALPHABET_LEN;
    ((w[0] as usize * n + w[1] as usize) * n + w[2] as usize) * n + w[3] as usize
}

pub fn score_text(scorer: &QuadgramScorer, text: &str) -> f64 {
    score_indices(scorer, &clean_indices(text))
}

/// Sums every overlapping window left to right. Fewer than four letters is 0.
#[inline(always)]
pub fn score_indices(scorer: &QuadgramScorer, letters: &[u8]) -> f64 {
    letters
        .windows(QUADGRAM_LEN)
        .fold(0.0, |acc, w| acc + scorer.log_prob_at(window_index(w)))
}
