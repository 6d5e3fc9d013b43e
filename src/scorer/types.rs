use serde::Serialize;

/// A decrypted text paired with its quadgram score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub text: String,
    pub score: f64,
}

impl Candidate {
    pub fn new(text: String, score: f64) -> Self {
        Self { text, score }
    }

    /// Strictly higher score wins; ties keep `self`.
    pub fn is_beaten_by(&self, other: &Candidate) -> bool {
        other.score > self.score
    }
}
