use crate::alphabet::{clean, rotate, rotate_str, ALPHABET_LEN};
use serde::Serialize;
use std::collections::HashSet;

/// Uppercase word list used to recognise plaintext.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Words are cleaned to their uppercase letters; empty results are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| clean(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaesarCandidate {
    /// Encryption shift that produced the ciphertext.
    pub shift: u8,
    /// Rotation applied to the ciphertext to obtain `text`.
    pub rotation: u8,
    pub matches: usize,
    pub tokens: usize,
    pub text: String,
}

/// Display form of a shift encryption: letters rotate, each whitespace
/// character becomes a space, everything else is dropped, trailing spaces go.
pub fn encrypt(plaintext: &str, shift: i64) -> String {
    let mut out = String::with_capacity(plaintext.len());
    for c in plaintext.chars() {
        if c.is_ascii_alphabetic() {
            out.push(rotate(c, shift));
        } else if c.is_whitespace() {
            out.push(' ');
        }
    }
    out.truncate(out.trim_end_matches(' ').len());
    out
}

pub fn decrypt(ciphertext: &str, shift: i64) -> String {
    // Normalised first: negating i64::MIN overflows
    let shift = shift.rem_euclid(ALPHABET_LEN as i64);
    rotate_str(ciphertext, -shift)
}

/// Tries every rotation and keeps those where a strict majority of the
/// whitespace-separated tokens land in the dictionary. Results are ordered by
/// rotation; an empty vec means no good decryption exists.
pub fn break_caesar(ciphertext: &str, dict: &Dictionary) -> Vec<CaesarCandidate> {
    let tokens: Vec<&str> = ciphertext.split_whitespace().collect();
    let mut results = Vec::new();

    for rotation in 0..ALPHABET_LEN {
        let rotated: Vec<String> = tokens
            .iter()
            .map(|t| rotate_str(t, rotation as i64))
            .collect();
        let matches = rotated.iter().filter(|t| dict.contains(&clean(t))).count();

        if matches * 2 > rotated.len() {
            results.push(CaesarCandidate {
                shift: ((ALPHABET_LEN - rotation) % ALPHABET_LEN) as u8,
                rotation: rotation as u8,
                matches,
                tokens: rotated.len(),
                text: rotated.join(" "),
            });
        }
    }

    results
}
