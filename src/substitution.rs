use crate::alphabet::{letter_index, ALPHABET, ALPHABET_LEN};
use crate::error::{CipherError, CipherResult};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A monoalphabetic substitution key: entry `i` is the letter that replaces
/// the `i`-th letter of the alphabet. Always a permutation of `A..=Z`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubstitutionKey([u8; ALPHABET_LEN]);

impl SubstitutionKey {
    pub fn identity() -> Self {
        Self(*ALPHABET)
    }

    /// Uniformly random permutation.
    pub fn random(rng: &mut Rng) -> Self {
        let mut letters = *ALPHABET;
        rng.shuffle(&mut letters);
        Self(letters)
    }

    /// Copy of this key with positions `a` and `b` exchanged.
    #[inline(always)]
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut letters = self.0;
        letters.swap(a, b);
        Self(letters)
    }

    pub fn inverse(&self) -> Self {
        let mut inv = [0u8; ALPHABET_LEN];
        for (plain_idx, &cipher_letter) in self.0.iter().enumerate() {
            inv[(cipher_letter - b'A') as usize] = ALPHABET[plain_idx];
        }
        Self(inv)
    }

    /// Alphabet index of the replacement for alphabet index `idx`.
    #[inline(always)]
    pub fn map_index(&self, idx: u8) -> u8 {
        self.0[idx as usize] - b'A'
    }

    pub fn letters(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }

    pub fn apply(&self, text: &str) -> String {
        apply_substitution(self, text)
    }

    pub fn encrypt(&self, plaintext: &str) -> String {
        self.apply(plaintext)
    }

    pub fn decrypt(&self, ciphertext: &str) -> String {
        self.inverse().apply(ciphertext)
    }
}

impl Default for SubstitutionKey {
    fn default() -> Self {
        Self::identity()
    }
}

/// Replaces each ASCII letter with its key entry (uppercase); everything else
/// passes through untouched.
pub fn apply_substitution(key: &SubstitutionKey, text: &str) -> String {
    text.chars()
        .map(|c| match letter_index(c) {
            Some(idx) => key.0[idx] as char,
            None => c,
        })
        .collect()
}

impl FromStr for SubstitutionKey {
    type Err = CipherError;

    fn from_str(s: &str) -> CipherResult<Self> {
        let trimmed = s.trim();
        if trimmed.chars().count() != ALPHABET_LEN {
            return Err(CipherError::InvalidKey(format!(
                "expected {} letters, got {}",
                ALPHABET_LEN,
                trimmed.chars().count()
            )));
        }

        let mut letters = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (i, c) in trimmed.chars().enumerate() {
            let idx = letter_index(c)
                .ok_or_else(|| CipherError::InvalidKey(format!("'{}' is not a letter", c)))?;
            if seen[idx] {
                return Err(CipherError::InvalidKey(format!(
                    "letter '{}' appears more than once",
                    ALPHABET[idx] as char
                )));
            }
            seen[idx] = true;
            letters[i] = ALPHABET[idx];
        }
        Ok(Self(letters))
    }
}

impl fmt::Display for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubstitutionKey({})", self)
    }
}

impl Serialize for SubstitutionKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SubstitutionKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
