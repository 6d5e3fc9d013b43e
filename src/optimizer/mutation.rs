use crate::alphabet::ALPHABET_LEN;
use crate::substitution::SubstitutionKey;
use fastrand::Rng;

/// Starting point for an attempt: every permutation equally likely.
pub fn random_key(rng: &mut Rng) -> SubstitutionKey {
    SubstitutionKey::random(rng)
}

/// Two distinct key positions, each uniform over the alphabet. The second
/// draw repeats until it differs from the first.
#[inline(always)]
pub fn pick_swap(rng: &mut Rng) -> (usize, usize) {
    let a = rng.usize(0..ALPHABET_LEN);
    let mut b = rng.usize(0..ALPHABET_LEN);
    while b == a {
        b = rng.usize(0..ALPHABET_LEN);
    }
    (a, b)
}

/// Neighbouring key: `key` with two distinct random positions exchanged.
pub fn neighbour(key: &SubstitutionKey, rng: &mut Rng) -> SubstitutionKey {
    let (a, b) = pick_swap(rng);
    key.swapped(a, b)
}
