//! The 26-letter index space shared by every cipher in the crate.

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHABET_LEN: usize = 26;

/// Alphabet index of an ASCII letter (either case), `None` for anything else.
#[inline(always)]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

#[inline(always)]
pub fn letter_at(index: usize) -> char {
    ALPHABET[index % ALPHABET_LEN] as char
}

/// Shifts a letter by `amount` positions, wrapping in both directions.
/// Letters come back uppercase; anything else is returned unchanged.
pub fn rotate(c: char, amount: i64) -> char {
    match letter_index(c) {
        Some(idx) => {
            let shift = amount.rem_euclid(ALPHABET_LEN as i64) as usize;
            letter_at(idx + shift)
        }
        None => c,
    }
}

/// Rotates every letter of `s`, keeping punctuation and whitespace in place.
pub fn rotate_str(s: &str, amount: i64) -> String {
    s.chars().map(|c| rotate(c, amount)).collect()
}

/// Keeps only the letters of `s`, uppercased.
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Letters of `s` as alphabet indices (0..26), everything else dropped.
pub fn clean_indices(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(letter_index)
        .map(|idx| idx as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_wraps_past_z() {
        assert_eq!(rotate('Y', 3), 'B');
        assert_eq!(rotate('b', -3), 'Y');
    }

    #[test]
    fn rotate_handles_extreme_amounts() {
        assert_eq!(rotate('A', i64::MAX), rotate('A', i64::MAX.rem_euclid(26)));
        assert_eq!(rotate('A', i64::MIN), rotate('A', i64::MIN.rem_euclid(26)));
    }

    #[test]
    fn clean_drops_non_letters() {
        assert_eq!(clean("Hello, World! 42"), "HELLOWORLD");
        assert_eq!(clean_indices("a-Z"), vec![0, 25]);
    }
}
