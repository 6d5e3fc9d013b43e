#![allow(dead_code)]

use ciphers::alphabet::{clean_indices, ALPHABET, ALPHABET_LEN};
use ciphers::scorer::QuadgramScorer;

pub const GETTYSBURG: &str = "Four score and seven years ago our fathers brought forth on this \
continent, a new nation, conceived in Liberty, and dedicated to the proposition that all men \
are created equal. Now we are engaged in a great civil war, testing whether that nation, or any \
nation so conceived and so dedicated, can long endure. We are met on a great battle-field of \
that war. We have come to dedicate a portion of that field, as a final resting place for those \
who here gave their lives that that nation might live. It is altogether fitting and proper that \
we should do this. But, in a larger sense, we can not dedicate, we can not consecrate, we can \
not hallow this ground. The brave men, living and dead, who struggled here, have consecrated \
it, far above our poor power to add or detract. The world will little note, nor long remember \
what we say here, but it can never forget what they did here. It is for us the living, rather, \
to be dedicated here to the unfinished work which they who fought here have thus far so nobly \
advanced. It is rather for us to be here dedicated to the great task remaining before us, that \
from these honored dead we take increased devotion to that cause for which they gave the last \
full measure of devotion, that we here highly resolve that these dead shall not have died in \
vain, that this nation, under God, shall have a new birth of freedom, and that government of \
the people, by the people, for the people, shall not perish from the earth.";

pub const TWO_CITIES: &str = "It was the best of times, it was the worst of times, it was the \
age of wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness, it was the spring of \
hope, it was the winter of despair, we had everything before us, we had nothing before us, we \
were all going direct to Heaven, we were all going direct the other way.";

pub const PRIDE: &str = "It is a truth universally acknowledged, that a single man in \
possession of a good fortune, must be in want of a wife. However little known the feelings or \
views of such a man may be on his first entering a neighbourhood, this truth is so well fixed in \
the minds of the surrounding families, that he is considered the rightful property of some one \
or other of their daughters.";

pub fn corpus() -> String {
    format!("{} {} {}", GETTYSBURG, TWO_CITIES, PRIDE)
}

/// Quadgram table whose counts follow a smoothed first-order letter chain
/// trained on `corpus`. Every quadgram gets a non-zero count, which keeps
/// the search landscape free of flat floor regions.
pub fn markov_scorer(corpus: &str) -> QuadgramScorer {
    let letters = clean_indices(corpus);
    let mut uni = [1.0f64; ALPHABET_LEN];
    let mut bi = [[0.5f64; ALPHABET_LEN]; ALPHABET_LEN];
    for &l in &letters {
        uni[l as usize] += 1.0;
    }
    for w in letters.windows(2) {
        bi[w[0] as usize][w[1] as usize] += 1.0;
    }

    let uni_total: f64 = uni.iter().sum();
    let row_totals: Vec<f64> = bi.iter().map(|row| row.iter().sum()).collect();
    let p_next = |a: usize, b: usize| bi[a][b] / row_totals[a];

    let mut entries = Vec::with_capacity(ALPHABET_LEN.pow(4));
    for a in 0..ALPHABET_LEN {
        for b in 0..ALPHABET_LEN {
            for c in 0..ALPHABET_LEN {
                for d in 0..ALPHABET_LEN {
                    let p = uni[a] / uni_total * p_next(a, b) * p_next(b, c) * p_next(c, d);
                    let quad: String = [a, b, c, d]
                        .iter()
                        .map(|&i| ALPHABET[i] as char)
                        .collect();
                    entries.push((quad, (p * 1e12).round().max(1.0) as u64));
                }
            }
        }
    }
    QuadgramScorer::new(entries)
}
