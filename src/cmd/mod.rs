pub mod caesar;
pub mod interactive;
pub mod score;
pub mod subst;

use ciphers::caesar::Dictionary;
use ciphers::config::DataPaths;
use ciphers::error::CipherResult;
use ciphers::scorer::loader::{load_dictionary_from_path, load_quadgrams_from_path};
use ciphers::scorer::QuadgramScorer;
use std::fs;
use std::path::Path;

pub fn load_dictionary(paths: &DataPaths) -> CipherResult<Dictionary> {
    load_dictionary_from_path(&paths.dictionary)
}

pub fn load_scorer(paths: &DataPaths) -> CipherResult<QuadgramScorer> {
    let entries = load_quadgrams_from_path(&paths.quadgrams)?;
    Ok(QuadgramScorer::new(entries))
}

/// Text given inline wins; otherwise the whole input file is read.
pub fn resolve_text(inline: Option<&str>, input: Option<&Path>) -> CipherResult<String> {
    match (inline, input) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(ciphers::error::CipherError::Config(
            "no input text: pass TEXT or --input".to_string(),
        )),
    }
}
