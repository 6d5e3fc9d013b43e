use crate::caesar::Dictionary;
use crate::error::{CipherError, CipherResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads `QUADGRAM,COUNT` lines. Lines without a comma are skipped; a count
/// that does not start with digits is taken as 0.
pub fn load_quadgrams<R: Read>(reader: R) -> CipherResult<Vec<(String, u64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut malformed = 0;
    let mut lines_read = 0;

    for result in rdr.records() {
        lines_read += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                debug!("[Row {}] CSV Parse Error: {}", lines_read, e);
                continue;
            }
        };
        if rec.len() < 2 {
            continue;
        }

        let count = match parse_count(&rec[1]) {
            Some(c) => c,
            None => {
                malformed += 1;
                0
            }
        };
        entries.push((rec[0].trim().to_ascii_uppercase(), count));
    }

    if malformed > 0 {
        warn!(
            "Quadgram table: {} rows had a malformed count and were loaded as 0",
            malformed
        );
    }
    debug!(
        "Scanned {} quadgram lines, kept {} entries",
        lines_read,
        entries.len()
    );

    Ok(entries)
}

pub fn load_quadgrams_from_path<P: AsRef<Path>>(path: P) -> CipherResult<Vec<(String, u64)>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        CipherError::Validation(format!(
            "Could not open quadgram table at '{}': {}",
            path.display(),
            e
        ))
    })?;
    let entries = load_quadgrams(file)?;
    if entries.is_empty() {
        return Err(CipherError::Validation(format!(
            "Quadgram table '{}' is empty",
            path.display()
        )));
    }
    info!("Loaded {} quadgrams from {}", entries.len(), path.display());
    Ok(entries)
}

/// Whitespace-delimited word list.
pub fn load_dictionary<R: Read>(mut reader: R) -> CipherResult<Dictionary> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(Dictionary::from_words(content.split_whitespace()))
}

pub fn load_dictionary_from_path<P: AsRef<Path>>(path: P) -> CipherResult<Dictionary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        CipherError::Validation(format!(
            "Could not open dictionary at '{}': {}",
            path.display(),
            e
        ))
    })?;
    let dict = load_dictionary(file)?;
    if dict.is_empty() {
        return Err(CipherError::Validation(format!(
            "Dictionary '{}' is empty",
            path.display()
        )));
    }
    info!("Loaded {} dictionary words from {}", dict.len(), path.display());
    Ok(dict)
}

// Leading digits after optional whitespace; trailing junk is ignored.
fn parse_count(field: &str) -> Option<u64> {
    let trimmed = field.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}
