use crate::error::{CipherError, CipherResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub data: DataPaths,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Independent hill-climbing restarts per substitution attack
    #[arg(long, global = true, default_value_t = 10)]
    pub attempts: usize,
    /// Consecutive non-improving swaps before an attempt is considered converged
    #[arg(long, global = true, default_value_t = 500)]
    pub stagnation_limit: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            attempts: 10,
            stagnation_limit: 500,
        }
    }
}

impl SearchParams {
    pub fn validate(&self) -> CipherResult<()> {
        if self.attempts == 0 {
            return Err(CipherError::Config(
                "attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    #[arg(long, global = true, default_value = "dictionary.txt")]
    pub dictionary: String,
    #[arg(long, global = true, default_value = "english_quadgrams.txt")]
    pub quadgrams: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            dictionary: "dictionary.txt".to_string(),
            quadgrams: "english_quadgrams.txt".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CipherResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over only the values the user typed on the command line, so a
    /// config file is not clobbered by clap defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(search.attempts);
        update_if_present!(search.stagnation_limit);
        update_if_present!(data.dictionary);
        update_if_present!(data.quadgrams);
    }
}
