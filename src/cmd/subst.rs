use crate::reports;
use clap::Args;
use ciphers::config::Config;
use ciphers::error::CipherResult;
use ciphers::optimizer::runner::{AttackOptions, Attacker, AttemptCallback};
use ciphers::optimizer::ClimbOutcome;
use ciphers::substitution::SubstitutionKey;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 26-letter permutation; a random key is generated when omitted
    #[arg(short, long)]
    pub key: Option<SubstitutionKey>,
}

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the best decryption here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

struct ProgressPrinter;

impl AttemptCallback for ProgressPrinter {
    fn on_attempt(&self, attempt: usize, outcome: &ClimbOutcome) {
        info!(
            "➡️  Attempt #{} done (Score: {:.2})",
            attempt + 1,
            outcome.best.score
        );
    }
}

pub fn run_encrypt(args: EncryptArgs, rng: &mut fastrand::Rng) -> CipherResult<()> {
    let text = super::resolve_text(args.text.as_deref(), args.input.as_deref())?;
    let key = args.key.unwrap_or_else(|| SubstitutionKey::random(rng));

    reports::print_key_grid("KEY", &key);
    println!("Key: {}", key);
    println!("Encrypted text: {}", key.encrypt(&text));
    Ok(())
}

pub fn run_decrypt(args: DecryptArgs, config: &Config, rng: &mut fastrand::Rng) -> CipherResult<()> {
    let text = super::resolve_text(args.text.as_deref(), args.input.as_deref())?;
    let scorer = super::load_scorer(&config.data)?;

    let attacker = Attacker::new(&scorer, AttackOptions::from(&config.search))?;
    let result = attacker.run(&text, rng, &ProgressPrinter);

    reports::print_attempt_table(&result);
    println!("\n=== 🏆 FINAL RESULT ===");
    println!("Score: {:.2}", result.best.score);
    println!("Key: {}", result.key);

    match args.output {
        Some(path) => {
            fs::write(&path, &result.best.text)?;
            println!("Decryption complete. Output written to {}", path.display());
        }
        None => println!("Best decryption: {}", result.best.text),
    }
    Ok(())
}
