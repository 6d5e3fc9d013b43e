use crate::reports;
use clap::Args;
use ciphers::caesar::{self, break_caesar};
use ciphers::config::Config;
use ciphers::error::CipherResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Rotation amount; negative and out-of-range values wrap
    #[arg(short, long, allow_negative_numbers = true)]
    pub shift: i64,

    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

pub fn run_encrypt(args: EncryptArgs) -> CipherResult<()> {
    let text = super::resolve_text(args.text.as_deref(), args.input.as_deref())?;
    println!("{}", caesar::encrypt(&text, args.shift));
    Ok(())
}

pub fn run_decrypt(args: DecryptArgs, config: &Config) -> CipherResult<()> {
    let text = super::resolve_text(args.text.as_deref(), args.input.as_deref())?;
    let dict = super::load_dictionary(&config.data)?;

    let candidates = break_caesar(&text, &dict);
    info!("{} shifts cleared the dictionary threshold", candidates.len());

    if candidates.is_empty() {
        println!("No good decryptions found");
        return Ok(());
    }

    for c in &candidates {
        println!("{}", c.text);
    }
    reports::print_caesar_table(&candidates);
    Ok(())
}
