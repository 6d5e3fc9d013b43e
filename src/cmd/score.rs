use clap::Args;
use ciphers::config::Config;
use ciphers::error::CipherResult;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

pub fn run(args: ScoreArgs, config: &Config) -> CipherResult<()> {
    let text = super::resolve_text(args.text.as_deref(), args.input.as_deref())?;
    let scorer = super::load_scorer(&config.data)?;
    println!("English-ness score: {}", scorer.score_text(&text));
    Ok(())
}
