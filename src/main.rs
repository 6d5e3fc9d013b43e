use ciphers::config::Config;
use ciphers::error::CipherResult;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    config: Config,

    /// JSON file with search parameters and data paths
    #[arg(global = true, long = "config")]
    config_path: Option<String>,

    /// Seed for the random source; omit for a time-based seed
    #[arg(global = true, short = 'S', long)]
    seed: Option<u64>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Menu-driven session (the default)
    Interactive,
    CaesarEncrypt(cmd::caesar::EncryptArgs),
    CaesarDecrypt(cmd::caesar::DecryptArgs),
    Score(cmd::score::ScoreArgs),
    SubstEncrypt(cmd::subst::EncryptArgs),
    SubstDecrypt(cmd::subst::DecryptArgs),
}

fn main() {
    // Raw matches tell user input apart from clap defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config_path {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(&cli.config, &matches);
            file_config
        }
        None => cli.config.clone(),
    };

    let mut rng = match cli.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let outcome: CipherResult<()> = match cli.command {
        None | Some(Commands::Interactive) => {
            cmd::interactive::run(config, rng).map_err(Into::into)
        }
        Some(Commands::CaesarEncrypt(args)) => cmd::caesar::run_encrypt(args),
        Some(Commands::CaesarDecrypt(args)) => cmd::caesar::run_decrypt(args, &config),
        Some(Commands::Score(args)) => cmd::score::run(args, &config),
        Some(Commands::SubstEncrypt(args)) => cmd::subst::run_encrypt(args, &mut rng),
        Some(Commands::SubstDecrypt(args)) => cmd::subst::run_decrypt(args, &config, &mut rng),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
