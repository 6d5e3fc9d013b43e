use ciphers::caesar::{self, break_caesar};
use ciphers::config::Config;
use ciphers::optimizer::runner::{AttackOptions, Attacker, Silent};
use ciphers::substitution::SubstitutionKey;
use std::fs;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum MenuCommand {
    #[strum(serialize = "C")]
    CaesarEncrypt,
    #[strum(serialize = "D")]
    CaesarDecrypt,
    #[strum(serialize = "E")]
    Englishness,
    #[strum(serialize = "A")]
    ApplyRandomSubst,
    #[strum(serialize = "S")]
    SubstFromConsole,
    #[strum(serialize = "F")]
    SubstFromFile,
    #[strum(serialize = "R")]
    Reseed,
    #[strum(serialize = "X")]
    Exit,
}

impl MenuCommand {
    fn description(&self) -> &'static str {
        match self {
            Self::CaesarEncrypt => "Encrypt with Caesar Cipher",
            Self::CaesarDecrypt => "Decrypt Caesar Cipher",
            Self::Englishness => "Compute English-ness Score",
            Self::ApplyRandomSubst => "Apply Random Substitution Cipher",
            Self::SubstFromConsole => "Decrypt Substitution Cipher from Console",
            Self::SubstFromFile => "Decrypt Substitution Cipher from File",
            Self::Reseed => "Set Random Seed for Testing",
            Self::Exit => "Exit Program",
        }
    }
}

/// Menu-driven loop over arbitrary input/output streams.
pub struct Session<R, W> {
    input: R,
    out: W,
    config: Config,
    rng: fastrand::Rng,
}

pub fn run(config: Config, rng: fastrand::Rng) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), config, rng).run()
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, config: Config, rng: fastrand::Rng) -> Self {
        Self {
            input,
            out,
            config,
            rng,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to Ciphers!")?;
        writeln!(self.out, "-------------------")?;
        writeln!(self.out)?;

        loop {
            self.print_menu()?;
            write!(self.out, "\nEnter a command (case does not matter): ")?;

            let command = match self.prompt_line()? {
                Some(line) => line,
                None => {
                    writeln!(self.out, "Exiting program.")?;
                    break;
                }
            };
            writeln!(self.out)?;

            match MenuCommand::from_str(command.trim()) {
                Ok(MenuCommand::Exit) => {
                    writeln!(self.out, "Exiting program.")?;
                    break;
                }
                Ok(cmd) => {
                    debug!("Menu command: {:?}", cmd);
                    self.dispatch(cmd)?;
                }
                Err(_) => writeln!(self.out, "Invalid command. Please try again.")?,
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "Ciphers Menu")?;
        writeln!(self.out, "------------")?;
        for cmd in MenuCommand::iter() {
            writeln!(self.out, "{} - {}", cmd, cmd.description())?;
        }
        Ok(())
    }

    fn dispatch(&mut self, cmd: MenuCommand) -> io::Result<()> {
        match cmd {
            MenuCommand::CaesarEncrypt => self.caesar_encrypt(),
            MenuCommand::CaesarDecrypt => self.caesar_decrypt(),
            MenuCommand::Englishness => self.englishness(),
            MenuCommand::ApplyRandomSubst => self.apply_random_subst(),
            MenuCommand::SubstFromConsole | MenuCommand::SubstFromFile => self.decrypt_subst(),
            MenuCommand::Reseed => self.reseed(),
            MenuCommand::Exit => Ok(()),
        }
    }

    // Reads one line without its terminator; `None` at end of input.
    fn prompt_line(&mut self) -> io::Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{}", prompt)?;
        Ok(self.prompt_line()?.unwrap_or_default())
    }

    fn reseed(&mut self) -> io::Result<()> {
        let answer =
            self.ask("Enter a non-negative integer to seed the random number generator: ")?;
        match answer.trim().parse::<u64>() {
            Ok(seed) => self.rng = fastrand::Rng::with_seed(seed),
            Err(_) => writeln!(self.out, "Invalid input. Please enter a valid integer.")?,
        }
        Ok(())
    }

    fn caesar_encrypt(&mut self) -> io::Result<()> {
        let text = self.ask("Enter text to encrypt: ")?;
        let amount = self.ask("Enter the shift amount: ")?;
        match amount.trim().parse::<i64>() {
            Ok(shift) => writeln!(self.out, "{}", caesar::encrypt(&text, shift)),
            Err(_) => writeln!(self.out, "Invalid shift amount."),
        }
    }

    fn caesar_decrypt(&mut self) -> io::Result<()> {
        let dict = match super::load_dictionary(&self.config.data) {
            Ok(d) => d,
            Err(e) => return writeln!(self.out, "Error: {}", e),
        };
        let text = self.ask("Enter text to decrypt: ")?;

        let candidates = break_caesar(&text, &dict);
        if candidates.is_empty() {
            return writeln!(self.out, "No good decryptions found");
        }
        for c in &candidates {
            writeln!(self.out, "{}", c.text)?;
        }
        Ok(())
    }

    fn englishness(&mut self) -> io::Result<()> {
        let scorer = match super::load_scorer(&self.config.data) {
            Ok(s) => s,
            Err(e) => return writeln!(self.out, "Error: {}", e),
        };
        let text = self.ask("Enter a string to score: ")?;
        writeln!(self.out, "English-ness score: {}", scorer.score_text(&text))
    }

    fn apply_random_subst(&mut self) -> io::Result<()> {
        let key = SubstitutionKey::random(&mut self.rng);
        let text = self.ask("Enter text to encrypt: ")?;
        writeln!(self.out, "Encrypted text: {}", key.encrypt(&text))
    }

    fn decrypt_subst(&mut self) -> io::Result<()> {
        let scorer = match super::load_scorer(&self.config.data) {
            Ok(s) => s,
            Err(e) => return writeln!(self.out, "Error: {}", e),
        };
        let attacker = match Attacker::new(&scorer, AttackOptions::from(&self.config.search)) {
            Ok(a) => a,
            Err(e) => return writeln!(self.out, "Error: {}", e),
        };

        let answer = self.ask("Enter input filename (or leave blank to input text): ")?;
        if answer.is_empty() {
            let ciphertext = self.ask("Enter text to decrypt: ")?;
            let result = attacker.run(&ciphertext, &mut self.rng, &Silent);
            return writeln!(self.out, "Best decryption: {}", result.best.text);
        }

        // A name that cannot be read is taken to be the ciphertext itself
        let ciphertext = match fs::read_to_string(&answer) {
            Ok(content) => content,
            Err(_) => {
                let result = attacker.run(&answer, &mut self.rng, &Silent);
                return writeln!(self.out, "Best decryption: {}", result.best.text);
            }
        };

        let output_path = self.ask("Enter output filename: ")?;
        let result = attacker.run(&ciphertext, &mut self.rng, &Silent);
        match fs::write(&output_path, &result.best.text) {
            Ok(()) => writeln!(
                self.out,
                "Decryption complete. Output written to {}",
                output_path
            ),
            Err(_) => writeln!(self.out, "Couldn't open output file given to command"),
        }
    }
}
