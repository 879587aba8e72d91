//! KimiKupu - CLI
//!
//! Play and inspect the Polynesian-language word puzzle from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kimikupu::{
    commands::{check_guess, run_audit, run_play, split_word},
    game::Game,
    languages::{Language, LanguageConfig, LanguagePack, loader::load_from_file},
    output::{print_audit_result, print_check_result, print_split_result},
};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kimikupu",
    about = "Word puzzle for Hawaiian, Māori, Tahitian and Samoan",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language: hawaiian (default), maori, tahitian, samoan
    #[arg(short, long, global = true, default_value = "hawaiian")]
    language: Language,

    /// TOML file overriding tries, word length and normalization
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle (default)
    Play {
        /// Use a random word instead of the word of the day
        #[arg(short, long)]
        random: bool,
    },

    /// Split a word into letter-units
    Split {
        /// The word to split
        word: String,
    },

    /// Score a guess against a solution
    Check {
        /// The solution word
        solution: String,

        /// The guessed word
        guess: String,
    },

    /// Tokenize a whole word list and report its shape
    Audit {
        /// Word list file (default: the embedded solutions and guesses)
        #[arg(short, long)]
        file: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "kimikupu=warn",
        1 => "kimikupu=debug",
        _ => "kimikupu=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<LanguageConfig> {
    match path {
        Some(path) => LanguageConfig::load(path).with_context(|| format!("loading {path}")),
        None => Ok(LanguageConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let pack = LanguagePack::new(cli.language, config)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { random: false });

    match command {
        Commands::Play { random } => run_play_command(&pack, random),
        Commands::Split { word } => {
            print_split_result(&split_word(&pack, &word));
            Ok(())
        }
        Commands::Check { solution, guess } => {
            let result = check_guess(&pack, &solution, &guess)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Audit { file } => run_audit_command(&pack, file.as_deref()),
    }
}

fn run_play_command(pack: &LanguagePack, random: bool) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let daily = pack
        .word_of_day(today)
        .with_context(|| format!("no playable {} words", pack.display_name()))?;

    let solution = if random {
        pack.random_word(&mut rand::rng())
            .unwrap_or(daily.solution.as_str())
            .to_string()
    } else {
        daily.solution.clone()
    };

    let mut game = Game::new(pack, &solution)?;
    let stdin = io::stdin();
    run_play(&mut game, daily.index, stdin.lock(), &mut io::stdout())
}

fn run_audit_command(pack: &LanguagePack, file: Option<&str>) -> Result<()> {
    let words = match file {
        Some(path) => load_from_file(path).with_context(|| format!("reading {path}"))?,
        None => {
            let language = pack.language();
            language
                .words()
                .iter()
                .chain(language.valid_guesses())
                .map(ToString::to_string)
                .collect()
        }
    };

    let result = run_audit(
        pack.matcher(),
        pack.config().normalization,
        &words,
        pack.config().word_length,
    );
    print_audit_result(&result);
    Ok(())
}
