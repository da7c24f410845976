//! Korean Word Duel - CLI
//!
//! Two-player Korean word-guessing game with TUI and plain CLI modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use kordle::{
    commands::{inspect_word, print_inspection, run_simple},
    core::Word,
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "kordle",
    about = "Two-player Korean word duel built on Hangul jamo decomposition",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom word list (one word per line, 3-7 syllables)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Force the hidden word's syllable length (3-7)
    #[arg(short = 'l', long, global = true)]
    length: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (two players sharing a terminal, no TUI)
    Simple,

    /// Decompose a word into jamo and show its tile vocabulary
    Inspect {
        /// Word to inspect
        word: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: Option<&str>) -> Result<Dictionary> {
    match wordlist {
        None => Ok(Dictionary::embedded()),
        Some(path) => {
            let words = load_from_file(path)?;
            if words.is_empty() {
                bail!("No usable words in {path}");
            }
            Ok(Dictionary::from_words(words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(len) = cli.length
        && !(Word::MIN_LEN..=Word::MAX_LEN).contains(&len)
    {
        bail!(
            "Word length must be between {} and {}",
            Word::MIN_LEN,
            Word::MAX_LEN
        );
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(cli.wordlist.as_deref())?;
            run_play_command(dictionary, cli.length)
        }
        Commands::Simple => {
            let dictionary = load_dictionary(cli.wordlist.as_deref())?;
            run_simple(&dictionary, cli.length).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Inspect { word } => {
            let inspection = inspect_word(&word).map_err(|e| anyhow::anyhow!(e))?;
            print_inspection(&inspection);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: Dictionary, length: Option<usize>) -> Result<()> {
    use kordle::interactive::{App, run_tui};

    let app = App::new(dictionary, length)?;
    run_tui(app)
}
