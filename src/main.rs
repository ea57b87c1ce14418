//! Twistcore - CLI
//!
//! Terminal front end for the word-puzzle session engine: interactive play
//! plus wordlist inspection commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use twistcore::{
    bank::WordBank,
    commands::run_play,
    config::GameConfig,
    output::print_puzzle,
    session::GameSession,
};

#[derive(Parser)]
#[command(
    name = "twistcore",
    about = "Six-letter word-puzzle sessions against the clock",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Six-letter base-word list (default: embedded list)
    #[arg(short = 'b', long, global = true)]
    base_words: Option<PathBuf>,

    /// Solution dictionary (default: embedded list)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Minimum number of solutions a puzzle must have
    #[arg(short = 'm', long, global = true, default_value = "10")]
    min_solutions: usize,

    /// Session length in seconds
    #[arg(short = 't', long, global = true, default_value = "120")]
    seconds: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play,

    /// Print every word formable from a base word
    Candidates {
        /// The base word to expand
        word: String,
    },

    /// Select a random puzzle and print its base word and solution count
    Pick {
        /// Also list the solution words
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        base_word_source: cli.base_words,
        dictionary_source: cli.dictionary,
        min_solutions: cli.min_solutions,
        session_duration_secs: cli.seconds,
        ..GameConfig::default()
    };
    let bank = WordBank::from_config(&config)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let session = GameSession::new(bank, &config);
            run_play(&session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Candidates { word } => {
            let puzzle = bank.puzzle_for(&word)?;
            print_puzzle(&puzzle, true);
            Ok(())
        }
        Commands::Pick { verbose } => {
            let puzzle = bank.select_puzzle()?;
            print_puzzle(&puzzle, verbose);
            Ok(())
        }
    }
}
