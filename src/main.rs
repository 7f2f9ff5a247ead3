//! Absurdle - CLI
//!
//! Adversarial word game with a line-based mode, a TUI mode, scripted
//! replays and an adversary benchmark.

use absurdle::{
    commands::{replay, run_benchmark, run_play},
    config::{DEFAULT_MAX_TURNS, DEFAULT_WORD_LENGTH, GameConfig},
    core::{HintSpace, Word},
    game::{Game, GameStatus},
    output::{print_benchmark_result, print_replay_result},
    solver::Adversary,
    wordlists::{
        WORDLIST,
        loader::{load_from_file, words_from_slice},
    },
};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "absurdle",
    about = "Word game where the answer keeps changing to dodge your guesses",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses allowed before losing
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    turns: usize,

    /// Hint rule: simplified (default) or canonical
    #[arg(short, long, global = true, default_value = "simplified")]
    scoring: String,

    /// Evaluate hints on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Show candidate counts and rejection reasons
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one guess per line (default)
    Play,

    /// Full-screen interactive mode
    Tui,

    /// Play a fixed sequence of guesses and show the outcome
    Replay {
        /// Guesses in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Time the adversary over many opening guesses
    Benchmark {
        /// Number of dictionary words to try as guesses
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load the dictionary from the -w flag, or the embedded list
fn load_dictionary(path: Option<&PathBuf>, word_length: usize) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path, word_length)
            .with_context(|| format!("Failed to read word list {}", path.display()))?,
        None => words_from_slice(WORDLIST, word_length),
    };

    if words.is_empty() {
        bail!("No {word_length}-letter words available in the word list");
    }

    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::from_parts(cli.length, cli.turns, &cli.scoring, !cli.sequential)?;
    let dictionary = load_dictionary(cli.wordlist.as_ref(), config.word_length)?;
    let hints = HintSpace::new(config.word_length);

    if cli.verbose {
        println!(
            "{}",
            format!(
                "Loaded {} words, {} hints, {} scoring, {}",
                dictionary.len(),
                hints.len(),
                config.scoring,
                if config.parallel { "parallel" } else { "sequential" }
            )
            .dimmed()
        );
    }

    // Default to line-based play if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let mut game = Game::new(&dictionary, &hints, config)?;
            let status = run_play(&mut game, cli.verbose)?;
            if status == GameStatus::InProgress && cli.verbose {
                println!("{}", "Game abandoned.".dimmed());
            }
            Ok(())
        }
        Commands::Tui => {
            use absurdle::interactive::{App, run_tui};

            let game = Game::new(&dictionary, &hints, config)?;
            run_tui(App::new(game))
        }
        Commands::Replay { guesses } => {
            let mut game = Game::new(&dictionary, &hints, config)?;
            let result = replay(&mut game, &guesses)?;
            print_replay_result(&result, dictionary.len(), cli.verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running adversary on {count} opening guesses...");
            let adversary = Adversary::from_config(&hints, &config);
            let result = run_benchmark(&adversary, &dictionary, count, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
