//! Wordle - CLI
//!
//! Word-guessing puzzle with a TUI mode, a line-based mode and a one-shot
//! scoring command.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_pair},
    config::GameConfig,
    core::Word,
    interactive::{App, run_tui},
    logging,
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: bundled list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Use a fixed answer instead of a random one
    #[arg(long, global = true)]
    answer: Option<Word>,

    /// Seed for choosing the answer
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode reading guesses from stdin
    Simple,

    /// Score a single guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        answer: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            wordlist: self.wordlist.clone(),
            answer: self.answer.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { guess, answer } => run_score_command(&guess, &answer),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let lexicon = config.load_lexicon()?;
    let app = App::new(config, &lexicon);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let lexicon = config.load_lexicon()?;
    let mut rng = config.rng();
    let mut game = config.new_game(&lexicon, &mut rng);

    run_simple(&mut game, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn run_score_command(guess: &str, answer: &str) -> Result<()> {
    let result = score_pair(guess, answer)?;
    print_score_result(&result);
    Ok(())
}
