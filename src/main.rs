//! Word of the Day - CLI
//!
//! Daily word-guessing game with TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_daily::{
    commands::{GameSetup, check_guess, lookup_today, run_simple},
    core::{Timestamp, Word, WordList, select_word},
    output::{print_check_result, print_today},
    wordlists::loader::{embedded_list, list_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the word of the day in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Number of guesses allowed (1-26)
    #[arg(short, long, global = true, default_value = "6")]
    rows: usize,

    /// Play the puzzle for this date (YYYY-MM-DD, default: today in UTC)
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Random word instead of the word of the day
    #[arg(short, long, global = true)]
    practice: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show which puzzle a date maps to
    Today {
        /// Also print the word
        #[arg(long)]
        reveal: bool,
    },

    /// Score a guess against the word of the day or a given target
    Check {
        /// The guess to score
        guess: String,

        /// Target word (default: word of the day)
        #[arg(short, long)]
        target: Option<String>,
    },
}

/// Load the word list based on the -w flag
fn load_word_list(path: Option<&str>) -> Result<WordList> {
    match path {
        Some(path) => list_from_file(path),
        None => Ok(embedded_list()?),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let list = load_word_list(cli.wordlist.as_deref())?;
    let date = match cli.date.as_deref() {
        Some(s) => Timestamp::parse_date(s)?,
        None => Timestamp::now(),
    };
    let setup = GameSetup::new(list, date)
        .with_rows(cli.rows)
        .with_practice(cli.practice);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(setup),
        Commands::Simple => run_simple_command(&setup),
        Commands::Today { reveal } => {
            print_today(&lookup_today(&setup.list, setup.date), reveal);
            Ok(())
        }
        Commands::Check { guess, target } => {
            run_check_command(&guess, target.as_deref(), &setup)
        }
    }
}

fn run_check_command(guess: &str, target: Option<&str>, setup: &GameSetup) -> Result<()> {
    let target = match target {
        Some(t) => Word::new(t).map_err(|e| anyhow::anyhow!("Invalid target: {e}"))?,
        None => select_word(&setup.list, setup.date).clone(),
    };
    let feedback = check_guess(guess, &target).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&feedback);
    Ok(())
}

fn run_simple_command(setup: &GameSetup) -> Result<()> {
    let mut session = setup.new_session()?;
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(setup: GameSetup) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let app = App::new(setup)?;
    run_tui(app)
}
