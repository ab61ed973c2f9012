//! lesble - CLI
//!
//! Daily word-guessing game with a TUI and a line-mode interface.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lesble::{
    GameConfig,
    commands::{run_check, run_simple, share_text},
    core::release_date,
    game::{FileStore, MemoryStore, StateStore},
    output::print_list_report,
    session::Session,
    wordlists::WordData,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lesble",
    about = "Guess the word of the day in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited list of valid guesses
    #[arg(short = 'w', long, global = true, default_value = "words")]
    words: PathBuf,

    /// Newline-delimited list of secret words, one per day
    #[arg(short = 'c', long, global = true, default_value = "corrects")]
    corrects: PathBuf,

    /// Directory for saved progress (default: platform data directory)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Do not read or write saved progress
    #[arg(long, global = true)]
    no_save: bool,

    /// Date of puzzle #0 (YYYY-MM-DD)
    #[arg(long, global = true, default_value_t = release_date())]
    release: NaiveDate,

    /// Play as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-mode game without the TUI
    Simple,

    /// Print the share summary for today's game
    Share,

    /// Check the word lists and report how many days of puzzles remain
    Check,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default()
            .with_words(&self.words)
            .with_corrects(&self.corrects)
            .with_release(self.release);

        if let Some(dir) = &self.state_dir {
            config = config.with_state_dir(dir);
        }
        if self.no_save {
            config.state_dir = None;
        }
        if let Some(date) = self.date {
            config = config.with_today(date);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Check = command {
        let report = run_check(&config).context("Initialization error")?;
        print_list_report(&report);
        return Ok(());
    }

    let data = WordData::load(&config.words_path, &config.corrects_path)
        .context("Initialization error")?;

    match config.state_dir.clone() {
        Some(dir) => run_game(command, &config, data, FileStore::new(dir)),
        None => {
            log::info!("saving disabled");
            run_game(command, &config, data, MemoryStore::new())
        }
    }
}

fn run_game<S: StateStore>(
    command: Commands,
    config: &GameConfig,
    data: WordData,
    store: S,
) -> Result<()> {
    let day = config.day();
    let mut session = Session::start(day, data, store)
        .with_context(|| format!("Cannot start a game for {}", config.current_date()))?;

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => {
            let stdin = io::stdin();
            run_simple(&mut session, stdin.lock())?;
            Ok(())
        }
        Commands::Share => {
            println!("{}", share_text(session.game()));
            Ok(())
        }
        Commands::Check => Ok(()),
    }
}

fn run_play_command<S: StateStore>(session: Session<S>) -> Result<()> {
    use lesble::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
