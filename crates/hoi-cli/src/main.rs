//! Terminal frontend for hoi: janken followed by acchi muite hoi.

mod commands;

use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hoi",
    about = "hoi: janken and acchi muite hoi against a talking CPU",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// RNG seed for the CPU (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pause after each result, in milliseconds
        #[arg(long, default_value = "2500")]
        delay_ms: u64,

        /// Narration language: ja or en
        #[arg(short, long, default_value = "ja")]
        locale: String,

        /// Do not print the character's lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Autoplay rounds with a random player and report the tallies
    Simulate {
        /// Number of decided rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Show every round event
        #[arg(short, long)]
        events: bool,
    },

    /// List every line the character can speak
    Phrases,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seed,
            delay_ms,
            locale,
            quiet,
        } => commands::play::run(seed, Duration::from_millis(delay_ms), &locale, quiet),
        Commands::Simulate {
            rounds,
            seed,
            json,
            events,
        } => commands::simulate::run(rounds, seed, json, events),
        Commands::Phrases => commands::phrases::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
