//! CLI frontend for the Wandelgang interaction engine.

mod commands;
mod script;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wg",
    about = "Wandelgang — headless walking-sim interaction engine",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions (refused interactions, rules, level loads) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a content file: items, levels, rules and exits
    Check {
        /// Content JSON file
        content: PathBuf,
    },

    /// List the item catalog
    Items {
        /// Content JSON file
        content: PathBuf,
    },

    /// Replay an input script headlessly and print the interaction transcript
    Play {
        /// Content JSON file
        content: PathBuf,

        /// Input script JSON file
        script: PathBuf,

        /// Progress file (default: in-memory, discarded on exit)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Show every event, including readiness and movement
        #[arg(short, long)]
        all: bool,
    },

    /// Show or reset recorded level progress
    Progress {
        /// Progress file
        #[arg(short, long)]
        state: PathBuf,

        /// Forget the recorded level
        #[arg(long)]
        reset: bool,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { content } => commands::check::run(&content),
        Commands::Items { content } => commands::items::run(&content),
        Commands::Play {
            content,
            script,
            state,
            all,
        } => commands::play::run(&content, &script, state.as_deref(), all),
        Commands::Progress { state, reset } => commands::progress::run(&state, reset),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
