//! Tides of Love CLI - seed files and countdown tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the demo wedding as a starting seed file
//! tides-cli seed > wedding.json
//!
//! # Validate a seed file before pointing WEDDING_SEED_FILE at it
//! tides-cli check-seed wedding.json
//!
//! # Time left until the ceremony, now or at a given instant
//! tides-cli countdown
//! tides-cli countdown --now 2024-08-14T17:00:00Z --seed wedding.json
//! ```
//!
//! # Commands
//!
//! - `seed` - Print the demo wedding record as JSON
//! - `check-seed` - Load and validate a seed file
//! - `countdown` - Print days, hours, minutes and seconds to the ceremony

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tides-cli")]
#[command(author, version, about = "Tides of Love CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demo wedding record as pretty JSON
    Seed,
    /// Load and validate a seed file
    CheckSeed {
        /// Path to the JSON seed file
        path: PathBuf,
    },
    /// Print the time left until the ceremony
    Countdown {
        /// Instant to count from (RFC 3339), defaults to now
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Seed file to read the ceremony date from, defaults to the demo wedding
        #[arg(long, env = "WEDDING_SEED_FILE")]
        seed: Option<PathBuf>,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output can be piped
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Seed => commands::seed::print_demo(&mut out)?,
        Commands::CheckSeed { path } => commands::seed::check(&path, &mut out)?,
        Commands::Countdown { now, seed } => {
            commands::countdown::print(seed.as_deref(), now.unwrap_or_else(Utc::now), &mut out)?;
        }
    }
    Ok(())
}
