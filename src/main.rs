mod commands;
mod discover;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cslcal")]
#[command(about = "Generate per-team .ics calendar files from league schedule JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate calendar files for every league file in the data directory
    Generate {
        /// Directory scanned recursively for league .json files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Directory the per-team .ics files are written to
        #[arg(long, default_value = "calendar")]
        out_dir: PathBuf,
    },
    /// Parse and build without writing, reporting what would be generated
    Check {
        /// Directory scanned recursively for league .json files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { data_dir, out_dir } => commands::generate::run(&data_dir, &out_dir),
        Commands::Check { data_dir } => commands::check::run(&data_dir),
    }
}
