//! Addrbook CLI
//!
//! Command-line tools for address book record files.
//!
//! # Commands
//!
//! - `normalize` - Show the canonical form and key of names
//! - `check` - Validate every record in a record file
//! - `merge` - Merge record files into one sorted record list

mod commands;

use addrbook_core::ConflictPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Addrbook command-line tools.
#[derive(Parser)]
#[command(name = "addrbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the canonical form and key of names
    Normalize {
        /// Names to normalize
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Validate every record in a record file
    Check {
        /// Record file, one record per line
        file: PathBuf,
    },

    /// Merge record files, earlier files preferred on conflicts
    Merge {
        /// Record files, one record per line
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Conflict policy (field-union, keep-first)
        #[arg(short, long, default_value = "field-union")]
        policy: ConflictPolicy,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Normalize { names } => {
            commands::normalize::run(&names)?;
        }
        Commands::Check { file } => {
            commands::check::run(&file)?;
        }
        Commands::Merge {
            files,
            policy,
            format,
        } => {
            commands::merge::run(&files, policy, &format)?;
        }
        Commands::Version => {
            println!("Addrbook CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Addrbook Core v{}", addrbook_core::VERSION);
        }
    }

    Ok(())
}
