//! Command-line front end for the pet editor.
//!
//! Drives one editor session per invocation against a SQLite pet store.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "petstore")]
#[command(about = "Create and inspect pet records", long_about = None)]
struct Cli {
    /// SQLite database file (overrides PETSTORE_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files (overrides PETSTORE_LOG_DIR)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides PETSTORE_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Save a new pet
    Add(commands::AddArgs),
    /// Show one pet by address or id
    Show(commands::TargetArgs),
    /// Delete action (records are kept)
    Delete(commands::TargetArgs),
    /// Print the core version
    Version,
}

fn main() {
    let cli = Cli::parse();

    let overrides = commands::ConfigOverrides {
        db: cli.db,
        log_dir: cli.log_dir,
        log_level: cli.log_level,
    };
    let result = commands::load_config(overrides).and_then(|config| {
        match cli.command {
            Commands::Add(args) => commands::add(&config, args),
            Commands::Show(args) => commands::show(&config, args),
            Commands::Delete(args) => commands::delete(&config, args),
            Commands::Version => {
                println!("petstore_core version={}", petstore_core::core_version());
                Ok(())
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
