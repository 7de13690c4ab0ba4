//! Command-line interface for kelime.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kelime - move validation for the Turkish word board game
#[derive(Parser, Debug)]
#[command(name = "kelime")]
#[command(about = "Validate word board moves against a Turkish dictionary", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ./kelime.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dictionary source, overriding config and KELIME_DICTIONARY
    #[arg(long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a move request and print the verdict as JSON
    Check {
        /// Request file (reads stdin if not provided)
        #[arg(short, long)]
        request: Option<PathBuf>,
    },

    /// Look words up in the dictionary
    Words {
        /// Words to check (reads stdin lines if none given)
        words: Vec<String>,
    },

    /// Merge a directory of .list files into a JSON word array
    Vocabulary {
        /// Directory containing .list files
        #[arg(short, long)]
        input: PathBuf,

        /// JSON file to write
        #[arg(short, long, default_value = "turkish_words.json")]
        output: PathBuf,
    },
}
