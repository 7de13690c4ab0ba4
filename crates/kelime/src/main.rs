//! Kelime - Unified CLI
//!
//! Move validation, dictionary lookup and vocabulary building.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use kelime::{
    DICTIONARY_ENV, KelimeConfig, MoveRequest, VerdictRecord, load_dictionary, merge_list_directory,
    write_json_words,
};
use kelime_rules::MoveValidator;
use std::io::{BufRead, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = KelimeConfig::resolve(cli.config.as_deref(), Path::new("."))?
        .with_env_dictionary(std::env::var(DICTIONARY_ENV).ok());
    if let Some(dictionary) = cli.dictionary {
        config = config.with_dictionary(dictionary);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Check { request } => run_check(&config, request),
        Command::Words { words } => run_words(&config, words),
        Command::Vocabulary { input, output } => run_vocabulary(&input, &output),
    }
}

/// Validates one move request and prints the verdict.
///
/// Exits with 1 when the move is rejected.
#[instrument(skip(config))]
fn run_check(config: &KelimeConfig, request: Option<PathBuf>) -> Result<ExitCode> {
    let text = match &request {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            buffer
        }
    };

    let (board, placed) = MoveRequest::from_json(&text)?.decode()?;
    let dictionary = load_dictionary(config.dictionary())?;

    let verdict = MoveValidator::new(&dictionary).validate(&placed, &board);
    info!(status = %verdict.status(), "Move checked");
    println!("{}", VerdictRecord::from(&verdict).to_json()?);

    Ok(if verdict.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Prints `C: word` for known words and `W: word` for the rest.
#[instrument(skip(config, words), fields(words = words.len()))]
fn run_words(config: &KelimeConfig, words: Vec<String>) -> Result<ExitCode> {
    let dictionary = load_dictionary(config.dictionary())?;

    let words = if words.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("Failed to read words from stdin")?
    } else {
        words
    };

    for word in words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
        let tag = if dictionary.contains(word) { 'C' } else { 'W' };
        println!("{tag}: {word}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Merges `.list` files and writes them as one JSON array.
#[instrument(skip(input, output), fields(input = %input.display(), output = %output.display()))]
fn run_vocabulary(input: &Path, output: &Path) -> Result<ExitCode> {
    let words = merge_list_directory(input)?;
    if words.is_empty() {
        bail!("No words found in {}", input.display());
    }

    write_json_words(&words, output)?;
    println!("{} words written to {}", words.len(), output.display());
    Ok(ExitCode::SUCCESS)
}
