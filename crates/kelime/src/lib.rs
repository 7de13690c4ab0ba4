//! Kelime - authoritative move validation for the Kelime word board game
//!
//! Wraps [`kelime_rules`] with what a server or CLI needs around it.
//!
//! # Architecture
//!
//! - **Boundary**: typed request decoding and verdict records
//! - **Vocabulary**: dictionary loading from JSON arrays, list files, and list directories
//! - **Config**: TOML settings with environment overrides
//!
//! # Example
//!
//! ```no_run
//! use kelime::{MoveRequest, VerdictRecord, load_dictionary};
//! use kelime_rules::MoveValidator;
//!
//! # fn example() -> anyhow::Result<()> {
//! let dictionary = load_dictionary("turkish_words.json")?;
//! let request = MoveRequest::from_json(r#"{"committedBoard":{},"placedTiles":[]}"#)?;
//! let (board, placed) = request.decode()?;
//! let verdict = MoveValidator::new(&dictionary).validate(&placed, &board);
//! println!("{}", VerdictRecord::from(&verdict).to_json()?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod boundary;
mod config;
mod vocabulary;

// Crate-level exports - Boundary
pub use boundary::{BoundaryError, MoveRequest, VerdictRecord, WireTile};

// Crate-level exports - Configuration
pub use config::{CONFIG_FILE_NAME, ConfigError, DICTIONARY_ENV, KelimeConfig};

// Crate-level exports - Vocabulary
pub use vocabulary::{
    DictionaryError, DictionarySource, LIST_EXTENSION, load_dictionary, merge_list_directory,
    read_json_words, read_list_words, write_json_words,
};
