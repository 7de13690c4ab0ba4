//! Kelime rules - move-placement validation for a 15x15 Turkish word board game
//!
//! Given the tiles a player placed this turn and the board committed in
//! earlier turns, decides whether the move is legal, which words it forms,
//! and whether every word is in the dictionary.
//!
//! # Pipeline
//!
//! - **Axis**: one cell, one row, one column, or a unit top-left-to-bottom-right diagonal
//! - **Gaps**: no empty cell between placed tiles
//! - **Placement**: first move covers the center, later moves touch the board
//! - **Words**: every maximal run of two or more letters through a placed tile
//! - **Dictionary**: lookup under Turkish case folding
//!
//! # Example
//!
//! ```
//! use kelime_rules::{
//!     CommittedBoard, Coordinate, Dictionary, Letter, MoveValidator, PlacedTile, ValidationStatus,
//! };
//!
//! let dictionary = Dictionary::from_words(["kedi"]);
//! let placed: Vec<PlacedTile> = "KEDİ"
//!     .chars()
//!     .zip(5..)
//!     .map(|(c, col)| PlacedTile::new(Letter::new(c), Coordinate::new(7, col).unwrap()))
//!     .collect();
//!
//! let verdict = MoveValidator::new(&dictionary).validate(&placed, &CommittedBoard::new());
//! assert_eq!(verdict.status(), ValidationStatus::Ok);
//! assert_eq!(verdict.valid_words().unwrap()[0].word(), "KEDİ");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod axis;
mod board;
mod coordinate;
mod dictionary;
mod error;
mod placement;
mod tile;
pub mod turkish;
mod validator;
mod verdict;
mod words;

// Crate-level exports - Geometry
pub use coordinate::{BOARD_SIZE, Coordinate, CoordinateError, Direction};

// Crate-level exports - Tiles and boards
pub use board::{BoardView, CommittedBoard};
pub use tile::{Letter, LetterError, PlacedTile, TileId};

// Crate-level exports - Pipeline stages
pub use axis::{Axis, check_gaps, classify, sorted_coordinates};
pub use placement::{CoversCenter, PlacementRules, TouchesCommitted};
pub use words::{CandidateWord, MIN_WORD_LENGTH, extract_words, run_through};

// Crate-level exports - Dictionary
pub use dictionary::{Dictionary, Lexicon, check_words};

// Crate-level exports - Results
pub use error::{PlacementError, PlacementViolation};
pub use validator::{MoveValidator, check_word_placement};
pub use verdict::{ValidationStatus, ValidationVerdict};
