//! Letters and the tiles placed during a turn.

use crate::coordinate::Coordinate;
use crate::turkish;
use serde::{Deserialize, Serialize};

/// A single resolved glyph on the board.
///
/// Blank tiles reach the validator already resolved to the letter the
/// player chose, so a `Letter` is always a concrete character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Letter(char);

impl Letter {
    /// Wraps a character as-is.
    pub fn new(c: char) -> Self {
        Self(c)
    }

    /// Parses a letter from text, normalizing it to Turkish uppercase.
    ///
    /// Surrounding whitespace is ignored; anything other than exactly one
    /// remaining character is rejected.
    pub fn parse(text: &str) -> Result<Self, LetterError> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(c), None) => Ok(Self(turkish::upper_char(c))),
            (Some(_), Some(_)) => Err(LetterError::NotSingleGlyph(text.to_string())),
        }
    }

    /// Returns the character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error parsing a [`Letter`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum LetterError {
    /// No character at all.
    #[display("letter is empty")]
    Empty,

    /// More than one character.
    #[display("{:?} is not a single letter", _0)]
    NotSingleGlyph(String),
}

impl std::error::Error for LetterError {}

/// Opaque client token identifying a tile in the rack.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct TileId(String);

/// One tile put on the board this turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    letter: Letter,
    coordinate: Coordinate,
    is_blank: bool,
    id: Option<TileId>,
}

impl PlacedTile {
    /// Creates a regular (non-blank) tile without an id.
    pub fn new(letter: Letter, coordinate: Coordinate) -> Self {
        Self {
            letter,
            coordinate,
            is_blank: false,
            id: None,
        }
    }

    /// Marks the tile as a resolved blank.
    pub fn blank(mut self) -> Self {
        self.is_blank = true;
        self
    }

    /// Attaches the client's tile id.
    pub fn with_id(mut self, id: impl Into<TileId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The letter shown on the tile.
    pub fn letter(&self) -> Letter {
        self.letter
    }

    /// Where the tile was put.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Whether the tile is a blank resolved to [`PlacedTile::letter`].
    pub fn is_blank(&self) -> bool {
        self.is_blank
    }

    /// The client's tile id, if one was sent.
    pub fn id(&self) -> Option<&TileId> {
        self.id.as_ref()
    }
}
