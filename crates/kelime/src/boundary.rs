//! Wire records for move validation requests and verdicts.
//!
//! Clients send the committed board as `"row_col" -> letter` and the placed
//! tiles as plain records. Everything is checked here, so the validator only
//! ever sees in-range coordinates and single-glyph letters.

use derive_getters::Getters;
use derive_new::new;
use kelime_rules::{
    CandidateWord, CommittedBoard, Coordinate, CoordinateError, Letter, LetterError, PlacedTile,
    ValidationStatus, ValidationVerdict,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument};

/// A placed tile as the client sends it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct WireTile {
    /// Resolved letter, any case.
    letter: String,
    /// Row index.
    row: i64,
    /// Column index.
    col: i64,
    /// Whether the tile is a blank.
    #[serde(default, alias = "is_blank")]
    #[new(default)]
    is_blank: bool,
    /// Client tile id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[new(default)]
    id: Option<String>,
}

/// A request to validate one move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Committed tiles keyed by `"row_col"`.
    #[serde(default, alias = "committed_board", deserialize_with = "null_as_default")]
    committed_board: BTreeMap<String, String>,
    /// Tiles placed this turn, in play order.
    #[serde(default, alias = "placed_tiles", deserialize_with = "null_as_default")]
    placed_tiles: Vec<WireTile>,
}

/// Reads `null` as the type's default, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MoveRequest {
    /// Parses a request from JSON text.
    pub fn from_json(text: &str) -> Result<Self, BoundaryError> {
        serde_json::from_str(text).map_err(|e| BoundaryError::Json(e.to_string()))
    }

    /// Checks the request and converts it to validator inputs.
    ///
    /// Letters are normalized to Turkish uppercase, so the `invalidWord` of
    /// a rejected move comes back in that normalized spelling, not in the
    /// case the client sent. Placed tiles keep their order. An empty or
    /// `null` tile list is not an error here.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError`] for a malformed key, two keys naming one
    /// cell, an out-of-range coordinate, a letter that is not exactly one
    /// glyph, a tile on a committed cell, or two tiles on one cell.
    #[instrument(
        skip(self),
        fields(committed = self.committed_board.len(), placed = self.placed_tiles.len())
    )]
    pub fn decode(&self) -> Result<(CommittedBoard, Vec<PlacedTile>), BoundaryError> {
        let mut board = CommittedBoard::new();
        for (key, letter) in &self.committed_board {
            let coordinate = Coordinate::from_key(key)?;
            let letter = Letter::parse(letter).map_err(|reason| BoundaryError::Letter {
                cell: key.clone(),
                reason,
            })?;
            if board.place(coordinate, letter).is_some() {
                return Err(BoundaryError::DuplicateCell(coordinate));
            }
        }

        let mut seen = BTreeSet::new();
        let mut placed = Vec::with_capacity(self.placed_tiles.len());
        for wire in &self.placed_tiles {
            let coordinate = Coordinate::from_signed(wire.row, wire.col)?;
            if board.is_occupied(coordinate) {
                return Err(BoundaryError::OccupiedCell(coordinate));
            }
            if !seen.insert(coordinate) {
                return Err(BoundaryError::DuplicatePlacement(coordinate));
            }
            let letter = Letter::parse(&wire.letter).map_err(|reason| BoundaryError::Letter {
                cell: coordinate.key(),
                reason,
            })?;

            let mut tile = PlacedTile::new(letter, coordinate);
            if wire.is_blank {
                tile = tile.blank();
            }
            if let Some(id) = &wire.id {
                tile = tile.with_id(id.clone());
            }
            placed.push(tile);
        }

        debug!("Request decoded");
        Ok((board, placed))
    }
}

/// A verdict in wire form.
///
/// `validWords` appears only for `Ok` and `invalidWord` only for
/// `InvalidWord`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictRecord {
    /// Outcome category.
    status: ValidationStatus,
    /// Human-readable explanation.
    message: String,
    /// Accepted words with their paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    valid_words: Option<Vec<CandidateWord>>,
    /// The rejected word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    invalid_word: Option<String>,
}

impl VerdictRecord {
    /// Serializes as compact JSON.
    pub fn to_json(&self) -> Result<String, BoundaryError> {
        serde_json::to_string(self).map_err(|e| BoundaryError::Json(e.to_string()))
    }
}

impl From<&ValidationVerdict> for VerdictRecord {
    fn from(verdict: &ValidationVerdict) -> Self {
        Self {
            status: verdict.status(),
            message: verdict.message(),
            valid_words: verdict.valid_words().map(<[CandidateWord]>::to_vec),
            invalid_word: verdict.invalid_word().map(str::to_string),
        }
    }
}

impl From<ValidationVerdict> for VerdictRecord {
    fn from(verdict: ValidationVerdict) -> Self {
        Self::from(&verdict)
    }
}

/// Error decoding a [`MoveRequest`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoundaryError {
    /// Request text is not valid JSON of the expected shape.
    #[display("invalid request: {}", _0)]
    Json(String),

    /// A board key or tile position is malformed or off the board.
    #[display("{}", _0)]
    Coordinate(CoordinateError),

    /// A letter is empty or longer than one glyph.
    #[display("bad letter at {}: {}", cell, reason)]
    Letter {
        /// Board key of the offending cell.
        cell: String,
        /// What was wrong with it.
        reason: LetterError,
    },

    /// Two committed keys name the same cell, such as `"7_7"` and `"07_7"`.
    #[display("board cell {} listed more than once", _0.notation())]
    DuplicateCell(Coordinate),

    /// A placed tile sits on a committed cell.
    #[display("cell {} is already occupied", _0.notation())]
    OccupiedCell(Coordinate),

    /// Two placed tiles share a cell.
    #[display("more than one tile placed on {}", _0.notation())]
    DuplicatePlacement(Coordinate),
}

impl std::error::Error for BoundaryError {}

impl From<CoordinateError> for BoundaryError {
    fn from(error: CoordinateError) -> Self {
        BoundaryError::Coordinate(error)
    }
}
