//! Word extraction: reading the runs of letters a move forms.

use crate::board::BoardView;
use crate::coordinate::{Coordinate, Direction};
use crate::error::{PlacementError, PlacementViolation};
use crate::tile::PlacedTile;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Shortest run of letters that counts as a word.
pub const MIN_WORD_LENGTH: usize = 2;

/// A maximal run of letters through a placed tile, with the cells it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateWord {
    word: String,
    path: Vec<Coordinate>,
}

impl CandidateWord {
    /// The letters as they appear on the board.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Cells from the first letter to the last.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always false for extracted words; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Reads the maximal run through `origin` along `direction`.
///
/// Walks back while the previous cell is occupied, then forward collecting
/// letters until an empty cell or the board edge. Returns `None` when the
/// run is shorter than [`MIN_WORD_LENGTH`] (including when `origin` itself
/// is empty).
pub fn run_through(
    view: &BoardView<'_>,
    origin: Coordinate,
    direction: Direction,
) -> Option<CandidateWord> {
    let mut start = origin;
    while let Some(prev) = start.prev(direction).filter(|c| view.is_occupied(*c)) {
        start = prev;
    }

    let mut word = String::new();
    let mut path = Vec::new();
    let mut cell = Some(start);
    while let Some(current) = cell {
        let Some(letter) = view.letter_at(current) else {
            break;
        };
        word.push(letter.as_char());
        path.push(current);
        cell = current.next(direction);
    }

    (path.len() >= MIN_WORD_LENGTH).then_some(CandidateWord { word, path })
}

/// Extracts every word the placed tiles form.
///
/// For each placed tile, in input order, the horizontal and then the
/// vertical run through it is read. Runs are keyed by their letters: a later
/// run with the same spelling replaces the stored path but keeps the slot of
/// the first one, so the result is in first-discovery order with one entry
/// per distinct spelling.
#[instrument(skip(placed, view), fields(tiles = placed.len()))]
pub fn extract_words(
    placed: &[PlacedTile],
    view: &BoardView<'_>,
) -> Result<Vec<CandidateWord>, PlacementError> {
    let mut found: IndexMap<String, CandidateWord> = IndexMap::new();

    for tile in placed {
        for direction in Direction::CARDINAL {
            if let Some(candidate) = run_through(view, tile.coordinate(), direction) {
                debug!(
                    word = %candidate.word,
                    %direction,
                    origin = %tile.coordinate(),
                    "Found run"
                );
                found.insert(candidate.word.clone(), candidate);
            }
        }
    }

    if found.is_empty() {
        debug!("No run of two or more letters");
        return Err(PlacementViolation::NoWordFormed.into());
    }

    Ok(found.into_values().collect())
}
