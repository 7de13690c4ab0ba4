//! The validation pipeline.

use crate::axis::{check_gaps, classify, sorted_coordinates};
use crate::board::{BoardView, CommittedBoard};
use crate::dictionary::{Lexicon, check_words};
use crate::error::PlacementError;
use crate::placement::PlacementRules;
use crate::tile::PlacedTile;
use crate::verdict::ValidationVerdict;
use crate::words::{CandidateWord, extract_words};
use tracing::{debug, instrument};

/// Validates moves against a fixed lexicon.
///
/// Holds only a borrow of the lexicon, so it is cheap to create per request
/// and can be shared between threads whenever the lexicon can.
pub struct MoveValidator<'d, L: Lexicon + ?Sized> {
    lexicon: &'d L,
}

impl<L: Lexicon + ?Sized> Clone for MoveValidator<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Lexicon + ?Sized> Copy for MoveValidator<'_, L> {}

impl<'d, L: Lexicon + ?Sized> MoveValidator<'d, L> {
    /// Creates a validator over `lexicon`.
    pub fn new(lexicon: &'d L) -> Self {
        Self { lexicon }
    }

    /// Decides whether `placed` is a legal move on `committed`.
    ///
    /// Stages run in order and the first failure is the answer:
    /// axis, gaps, placement rules, word extraction, dictionary.
    /// Neither input is modified.
    #[instrument(
        skip(self, placed, committed),
        fields(tiles = placed.len(), committed = committed.len())
    )]
    pub fn validate(&self, placed: &[PlacedTile], committed: &CommittedBoard) -> ValidationVerdict {
        match self.run(placed, committed) {
            Ok(words) => {
                debug!(words = words.len(), "Move accepted");
                ValidationVerdict::Ok(words)
            }
            Err(error) => {
                debug!(status = %error.status(), %error, "Move rejected");
                error.into()
            }
        }
    }

    fn run(
        &self,
        placed: &[PlacedTile],
        committed: &CommittedBoard,
    ) -> Result<Vec<CandidateWord>, PlacementError> {
        let sorted = sorted_coordinates(placed);
        let axis = classify(&sorted)?;
        let view = BoardView::new(committed, placed);

        check_gaps(&sorted, axis, &view)?;
        PlacementRules::check(placed, committed, axis)?;

        let candidates = extract_words(placed, &view)?;
        check_words(candidates, self.lexicon)
    }
}

/// One-shot validation without keeping a [`MoveValidator`] around.
pub fn check_word_placement<L: Lexicon + ?Sized>(
    placed: &[PlacedTile],
    committed: &CommittedBoard,
    lexicon: &L,
) -> ValidationVerdict {
    MoveValidator::new(lexicon).validate(placed, committed)
}
