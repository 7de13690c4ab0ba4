//! Placement rules: where a move may go relative to the committed board.
//!
//! Each rule is a unit struct with a `check` function, and [`PlacementRules`]
//! composes them. Rules read the committed board only; the tiles of the
//! current move never count as "existing" tiles.

use crate::axis::Axis;
use crate::board::CommittedBoard;
use crate::coordinate::Coordinate;
use crate::error::PlacementViolation;
use crate::tile::PlacedTile;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Individual rules
// ─────────────────────────────────────────────────────────────

/// Rule: the first move of a game covers the center square.
pub struct CoversCenter;

impl CoversCenter {
    /// Passes when some placed tile sits on [`Coordinate::CENTER`].
    #[instrument(skip(placed), fields(tiles = placed.len()))]
    pub fn check(placed: &[PlacedTile]) -> Result<(), PlacementViolation> {
        if placed.iter().any(|t| t.coordinate() == Coordinate::CENTER) {
            Ok(())
        } else {
            Err(PlacementViolation::CenterNotCovered)
        }
    }
}

/// Rule: a later move touches at least one committed tile orthogonally.
pub struct TouchesCommitted;

impl TouchesCommitted {
    /// Passes when some placed tile has a committed up/down/left/right neighbour.
    #[instrument(skip(placed, committed), fields(tiles = placed.len()))]
    pub fn check(
        placed: &[PlacedTile],
        committed: &CommittedBoard,
    ) -> Result<(), PlacementViolation> {
        let touches = placed.iter().any(|tile| {
            tile.coordinate()
                .orthogonal_neighbors()
                .any(|neighbor| committed.is_occupied(neighbor))
        });
        if touches {
            Ok(())
        } else {
            Err(PlacementViolation::Disconnected)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Composite
// ─────────────────────────────────────────────────────────────

/// All placement rules, applied according to the game phase.
///
/// - Empty committed board: [`CoversCenter`].
/// - Otherwise: [`TouchesCommitted`], except for diagonal placements, which
///   are accepted without touching anything.
pub struct PlacementRules;

impl PlacementRules {
    /// Validates a classified placement against the committed board.
    #[instrument(
        skip(placed, committed),
        fields(tiles = placed.len(), committed = committed.len())
    )]
    pub fn check(
        placed: &[PlacedTile],
        committed: &CommittedBoard,
        axis: Axis,
    ) -> Result<(), PlacementViolation> {
        if committed.is_empty() {
            return CoversCenter::check(placed);
        }

        // Diagonal moves skip the connectivity rule.
        if axis == Axis::DiagonalTlbr {
            debug!("Diagonal placement bypasses the connectivity rule");
            return Ok(());
        }

        TouchesCommitted::check(placed, committed)
    }
}
