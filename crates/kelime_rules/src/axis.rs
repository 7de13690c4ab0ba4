//! Axis classification and gap checking for the tiles placed in one turn.

use crate::board::BoardView;
use crate::coordinate::{Coordinate, Direction};
use crate::error::{PlacementError, PlacementViolation};
use crate::tile::PlacedTile;
use tracing::{debug, instrument};

/// Geometric shape of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Axis {
    /// Exactly one tile.
    Single,
    /// All tiles share a row.
    Horizontal,
    /// All tiles share a column.
    Vertical,
    /// Each tile is one down and one right of the previous one.
    DiagonalTlbr,
}

impl Axis {
    /// Stride between consecutive tiles, `None` for a single tile.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Axis::Single => None,
            Axis::Horizontal => Some(Direction::Horizontal),
            Axis::Vertical => Some(Direction::Vertical),
            Axis::DiagonalTlbr => Some(Direction::DiagonalTlbr),
        }
    }
}

/// Coordinates of the placed tiles in row-major order.
pub fn sorted_coordinates(tiles: &[PlacedTile]) -> Vec<Coordinate> {
    let mut cells: Vec<Coordinate> = tiles.iter().map(PlacedTile::coordinate).collect();
    cells.sort();
    cells
}

/// Classifies already-sorted coordinates.
///
/// Horizontal is tried before vertical, and both before the diagonal, so a
/// degenerate input (every tile on one cell) reads as horizontal.
#[instrument(skip(sorted), fields(tiles = sorted.len()))]
pub fn classify(sorted: &[Coordinate]) -> Result<Axis, PlacementError> {
    let Some(first) = sorted.first() else {
        return Err(PlacementError::NoTilesPlaced);
    };
    if sorted.len() == 1 {
        return Ok(Axis::Single);
    }

    let axis = if sorted.iter().all(|c| c.row() == first.row()) {
        Axis::Horizontal
    } else if sorted.iter().all(|c| c.col() == first.col()) {
        Axis::Vertical
    } else if sorted
        .windows(2)
        .all(|pair| pair[0].next(Direction::DiagonalTlbr) == Some(pair[1]))
    {
        Axis::DiagonalTlbr
    } else {
        debug!(?sorted, "Tiles share no axis");
        return Err(PlacementError::InvalidAxis);
    };

    debug!(%axis, "Classified placement");
    Ok(axis)
}

/// Checks that every cell between consecutive placed tiles is covered.
///
/// `sorted` must be the output of [`sorted_coordinates`] and `axis` its
/// classification. Cells may be covered by either board layer.
#[instrument(skip(sorted, view), fields(tiles = sorted.len()))]
pub fn check_gaps(
    sorted: &[Coordinate],
    axis: Axis,
    view: &BoardView<'_>,
) -> Result<(), PlacementViolation> {
    let Some(direction) = axis.direction() else {
        return Ok(());
    };

    for pair in sorted.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let mut cell = from.next(direction);
        while let Some(current) = cell {
            if current >= to {
                break;
            }
            if !view.is_occupied(current) {
                debug!(gap = %current, "Empty cell between placed tiles");
                return Err(PlacementViolation::Gap(current));
            }
            cell = current.next(direction);
        }
    }

    Ok(())
}
