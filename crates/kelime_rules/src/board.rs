//! Committed board state and the read-through view used during validation.

use crate::coordinate::{BOARD_SIZE, Coordinate};
use crate::tile::{Letter, PlacedTile};
use std::collections::BTreeMap;

/// Tiles committed in earlier turns.
///
/// The validator only ever reads this; the game-state owner builds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommittedBoard {
    cells: BTreeMap<Coordinate, Letter>,
}

impl CommittedBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a letter on a cell, returning the letter it replaced.
    pub fn place(&mut self, coordinate: Coordinate, letter: Letter) -> Option<Letter> {
        self.cells.insert(coordinate, letter)
    }

    /// Letter at a cell.
    pub fn get(&self, coordinate: Coordinate) -> Option<Letter> {
        self.cells.get(&coordinate).copied()
    }

    /// Whether a cell holds a committed tile.
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.cells.contains_key(&coordinate)
    }

    /// True before the first move of a game.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of committed tiles.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Committed cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Letter)> + '_ {
        self.cells.iter().map(|(c, l)| (*c, *l))
    }

    /// Formats the board as a human-readable grid, `.` for empty cells.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = Coordinate::new(row, col)
                    .ok()
                    .and_then(|c| self.get(c))
                    .map_or('.', Letter::as_char);
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }
}

impl FromIterator<(Coordinate, Letter)> for CommittedBoard {
    fn from_iter<I: IntoIterator<Item = (Coordinate, Letter)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// The committed board with this turn's tiles laid over it.
///
/// Lookups check the placed tiles first (the last one wins if a cell was
/// placed twice), then fall through to the committed board. Nothing is
/// copied.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    committed: &'a CommittedBoard,
    placed: &'a [PlacedTile],
}

impl<'a> BoardView<'a> {
    /// Overlays `placed` on `committed`.
    pub fn new(committed: &'a CommittedBoard, placed: &'a [PlacedTile]) -> Self {
        Self { committed, placed }
    }

    /// Letter visible at a cell.
    pub fn letter_at(&self, coordinate: Coordinate) -> Option<Letter> {
        self.placed
            .iter()
            .rev()
            .find(|tile| tile.coordinate() == coordinate)
            .map(PlacedTile::letter)
            .or_else(|| self.committed.get(coordinate))
    }

    /// Whether a cell is covered by either layer.
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.letter_at(coordinate).is_some()
    }

    /// The committed layer.
    pub fn committed(&self) -> &'a CommittedBoard {
        self.committed
    }

    /// The placed layer.
    pub fn placed(&self) -> &'a [PlacedTile] {
        self.placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn placed_tiles_take_precedence() {
        let committed: CommittedBoard = [(at(7, 7), Letter::new('A'))].into_iter().collect();
        let placed = [PlacedTile::new(Letter::new('B'), at(7, 7))];
        let view = BoardView::new(&committed, &placed);
        assert_eq!(view.letter_at(at(7, 7)), Some(Letter::new('B')));
        assert_eq!(committed.get(at(7, 7)), Some(Letter::new('A')));
    }

    #[test]
    fn later_duplicate_placement_wins() {
        let committed = CommittedBoard::new();
        let placed = [
            PlacedTile::new(Letter::new('B'), at(2, 2)),
            PlacedTile::new(Letter::new('C'), at(2, 2)),
        ];
        let view = BoardView::new(&committed, &placed);
        assert_eq!(view.letter_at(at(2, 2)), Some(Letter::new('C')));
    }

    #[test]
    fn falls_through_to_committed() {
        let mut committed = CommittedBoard::new();
        committed.place(at(0, 1), Letter::new('E'));
        let view = BoardView::new(&committed, &[]);
        assert!(view.is_occupied(at(0, 1)));
        assert!(!view.is_occupied(at(0, 2)));
    }

    #[test]
    fn display_renders_grid() {
        let mut committed = CommittedBoard::new();
        committed.place(at(0, 0), Letter::new('Ş'));
        let text = committed.display();
        let first = text.lines().next().unwrap();
        assert_eq!(first.chars().count(), 15);
        assert!(first.starts_with("Ş."));
        assert_eq!(text.lines().count(), 15);
    }
}
