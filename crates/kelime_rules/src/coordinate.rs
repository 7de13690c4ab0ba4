//! Board geometry: bounded coordinates and walking directions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 15;

/// A cell on the board.
///
/// Both components are always in `0..BOARD_SIZE`; the only way to build one
/// is through [`Coordinate::new`] (or deserialization, which goes through it).
/// Ordering is row-major, which is the sort order the axis classifier uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "CoordinateParts")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a coordinate.
#[derive(Debug, Clone, Copy, Deserialize)]
struct CoordinateParts {
    row: i64,
    col: i64,
}

impl TryFrom<CoordinateParts> for Coordinate {
    type Error = CoordinateError;

    fn try_from(parts: CoordinateParts) -> Result<Self, Self::Error> {
        Coordinate::from_signed(parts.row, parts.col)
    }
}

impl Coordinate {
    /// The center square every first move must cover.
    pub const CENTER: Coordinate = Coordinate { row: 7, col: 7 };

    /// Creates a coordinate, rejecting cells outside the board.
    pub fn new(row: u8, col: u8) -> Result<Self, CoordinateError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(CoordinateError::OutOfBounds {
                row: i64::from(row),
                col: i64::from(col),
            });
        }
        Ok(Self { row, col })
    }

    /// Creates a coordinate from signed components (as they arrive on the wire).
    pub fn from_signed(row: i64, col: i64) -> Result<Self, CoordinateError> {
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(r), Ok(c)) => Self::new(r, c),
            _ => Err(CoordinateError::OutOfBounds { row, col }),
        }
    }

    /// Parses a `"row_col"` board key.
    #[instrument]
    pub fn from_key(key: &str) -> Result<Self, CoordinateError> {
        let malformed = || CoordinateError::MalformedKey(key.to_string());
        let (row, col) = key.split_once('_').ok_or_else(malformed)?;
        let row: i64 = row.trim().parse().map_err(|_| malformed())?;
        let col: i64 = col.trim().parse().map_err(|_| malformed())?;
        Self::from_signed(row, col)
    }

    /// Renders the `"row_col"` board key.
    pub fn key(self) -> String {
        format!("{}_{}", self.row, self.col)
    }

    /// Board notation: column letter followed by the 1-based row (`(7, 7)` is `H8`).
    pub fn notation(self) -> String {
        let column = char::from(b'A' + self.col);
        format!("{}{}", column, self.row + 1)
    }

    /// Returns the row index.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Moves by a signed offset, or `None` when that leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col).ok()
    }

    /// The next cell along `direction`.
    pub fn next(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        self.offset(d_row, d_col)
    }

    /// The previous cell along `direction`.
    pub fn prev(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        self.offset(-d_row, -d_col)
    }

    /// Up, down, left and right neighbours that exist on the board.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coordinate> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(d_row, d_col)| self.offset(d_row, d_col))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A unit stride across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalTlbr,
}

impl Direction {
    /// The two directions words are read in.
    pub const CARDINAL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// `(row, col)` step for one cell forward.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalTlbr => (1, 1),
        }
    }
}

/// Error building a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CoordinateError {
    /// Row or column outside `0..BOARD_SIZE`.
    #[display("cell ({}, {}) is outside the {}x{} board", row, col, BOARD_SIZE, BOARD_SIZE)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// Board key not of the form `row_col`.
    #[display("malformed board key {:?}", _0)]
    MalformedKey(String),
}

impl std::error::Error for CoordinateError {}
