//! Rejection reasons raised by the validation stages.
//!
//! Stages return `Result<_, PlacementError>` so they compose with `?`;
//! the validator turns the error into a
//! [`ValidationVerdict`](crate::ValidationVerdict) at the end.

use crate::coordinate::Coordinate;
use crate::verdict::ValidationStatus;

/// Why a placement broke a board rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlacementViolation {
    /// An empty cell separates two placed tiles along their axis.
    #[display("gap between placed tiles")]
    Gap(Coordinate),

    /// First move of the game missed the center square.
    #[display("first move must cover the center square")]
    CenterNotCovered,

    /// No placed tile touches a committed tile.
    #[display("placed tiles must touch an existing tile")]
    Disconnected,

    /// No run of two or more letters passes through a placed tile.
    #[display("no valid word of length >= 2 formed")]
    NoWordFormed,
}

impl std::error::Error for PlacementViolation {}

/// Error that ends validation early.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlacementError {
    /// The move had no tiles.
    #[display("no tiles placed")]
    NoTilesPlaced,

    /// The tiles are not on a single row, column or descending diagonal.
    #[display("tiles must lie on one row, one column, or a single top-left-to-bottom-right diagonal")]
    InvalidAxis,

    /// A board rule was broken.
    #[display("{}", _0)]
    InvalidPlacement(PlacementViolation),

    /// A formed word is not in the dictionary (board spelling).
    #[display("\"{}\" is not a valid word", _0)]
    InvalidWord(String),
}

impl PlacementError {
    /// Status this error reports as.
    pub fn status(&self) -> ValidationStatus {
        match self {
            PlacementError::NoTilesPlaced => ValidationStatus::NoTilesPlaced,
            PlacementError::InvalidAxis => ValidationStatus::InvalidAxis,
            PlacementError::InvalidPlacement(_) => ValidationStatus::InvalidPlacement,
            PlacementError::InvalidWord(_) => ValidationStatus::InvalidWord,
        }
    }
}

impl From<PlacementViolation> for PlacementError {
    fn from(violation: PlacementViolation) -> Self {
        PlacementError::InvalidPlacement(violation)
    }
}

impl std::error::Error for PlacementError {}
