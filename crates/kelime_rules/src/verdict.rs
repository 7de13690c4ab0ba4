//! The single answer a validation call produces.

use crate::error::{PlacementError, PlacementViolation};
use crate::words::CandidateWord;
use serde::{Deserialize, Serialize};

/// Outcome category of a validation call.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ValidationStatus {
    /// The move is legal and every word is known.
    Ok,
    /// The move had no tiles.
    NoTilesPlaced,
    /// Tiles are not on one row, column or descending diagonal.
    InvalidAxis,
    /// A board rule was broken or no word was formed.
    InvalidPlacement,
    /// A formed word is not in the dictionary.
    InvalidWord,
}

/// Result of validating one move.
///
/// Exactly one of [`valid_words`](Self::valid_words) and
/// [`invalid_word`](Self::invalid_word) is present, and only for
/// [`ValidationStatus::Ok`] and [`ValidationStatus::InvalidWord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    /// Accepted, with every formed word in discovery order.
    Ok(Vec<CandidateWord>),
    /// Nothing was placed.
    NoTilesPlaced,
    /// Tiles share no axis.
    InvalidAxis,
    /// A board rule was broken.
    InvalidPlacement(PlacementViolation),
    /// The first unknown word, in board spelling.
    InvalidWord(String),
}

impl ValidationVerdict {
    /// Outcome category.
    pub fn status(&self) -> ValidationStatus {
        match self {
            ValidationVerdict::Ok(_) => ValidationStatus::Ok,
            ValidationVerdict::NoTilesPlaced => ValidationStatus::NoTilesPlaced,
            ValidationVerdict::InvalidAxis => ValidationStatus::InvalidAxis,
            ValidationVerdict::InvalidPlacement(_) => ValidationStatus::InvalidPlacement,
            ValidationVerdict::InvalidWord(_) => ValidationStatus::InvalidWord,
        }
    }

    /// Human-readable explanation.
    pub fn message(&self) -> String {
        match self {
            ValidationVerdict::Ok(_) => "valid placement".to_string(),
            ValidationVerdict::NoTilesPlaced => PlacementError::NoTilesPlaced.to_string(),
            ValidationVerdict::InvalidAxis => PlacementError::InvalidAxis.to_string(),
            ValidationVerdict::InvalidPlacement(violation) => violation.to_string(),
            ValidationVerdict::InvalidWord(word) => {
                PlacementError::InvalidWord(word.clone()).to_string()
            }
        }
    }

    /// Accepted words, present only when the move is legal.
    pub fn valid_words(&self) -> Option<&[CandidateWord]> {
        match self {
            ValidationVerdict::Ok(words) => Some(words),
            _ => None,
        }
    }

    /// The rejected word, present only for [`ValidationStatus::InvalidWord`].
    pub fn invalid_word(&self) -> Option<&str> {
        match self {
            ValidationVerdict::InvalidWord(word) => Some(word),
            _ => None,
        }
    }

    /// Whether the move was accepted.
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationVerdict::Ok(_))
    }
}

impl std::fmt::Display for ValidationVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status(), self.message())
    }
}

impl From<PlacementError> for ValidationVerdict {
    fn from(error: PlacementError) -> Self {
        match error {
            PlacementError::NoTilesPlaced => ValidationVerdict::NoTilesPlaced,
            PlacementError::InvalidAxis => ValidationVerdict::InvalidAxis,
            PlacementError::InvalidPlacement(violation) => {
                ValidationVerdict::InvalidPlacement(violation)
            }
            PlacementError::InvalidWord(word) => ValidationVerdict::InvalidWord(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn error_status_survives_conversion() {
        let errors = [
            PlacementError::NoTilesPlaced,
            PlacementError::InvalidAxis,
            PlacementError::InvalidPlacement(PlacementViolation::Disconnected),
            PlacementError::InvalidWord("XQ".into()),
        ];
        for error in errors {
            let status = error.status();
            let message = error.to_string();
            let verdict = ValidationVerdict::from(error);
            assert_eq!(verdict.status(), status);
            assert_eq!(verdict.message(), message);
        }
    }

    #[test]
    fn payloads_only_on_matching_status() {
        let rejected = ValidationVerdict::InvalidWord("XQ".into());
        assert_eq!(rejected.invalid_word(), Some("XQ"));
        assert!(rejected.valid_words().is_none());
        assert!(!rejected.is_ok());

        let accepted = ValidationVerdict::Ok(Vec::new());
        assert!(accepted.invalid_word().is_none());
        assert_eq!(accepted.valid_words().map(<[CandidateWord]>::len), Some(0));
    }

    #[test]
    fn status_names() {
        let names: Vec<String> = ValidationStatus::iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            ["Ok", "NoTilesPlaced", "InvalidAxis", "InvalidPlacement", "InvalidWord"]
        );
    }

    #[test]
    fn display_joins_status_and_message() {
        assert_eq!(
            ValidationVerdict::InvalidAxis.to_string(),
            "InvalidAxis: tiles must lie on one row, one column, or a single top-left-to-bottom-right diagonal"
        );
    }
}
