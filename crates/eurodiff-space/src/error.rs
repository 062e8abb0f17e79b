//! Error types for space construction.

use eurodiff_core::{CaseError, Coordinate};
use std::fmt;

/// Errors arising from rectangle construction or index building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A rectangle's low corner exceeds its high corner on some axis.
    InvertedRect {
        /// Requested low corner.
        low: Coordinate,
        /// Requested high corner.
        high: Coordinate,
    },
    /// More than one entry was inserted at the same coordinate.
    CoordinateCollision {
        /// Every colliding coordinate, in first-seen order, without repeats.
        coords: Vec<Coordinate>,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRect { low, high } => {
                write!(f, "rect low corner {low} exceeds high corner {high}")
            }
            Self::CoordinateCollision { coords } => {
                write!(f, "{} coordinate(s) claimed more than once", coords.len())
            }
        }
    }
}

impl std::error::Error for SpaceError {}

impl From<SpaceError> for CaseError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::InvertedRect { low, high } => CaseError::CoordinateOutOfRange {
                region: format!("{low}-{high}"),
                reason: "low corner exceeds high corner".into(),
            },
            SpaceError::CoordinateCollision { coords } => CaseError::CoordinateCollision { coords },
        }
    }
}
