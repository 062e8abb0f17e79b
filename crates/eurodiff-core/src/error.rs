//! Error types for case validation.
//!
//! Every error is scoped to a single case: a failing case renders its
//! message in place of a result and never affects the other cases of a
//! run. All kinds are detected before the day loop starts.

use crate::Coordinate;
use std::error::Error;
use std::fmt;

/// Reasons a case is rejected before (or instead of) simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseError {
    /// The supplied region count differs from the declared count, or
    /// falls outside the allowed range.
    CountMismatch {
        /// Count announced by the case header; may be negative.
        declared: i64,
        /// Number of region records actually supplied.
        actual: usize,
        /// Smallest permitted region count.
        min: usize,
        /// Largest permitted region count.
        max: usize,
    },
    /// The diffusion divisor is too small: a city with the maximum
    /// number of neighbours would export more than it holds.
    PortionTooSmall {
        /// Configured divisor.
        portion: u64,
        /// Smallest divisor that keeps every export within the balance.
        min: u64,
    },
    /// A region name exceeds the maximum length.
    NameTooLong {
        /// The offending name.
        name: String,
        /// Its length in characters.
        len: usize,
        /// Maximum permitted length.
        max: usize,
    },
    /// A rectangle corner lies outside the grid, or low > high on an axis.
    CoordinateOutOfRange {
        /// Name of the region whose rectangle is invalid.
        region: String,
        /// Description of the violated bound.
        reason: String,
    },
    /// A region record is missing fields or carries unparsable integers.
    MalformedRecord {
        /// The raw record text.
        record: String,
        /// What could not be parsed.
        reason: String,
    },
    /// Two or more cells claim the same coordinate.
    CoordinateCollision {
        /// Every colliding coordinate, in first-seen order.
        coords: Vec<Coordinate>,
    },
    /// Regions without a single cell bordering a foreign cell.
    DisconnectedRegion {
        /// Names of every region lacking a foreign border.
        regions: Vec<String>,
    },
    /// The cell graph splits into components, so some currencies can
    /// never reach some cities.
    DisconnectedGrid {
        /// Names of the regions unreachable from the first region.
        regions: Vec<String>,
    },
}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountMismatch {
                declared,
                actual,
                min,
                max,
            } => {
                if !i64::try_from(*actual).is_ok_and(|a| a == *declared) {
                    write!(
                        f,
                        "count of countries should be {declared}, but got {actual} country lines"
                    )
                } else {
                    write!(
                        f,
                        "count of countries should be between {min} and {max}, but got {actual}"
                    )
                }
            }
            Self::PortionTooSmall { portion, min } => write!(
                f,
                "representative portion should be >= {min}, but got {portion}"
            ),
            Self::NameTooLong { name, len, max } => write!(
                f,
                "maximum length of country name is {max}, but got {name} with length {len}"
            ),
            Self::CoordinateOutOfRange { region, reason } => {
                write!(f, "{reason} for {region}")
            }
            Self::MalformedRecord { record, reason } => {
                write!(f, "malformed record \"{record}\": {reason}")
            }
            Self::CoordinateCollision { coords } => {
                write!(f, "cities crossed at: ")?;
                write_joined(f, coords)
            }
            Self::DisconnectedRegion { regions } => {
                write!(f, "countries without borders: ")?;
                write_joined(f, regions)
            }
            Self::DisconnectedGrid { regions } => {
                write!(f, "countries unreachable from the first country: ")?;
                write_joined(f, regions)
            }
        }
    }
}

impl Error for CaseError {}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_mismatch_prefers_declared_difference() {
        let e = CaseError::CountMismatch {
            declared: 3,
            actual: 2,
            min: 1,
            max: 20,
        };
        assert_eq!(
            e.to_string(),
            "count of countries should be 3, but got 2 country lines"
        );
    }

    #[test]
    fn count_out_of_range_message() {
        let e = CaseError::CountMismatch {
            declared: 21,
            actual: 21,
            min: 1,
            max: 20,
        };
        assert_eq!(
            e.to_string(),
            "count of countries should be between 1 and 20, but got 21"
        );
    }

    #[test]
    fn negative_declared_count_is_a_mismatch() {
        let e = CaseError::CountMismatch {
            declared: -1,
            actual: 0,
            min: 1,
            max: 20,
        };
        assert_eq!(
            e.to_string(),
            "count of countries should be -1, but got 0 country lines"
        );
    }

    #[test]
    fn portion_message_names_the_bound() {
        let e = CaseError::PortionTooSmall { portion: 3, min: 4 };
        assert_eq!(
            e.to_string(),
            "representative portion should be >= 4, but got 3"
        );
    }

    #[test]
    fn collision_lists_every_coordinate() {
        let e = CaseError::CoordinateCollision {
            coords: vec![Coordinate::new(1, 1), Coordinate::new(2, 1)],
        };
        assert_eq!(e.to_string(), "cities crossed at: (1, 1), (2, 1)");
    }

    #[test]
    fn disconnected_region_lists_names() {
        let e = CaseError::DisconnectedRegion {
            regions: vec!["Andorra".into(), "Malta".into()],
        };
        assert_eq!(e.to_string(), "countries without borders: Andorra, Malta");
    }
}
