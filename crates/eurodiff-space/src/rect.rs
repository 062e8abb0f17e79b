//! Axis-aligned integer rectangles.

use crate::error::SpaceError;
use eurodiff_core::Coordinate;

/// An inclusive, axis-aligned block of grid points.
///
/// Both corners belong to the rectangle, so a rect whose corners are equal
/// holds exactly one point. Construction rejects inverted corners, which
/// makes every `Rect` non-empty.
///
/// # Examples
///
/// ```
/// use eurodiff_core::Coordinate;
/// use eurodiff_space::Rect;
///
/// let rect = Rect::new(Coordinate::new(1, 1), Coordinate::new(3, 2)).unwrap();
/// assert_eq!(rect.cell_count(), 6);
/// assert_eq!(rect.points().next(), Some(Coordinate::new(1, 1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    low: Coordinate,
    high: Coordinate,
}

impl Rect {
    /// Create a rect spanning `low..=high` on both axes.
    ///
    /// Returns `Err(SpaceError::InvertedRect)` if `low` exceeds `high` on
    /// either axis.
    pub fn new(low: Coordinate, high: Coordinate) -> Result<Self, SpaceError> {
        if low.x > high.x || low.y > high.y {
            return Err(SpaceError::InvertedRect { low, high });
        }
        Ok(Self { low, high })
    }

    /// Lowest corner (inclusive).
    pub fn low(&self) -> Coordinate {
        self.low
    }

    /// Highest corner (inclusive).
    pub fn high(&self) -> Coordinate {
        self.high
    }

    /// Extent along x.
    pub fn width(&self) -> usize {
        (self.high.x - self.low.x + 1) as usize
    }

    /// Extent along y.
    pub fn height(&self) -> usize {
        (self.high.y - self.low.y + 1) as usize
    }

    /// Number of grid points inside the rect.
    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Every point of the rect, x-major: `(xl, yl), (xl, yl+1), ..., (xh, yh)`.
    pub fn points(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (self.low.x..=self.high.x)
            .flat_map(move |x| (self.low.y..=self.high.y).map(move |y| Coordinate::new(x, y)))
    }
}
