//! Coordinate lookup and orthogonal neighbour resolution.

use crate::error::SpaceError;
use eurodiff_core::Coordinate;
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

/// Neighbour probe order: +x, -x, +y, -y.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Maps grid coordinates to caller-supplied handles (typically cell ids).
///
/// Built once per case from the full set of cells. Building doubles as
/// the collision check: every coordinate may be claimed exactly once.
/// Iteration order is insertion order, so anything derived from the
/// index is deterministic.
#[derive(Clone, Debug)]
pub struct CoordIndex<T> {
    entries: IndexMap<Coordinate, T>,
}

impl<T: Copy> CoordIndex<T> {
    /// Build an index from `(coordinate, handle)` pairs.
    ///
    /// Returns `Err(SpaceError::CoordinateCollision)` naming every
    /// coordinate that appears more than once, not just the first.
    pub fn build<I>(items: I) -> Result<Self, SpaceError>
    where
        I: IntoIterator<Item = (Coordinate, T)>,
    {
        let mut entries = IndexMap::new();
        let mut collisions = IndexSet::new();
        for (coord, handle) in items {
            if entries.contains_key(&coord) {
                collisions.insert(coord);
            } else {
                entries.insert(coord, handle);
            }
        }
        if !collisions.is_empty() {
            return Err(SpaceError::CoordinateCollision {
                coords: collisions.into_iter().collect(),
            });
        }
        Ok(Self { entries })
    }

    /// Number of indexed coordinates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no coordinates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handle stored at `coord`, if any.
    pub fn get(&self, coord: Coordinate) -> Option<T> {
        self.entries.get(&coord).copied()
    }

    /// Handles of the indexed orthogonal neighbours of `coord`, in
    /// [`ORTHOGONAL_OFFSETS`] order. Missing coordinates are skipped.
    pub fn neighbours(&self, coord: Coordinate) -> SmallVec<[T; 4]> {
        ORTHOGONAL_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.get(coord.offset(dx, dy)))
            .collect()
    }
}
