//! Geometric validation of a case's cell set.
//!
//! Runs once per case after every region has laid out its cells:
//!
//! 1. [`index_cells`] builds the coordinate index, failing on any
//!    coordinate claimed by more than one cell.
//! 2. After neighbour wiring, [`check_borders`] requires every region to
//!    touch a foreign cell (only when the case has several regions).
//! 3. [`check_connected`] requires the whole cell graph to be one
//!    component, otherwise some currencies could never reach some cities.
//!
//! The index is transient: it is only needed to wire neighbours and is
//! dropped by the caller afterwards.

use std::collections::VecDeque;

use eurodiff_core::{CaseError, CellId};
use eurodiff_space::CoordIndex;

use crate::cell::{CellArena, Neighbour};
use crate::region::Region;

/// Index every cell by coordinate.
///
/// Returns [`CaseError::CoordinateCollision`] naming every coordinate
/// held by more than one cell.
pub fn index_cells(arena: &CellArena) -> Result<CoordIndex<Neighbour>, CaseError> {
    let entries = arena.cells().iter().enumerate().map(|(i, cell)| {
        let handle = Neighbour {
            cell: CellId(i as u32),
            region: cell.home(),
        };
        (cell.coordinate(), handle)
    });
    Ok(CoordIndex::build(entries)?)
}

/// Require every region to border another one.
///
/// A single-region case passes trivially. Otherwise returns
/// [`CaseError::DisconnectedRegion`] naming every region lacking a
/// foreign neighbour, in input order.
pub fn check_borders(regions: &[Region], arena: &CellArena) -> Result<(), CaseError> {
    if regions.len() <= 1 {
        return Ok(());
    }
    let isolated: Vec<String> = regions
        .iter()
        .filter(|r| !r.has_foreign_border(arena))
        .map(|r| r.name().to_string())
        .collect();
    if isolated.is_empty() {
        Ok(())
    } else {
        Err(CaseError::DisconnectedRegion { regions: isolated })
    }
}

/// Require the wired cell graph to be a single component.
///
/// Walks outward from the first cell. Regions are rectangles, so each one
/// is either reached entirely or not at all; unreached regions are
/// reported by name in input order as [`CaseError::DisconnectedGrid`].
pub fn check_connected(regions: &[Region], arena: &CellArena) -> Result<(), CaseError> {
    let cells = arena.cells();
    if cells.is_empty() {
        return Ok(());
    }

    let mut visited = vec![false; cells.len()];
    let mut queue = VecDeque::new();
    visited[0] = true;
    queue.push_back(0usize);

    while let Some(i) = queue.pop_front() {
        for nb in cells[i].neighbours() {
            let j = nb.cell.index();
            if !visited[j] {
                visited[j] = true;
                queue.push_back(j);
            }
        }
    }

    let unreached: Vec<String> = regions
        .iter()
        .filter(|r| r.span().any(|i| !visited[i]))
        .map(|r| r.name().to_string())
        .collect();
    if unreached.is_empty() {
        Ok(())
    } else {
        Err(CaseError::DisconnectedGrid { regions: unreached })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eurodiff_core::{Coordinate, RegionId};
    use eurodiff_space::Rect;

    fn layout(rects: &[(i32, i32, i32, i32)]) -> (Vec<Region>, CellArena) {
        let mut arena = CellArena::new(rects.len());
        let regions = rects
            .iter()
            .enumerate()
            .map(|(i, &(xl, yl, xh, yh))| {
                let rect = Rect::new(Coordinate::new(xl, yl), Coordinate::new(xh, yh)).unwrap();
                let mut region = Region::new(RegionId(i as u32), format!("R{i}"), rect);
                region.init_cells(&mut arena, 1_000_000);
                region
            })
            .collect();
        (regions, arena)
    }

    fn wired(rects: &[(i32, i32, i32, i32)]) -> (Vec<Region>, CellArena) {
        let (regions, mut arena) = layout(rects);
        let index = index_cells(&arena).unwrap();
        arena.wire_neighbours(&index);
        (regions, arena)
    }

    // ── Collisions ──────────────────────────────────────────────

    #[test]
    fn overlap_lists_every_colliding_coordinate() {
        let (_, arena) = layout(&[(1, 1, 2, 2), (2, 2, 3, 3), (1, 2, 1, 2)]);
        let err = index_cells(&arena).unwrap_err();
        assert_eq!(
            err,
            CaseError::CoordinateCollision {
                coords: vec![Coordinate::new(2, 2), Coordinate::new(1, 2)]
            }
        );
    }

    #[test]
    fn disjoint_layout_indexes_every_cell() {
        let (_, arena) = layout(&[(1, 1, 2, 2), (3, 1, 3, 2)]);
        assert_eq!(index_cells(&arena).unwrap().len(), 6);
    }

    // ── Borders ─────────────────────────────────────────────────

    #[test]
    fn single_region_needs_no_border() {
        let (regions, arena) = wired(&[(1, 1, 3, 3)]);
        assert!(check_borders(&regions, &arena).is_ok());
    }

    #[test]
    fn corner_contact_is_not_a_border() {
        let (regions, arena) = wired(&[(1, 1, 1, 1), (2, 2, 2, 2)]);
        assert_eq!(
            check_borders(&regions, &arena),
            Err(CaseError::DisconnectedRegion {
                regions: vec!["R0".into(), "R1".into()]
            })
        );
    }

    #[test]
    fn only_isolated_regions_are_named() {
        let (regions, arena) = wired(&[(1, 1, 1, 1), (2, 1, 2, 1), (5, 5, 6, 6)]);
        assert_eq!(
            check_borders(&regions, &arena),
            Err(CaseError::DisconnectedRegion {
                regions: vec!["R2".into()]
            })
        );
    }

    // ── Connectivity ────────────────────────────────────────────

    #[test]
    fn two_separate_pairs_are_disconnected() {
        let (regions, arena) = wired(&[(1, 1, 1, 1), (2, 1, 2, 1), (5, 5, 5, 5), (5, 6, 5, 6)]);
        assert!(check_borders(&regions, &arena).is_ok());
        assert_eq!(
            check_connected(&regions, &arena),
            Err(CaseError::DisconnectedGrid {
                regions: vec!["R2".into(), "R3".into()]
            })
        );
    }

    #[test]
    fn chain_is_connected() {
        let (regions, arena) = wired(&[(1, 1, 2, 2), (3, 1, 6, 3), (1, 4, 4, 6)]);
        assert!(check_connected(&regions, &arena).is_ok());
    }
}
