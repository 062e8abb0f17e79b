//! Countries: named rectangles owning a contiguous span of cells.

use std::num::NonZeroU64;
use std::ops::Range;

use eurodiff_core::{Day, RegionId};
use eurodiff_space::Rect;

use crate::cell::{Cell, CellArena};

/// A region of the grid and its completion state.
///
/// The region owns the cells in its storage span of the case's
/// [`CellArena`]; the span is empty until [`init_cells`](Self::init_cells)
/// runs.
#[derive(Clone, Debug)]
pub struct Region {
    id: RegionId,
    name: String,
    rect: Rect,
    cells: Range<usize>,
    complete_day: Option<Day>,
}

impl Region {
    /// A region with no cells yet.
    pub fn new(id: RegionId, name: impl Into<String>, rect: Rect) -> Self {
        Self {
            id,
            name: name.into(),
            rect,
            cells: 0..0,
            complete_day: None,
        }
    }

    /// Dense id, also the index of this region's currency.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rectangle covered by the region.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Storage span of the region's cells.
    pub fn span(&self) -> Range<usize> {
        self.cells.clone()
    }

    /// The region's cells, x-major.
    pub fn cells<'a>(&self, arena: &'a CellArena) -> &'a [Cell] {
        arena.span(self.span())
    }

    /// Day on which every city first held every currency.
    pub fn complete_day(&self) -> Option<Day> {
        self.complete_day
    }

    /// Whether [`complete_day`](Self::complete_day) has been set.
    pub fn is_complete(&self) -> bool {
        self.complete_day.is_some()
    }

    /// Create one cell per point of the rect, x-major, each seeded with
    /// `budget` of this region's currency.
    ///
    /// Must run after the final region count is known: every cell gets
    /// `arena.currencies()` balance slots.
    pub fn init_cells(&mut self, arena: &mut CellArena, budget: u64) {
        let start = arena.len();
        let currencies = arena.currencies();
        for point in self.rect.points() {
            arena.push(Cell::new(point, self.id, currencies, budget));
        }
        self.cells = start..arena.len();
    }

    /// Export phase for every owned cell.
    pub fn start_day(&self, arena: &mut CellArena, portion: NonZeroU64) {
        arena.start_day(self.span(), portion);
    }

    /// Commit phase for every owned cell.
    pub fn end_day(&self, arena: &mut CellArena) {
        arena.end_day(self.span());
    }

    /// Mark the region complete on `day` if every owned cell is complete.
    ///
    /// Has no effect once the region is complete. Returns `true` only on
    /// the call that sets the completion day.
    pub fn check_completion(&mut self, day: Day, arena: &CellArena) -> bool {
        if self.is_complete() || !self.cells(arena).iter().all(Cell::is_complete) {
            return false;
        }
        self.complete_day = Some(day);
        true
    }

    /// Whether any owned cell borders a cell of another region.
    pub fn has_foreign_border(&self, arena: &CellArena) -> bool {
        self.cells(arena).iter().any(Cell::has_foreign_neighbour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::index_cells;
    use eurodiff_core::Coordinate;

    fn rect(xl: i32, yl: i32, xh: i32, yh: i32) -> Rect {
        Rect::new(Coordinate::new(xl, yl), Coordinate::new(xh, yh)).unwrap()
    }

    #[test]
    fn init_cells_fills_span_x_major() {
        let mut arena = CellArena::new(1);
        let mut r = Region::new(RegionId(0), "Luxembourg", rect(2, 3, 3, 4));
        r.init_cells(&mut arena, 1_000_000);
        assert_eq!(r.span(), 0..4);
        let coords: Vec<Coordinate> = r.cells(&arena).iter().map(Cell::coordinate).collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(2, 3),
                Coordinate::new(2, 4),
                Coordinate::new(3, 3),
                Coordinate::new(3, 4)
            ]
        );
        assert!(r.cells(&arena).iter().all(|c| c.balances() == [1_000_000]));
    }

    #[test]
    fn second_region_span_follows_first() {
        let mut arena = CellArena::new(2);
        let mut a = Region::new(RegionId(0), "A", rect(1, 1, 2, 2));
        let mut b = Region::new(RegionId(1), "B", rect(3, 1, 3, 1));
        a.init_cells(&mut arena, 10);
        b.init_cells(&mut arena, 10);
        assert_eq!(b.span(), 4..5);
        assert_eq!(b.cells(&arena)[0].balances(), &[0, 10]);
    }

    #[test]
    fn completion_is_set_once() {
        let mut arena = CellArena::new(1);
        let mut r = Region::new(RegionId(0), "Solo", rect(1, 1, 1, 1));
        r.init_cells(&mut arena, 1_000_000);
        assert!(r.check_completion(Day(0), &arena));
        assert!(!r.check_completion(Day(5), &arena));
        assert_eq!(r.complete_day(), Some(Day(0)));
    }

    #[test]
    fn incomplete_region_stays_unset() {
        let mut arena = CellArena::new(2);
        let mut r = Region::new(RegionId(0), "A", rect(1, 1, 1, 1));
        r.init_cells(&mut arena, 1_000_000);
        assert!(!r.check_completion(Day(0), &arena));
        assert_eq!(r.complete_day(), None);
    }

    #[test]
    fn foreign_border_detected() {
        let mut arena = CellArena::new(2);
        let mut a = Region::new(RegionId(0), "A", rect(1, 1, 2, 2));
        let mut b = Region::new(RegionId(1), "B", rect(1, 3, 2, 3));
        a.init_cells(&mut arena, 1);
        b.init_cells(&mut arena, 1);
        let index = index_cells(&arena).unwrap();
        arena.wire_neighbours(&index);
        assert!(a.has_foreign_border(&arena));
        assert!(b.has_foreign_border(&arena));
    }
}
