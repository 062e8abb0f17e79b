//! Cities and the flat storage they live in.
//!
//! Cells reference their neighbours by [`CellId`] rather than by pointer:
//! all cells of a case sit in one [`CellArena`], and a region owns a
//! contiguous span of it. Exports therefore write straight into the
//! receiving cell's income slot without shared ownership.

use std::num::NonZeroU64;
use std::ops::Range;

use eurodiff_core::{CellId, Coordinate, RegionId};
use eurodiff_space::CoordIndex;
use smallvec::SmallVec;

/// A linked neighbour: which cell it is and which region it belongs to.
///
/// Carrying the region alongside the id lets border checks run without
/// touching the neighbour itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbour {
    /// Storage slot of the neighbouring cell.
    pub cell: CellId,
    /// Home region of the neighbouring cell.
    pub region: RegionId,
}

/// One city: a grid point holding a balance of every currency.
#[derive(Clone, Debug)]
pub struct Cell {
    coordinate: Coordinate,
    home: RegionId,
    balance: Vec<u64>,
    income: Vec<u64>,
    expense: Vec<u64>,
    neighbours: SmallVec<[Neighbour; 4]>,
}

impl Cell {
    /// Create a city at `coordinate` holding `budget` of its home currency
    /// and nothing of the other `currencies - 1`.
    ///
    /// `home` must index one of the `currencies` slots.
    pub fn new(coordinate: Coordinate, home: RegionId, currencies: usize, budget: u64) -> Self {
        debug_assert!(
            home.index() < currencies,
            "home currency {home} out of {currencies} slots"
        );
        let mut balance = vec![0; currencies];
        balance[home.index()] = budget;
        Self {
            coordinate,
            home,
            balance,
            income: vec![0; currencies],
            expense: vec![0; currencies],
            neighbours: SmallVec::new(),
        }
    }

    /// Grid position.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Region that supplied the initial stock.
    pub fn home(&self) -> RegionId {
        self.home
    }

    /// Committed balance of `currency`.
    pub fn balance(&self, currency: RegionId) -> u64 {
        self.balance[currency.index()]
    }

    /// All committed balances, indexed by region id.
    pub fn balances(&self) -> &[u64] {
        &self.balance
    }

    /// Linked neighbours in +x, -x, +y, -y order (missing directions skipped).
    pub fn neighbours(&self) -> &[Neighbour] {
        &self.neighbours
    }

    /// True once the city holds a nonzero amount of every currency.
    pub fn is_complete(&self) -> bool {
        self.balance.iter().all(|&b| b != 0)
    }

    /// Whether any linked neighbour belongs to another region.
    pub fn has_foreign_neighbour(&self) -> bool {
        self.neighbours.iter().any(|n| n.region != self.home)
    }

    /// Link to every orthogonally adjacent cell present in `index`.
    pub fn define_neighbours(&mut self, index: &CoordIndex<Neighbour>) {
        self.neighbours = index.neighbours(self.coordinate);
    }

    /// Export phase for this city.
    ///
    /// Writes the per-neighbour share of every currency into `shares`
    /// (`balance / portion`, truncated) and books `share * neighbours` as
    /// pending expense. Committed balances are left untouched.
    pub fn start_day(&mut self, portion: NonZeroU64, shares: &mut Vec<u64>) {
        let fanout = self.neighbours.len() as u64;
        shares.clear();
        for (balance, expense) in self.balance.iter().zip(self.expense.iter_mut()) {
            let share = *balance / portion;
            *expense += share * fanout;
            shares.push(share);
        }
    }

    /// Book one neighbour's shares as pending income.
    pub fn receive(&mut self, shares: &[u64]) {
        for (income, share) in self.income.iter_mut().zip(shares) {
            *income += share;
        }
    }

    /// Commit phase: fold pending income and expense into the balance and
    /// clear both accumulators.
    pub fn end_day(&mut self) {
        for ((balance, income), expense) in self
            .balance
            .iter_mut()
            .zip(self.income.iter_mut())
            .zip(self.expense.iter_mut())
        {
            *balance = *balance + *income - *expense;
            *income = 0;
            *expense = 0;
        }
    }
}

/// Flat storage for every cell of one case.
#[derive(Clone, Debug)]
pub struct CellArena {
    cells: Vec<Cell>,
    currencies: usize,
    shares: Vec<u64>,
}

impl CellArena {
    /// An empty arena whose cells track `currencies` balances each.
    pub fn new(currencies: usize) -> Self {
        Self {
            cells: Vec::new(),
            currencies,
            shares: Vec::with_capacity(currencies),
        }
    }

    /// Number of currencies (equal to the case's region count).
    pub fn currencies(&self) -> usize {
        self.currencies
    }

    /// Number of stored cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the arena holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Append a cell and return its id.
    pub fn push(&mut self, cell: Cell) -> CellId {
        debug_assert_eq!(cell.balances().len(), self.currencies);
        let id = CellId(self.cells.len() as u32);
        self.cells.push(cell);
        id
    }

    /// Cell stored at `id`.
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Every cell in storage order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells in the given storage span.
    pub fn span(&self, span: Range<usize>) -> &[Cell] {
        &self.cells[span]
    }

    /// Link every cell to its indexed orthogonal neighbours.
    pub fn wire_neighbours(&mut self, index: &CoordIndex<Neighbour>) {
        for cell in &mut self.cells {
            cell.define_neighbours(index);
        }
    }

    /// Run the export phase for the cells in `span`.
    pub fn start_day(&mut self, span: Range<usize>, portion: NonZeroU64) {
        for i in span {
            self.cells[i].start_day(portion, &mut self.shares);
            let neighbours = self.cells[i].neighbours.clone();
            for nb in neighbours {
                self.cells[nb.cell.index()].receive(&self.shares);
            }
        }
    }

    /// Run the commit phase for the cells in `span`.
    pub fn end_day(&mut self, span: Range<usize>) {
        for cell in &mut self.cells[span] {
            cell.end_day();
        }
    }

    /// Sum of `currency` over every cell.
    pub fn total_balance(&self, currency: RegionId) -> u64 {
        self.cells.iter().map(|c| c.balance(currency)).sum()
    }
}
