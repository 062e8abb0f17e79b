//! One simulation case: initialization, the day loop, and the report.
//!
//! [`Case::new`] takes a [`CaseConfig`] through validation and
//! initialization; on success the case is ready to [`run`](Case::run).
//! [`process`] drives the whole lifecycle and maps both terminal states
//! (invalid or done) into a [`CaseReport`].

use eurodiff_core::{CaseError, Day, RegionId};
use tracing::{debug, info, trace, warn};

use crate::cell::CellArena;
use crate::config::{CaseConfig, DiffusionParams};
use crate::geometry;
use crate::region::Region;
use crate::report::{CaseOutcome, CaseReport, Completion};

/// A validated, initialized case and its simulation state.
///
/// Owns every region and cell exclusively for its lifetime; nothing is
/// shared between cases.
#[derive(Clone, Debug)]
pub struct Case {
    number: u32,
    regions: Vec<Region>,
    arena: CellArena,
    params: DiffusionParams,
    day: Day,
}

impl Case {
    /// Validate `config`, lay out cells, check geometry and wire neighbours.
    ///
    /// # Errors
    ///
    /// Any [`CaseError`] from [`CaseConfig::validate`], a coordinate
    /// collision, a region without a foreign border, or a cell graph
    /// that splits into several components.
    pub fn new(config: &CaseConfig) -> Result<Self, CaseError> {
        let rects = config.validate()?;

        let mut arena = CellArena::new(rects.len());
        let mut regions: Vec<Region> = config
            .regions
            .iter()
            .zip(rects)
            .enumerate()
            .map(|(i, (spec, rect))| Region::new(RegionId(i as u32), spec.name.clone(), rect))
            .collect();
        for region in &mut regions {
            region.init_cells(&mut arena, config.params.initial_budget);
        }

        let index = geometry::index_cells(&arena)?;
        arena.wire_neighbours(&index);
        drop(index);

        geometry::check_borders(&regions, &arena)?;
        geometry::check_connected(&regions, &arena)?;

        debug!(
            case = config.number,
            regions = regions.len(),
            cells = arena.len(),
            "case initialized"
        );

        Ok(Self {
            number: config.number,
            regions,
            arena,
            params: config.params,
            day: Day(0),
        })
    }

    /// 1-based case number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Current day; 0 until the first [`step_day`](Self::step_day).
    pub fn day(&self) -> Day {
        self.day
    }

    /// Regions in input order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// All cells of the case.
    pub fn arena(&self) -> &CellArena {
        &self.arena
    }

    /// Sum of `currency` over every city.
    pub fn total_balance(&self, currency: RegionId) -> u64 {
        self.arena.total_balance(currency)
    }

    /// Whether every region has a completion day.
    pub fn is_complete(&self) -> bool {
        self.regions.iter().all(Region::is_complete)
    }

    /// Record completion at the current day for every region that has
    /// just become complete. Returns whether all regions are complete.
    pub fn check_completion(&mut self) -> bool {
        for region in &mut self.regions {
            if region.check_completion(self.day, &self.arena) {
                debug!(
                    case = self.number,
                    region = region.name(),
                    day = self.day.0,
                    "region complete"
                );
            }
        }
        self.is_complete()
    }

    /// Advance one day: every region exports, then every region commits.
    pub fn step_day(&mut self) {
        self.day = self.day.next();
        let portion = self.params.representative_portion;
        for region in &self.regions {
            region.start_day(&mut self.arena, portion);
        }
        for region in &self.regions {
            region.end_day(&mut self.arena);
        }
        trace!(case = self.number, day = self.day.0, "day committed");
    }

    /// Step until every region is complete and return the final day.
    ///
    /// A single-region case is complete on day 0 and never steps.
    pub fn run(&mut self) -> Day {
        while !self.check_completion() {
            self.step_day();
        }
        info!(case = self.number, day = self.day.0, "case complete");
        self.day
    }

    /// Completed regions ordered by completion day, then by name.
    pub fn completions(&self) -> Vec<Completion> {
        let mut out: Vec<Completion> = self
            .regions
            .iter()
            .filter_map(|r| r.complete_day().map(|day| Completion::new(r.name(), day)))
            .collect();
        out.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.name.cmp(&b.name)));
        out
    }
}

/// Run one case end to end.
///
/// Never fails: validation errors become [`CaseOutcome::Invalid`] and do
/// not affect any other case.
pub fn process(config: &CaseConfig) -> CaseReport {
    let outcome = match Case::new(config) {
        Ok(mut case) => {
            case.run();
            CaseOutcome::Done(case.completions())
        }
        Err(e) => {
            warn!(case = config.number, error = %e, "case rejected");
            CaseOutcome::Invalid(e)
        }
    };
    CaseReport {
        number: config.number,
        outcome,
    }
}
