//! Case configuration, limits, and input validation.
//!
//! [`CaseConfig`] is the builder-input for constructing a [`Case`](crate::Case).
//! [`validate()`](CaseConfig::validate) checks the structural rules on
//! counts, names and rectangle bounds before any cell is created; the
//! geometric rules that need the full cell set live in
//! [`geometry`](crate::geometry).

use std::num::NonZeroU64;

use eurodiff_core::{CaseError, Coordinate};
use eurodiff_space::{Rect, ORTHOGONAL_OFFSETS};

/// Amount of its own currency every city starts with.
pub const INITIAL_BUDGET: u64 = 1_000_000;

/// A city exports one coin per neighbour for every this many coins it holds.
pub const REPRESENTATIVE_PORTION: NonZeroU64 = match NonZeroU64::new(1_000) {
    Some(n) => n,
    None => panic!("representative portion must be nonzero"),
};

/// Most neighbours a city can have.
pub const MAX_NEIGHBOURS: u64 = ORTHOGONAL_OFFSETS.len() as u64;

// ── DiffusionParams ────────────────────────────────────────────────

/// Arithmetic of the diffusion rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffusionParams {
    /// Starting balance of a city in its home currency. Default: 1,000,000.
    pub initial_budget: u64,
    /// Divisor applied to a balance to get the per-neighbour export.
    /// Remainders stay with the exporting city. Default: 1,000.
    pub representative_portion: NonZeroU64,
}

impl DiffusionParams {
    /// Reject a divisor under which a city with [`MAX_NEIGHBOURS`]
    /// neighbours would book more expense than its balance.
    pub fn check(&self) -> Result<(), CaseError> {
        let portion = self.representative_portion.get();
        if portion < MAX_NEIGHBOURS {
            return Err(CaseError::PortionTooSmall {
                portion,
                min: MAX_NEIGHBOURS,
            });
        }
        Ok(())
    }
}

impl Default for DiffusionParams {
    fn default() -> Self {
        Self {
            initial_budget: INITIAL_BUDGET,
            representative_portion: REPRESENTATIVE_PORTION,
        }
    }
}

// ── CaseLimits ─────────────────────────────────────────────────────

/// Bounds a case description must respect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseLimits {
    /// Fewest regions in a case. Default: 1.
    pub min_regions: usize,
    /// Most regions in a case. Default: 20.
    pub max_regions: usize,
    /// Longest region name, in characters. Default: 25.
    pub max_name_len: usize,
    /// Smallest coordinate on either axis. Default: 1.
    pub min_coordinate: i32,
    /// Largest coordinate on either axis. Default: 10.
    pub max_coordinate: i32,
}

impl CaseLimits {
    /// Require `actual` records to match `declared` and to lie within
    /// `min_regions..=max_regions`.
    pub fn check_count(&self, declared: i64, actual: usize) -> Result<(), CaseError> {
        let matches = i64::try_from(actual).is_ok_and(|a| a == declared);
        if !matches || actual < self.min_regions || actual > self.max_regions {
            return Err(CaseError::CountMismatch {
                declared,
                actual,
                min: self.min_regions,
                max: self.max_regions,
            });
        }
        Ok(())
    }

    /// Require `name` to fit in `max_name_len` characters.
    pub fn check_name(&self, name: &str) -> Result<(), CaseError> {
        let len = name.chars().count();
        if len > self.max_name_len {
            return Err(CaseError::NameTooLong {
                name: name.to_string(),
                len,
                max: self.max_name_len,
            });
        }
        Ok(())
    }

    /// Check one region's name, then its x axis, then its y axis.
    pub fn check_region(&self, spec: &RegionSpec) -> Result<Rect, CaseError> {
        self.check_name(&spec.name)?;
        check_axis(self, &spec.name, "x", spec.low.x, spec.high.x)?;
        check_axis(self, &spec.name, "y", spec.low.y, spec.high.y)?;
        Ok(Rect::new(spec.low, spec.high)?)
    }
}

impl Default for CaseLimits {
    fn default() -> Self {
        Self {
            min_regions: 1,
            max_regions: 20,
            max_name_len: 25,
            min_coordinate: 1,
            max_coordinate: 10,
        }
    }
}

// ── RegionSpec ─────────────────────────────────────────────────────

/// One region as described by the producer: a name and two corners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionSpec {
    /// Region name, unique by convention.
    pub name: String,
    /// Lowest corner, inclusive.
    pub low: Coordinate,
    /// Highest corner, inclusive.
    pub high: Coordinate,
}

impl RegionSpec {
    /// Describe a region spanning `(xl, yl)..=(xh, yh)`.
    pub fn new(name: impl Into<String>, xl: i32, yl: i32, xh: i32, yh: i32) -> Self {
        Self {
            name: name.into(),
            low: Coordinate::new(xl, yl),
            high: Coordinate::new(xh, yh),
        }
    }
}

// ── CaseConfig ─────────────────────────────────────────────────────

/// Everything needed to build and run one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseConfig {
    /// 1-based position of the case in its document.
    pub number: u32,
    /// Region count announced by the producer.
    pub declared_regions: usize,
    /// Regions in input order; the index becomes the region id.
    pub regions: Vec<RegionSpec>,
    /// Validation bounds.
    pub limits: CaseLimits,
    /// Diffusion arithmetic.
    pub params: DiffusionParams,
}

impl CaseConfig {
    /// A config with default limits and diffusion parameters.
    pub fn new(number: u32, declared_regions: usize, regions: Vec<RegionSpec>) -> Self {
        Self {
            number,
            declared_regions,
            regions,
            limits: CaseLimits::default(),
            params: DiffusionParams::default(),
        }
    }

    /// Check the diffusion divisor, counts, names and rectangle bounds.
    ///
    /// Returns one [`Rect`] per region, in input order. The first
    /// violation found is returned; rules are checked in the order
    /// divisor, count, then per region: name, x axis, y axis.
    pub fn validate(&self) -> Result<Vec<Rect>, CaseError> {
        self.params.check()?;
        let declared = i64::try_from(self.declared_regions).unwrap_or(i64::MAX);
        self.limits.check_count(declared, self.regions.len())?;
        self.regions
            .iter()
            .map(|spec| self.limits.check_region(spec))
            .collect()
    }
}

fn check_axis(
    limits: &CaseLimits,
    region: &str,
    axis: &str,
    lower: i32,
    higher: i32,
) -> Result<(), CaseError> {
    let reason = if lower < limits.min_coordinate {
        format!(
            "lower {axis} coordinate should be >= {}, but got {lower}",
            limits.min_coordinate
        )
    } else if lower > higher {
        format!("lower {axis} coordinate should be <= higher {axis} coordinate, but got {lower} > {higher}")
    } else if higher > limits.max_coordinate {
        format!(
            "higher {axis} coordinate should be <= {}, but got {higher}",
            limits.max_coordinate
        )
    } else {
        return Ok(());
    };
    Err(CaseError::CoordinateOutOfRange {
        region: region.to_string(),
        reason,
    })
}
