//! Eurodiff: day-stepped simulation of coins spreading between countries.
//!
//! This is the facade crate that re-exports the public API of the eurodiff
//! sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use eurodiff::prelude::*;
//!
//! let regions = vec![
//!     RegionSpec::new("Netherlands", 1, 3, 2, 4),
//!     RegionSpec::new("Belgium", 1, 1, 2, 2),
//! ];
//! let config = CaseConfig::new(1, regions.len(), regions);
//!
//! let mut case = Case::new(&config).unwrap();
//! assert_eq!(case.run(), Day(2));
//!
//! let report = process(&config);
//! assert_eq!(report.to_string(), "Case Number 1\nBelgium 2\nNetherlands 2");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eurodiff-core` | IDs, coordinates, days, [`types::CaseError`] |
//! | [`space`] | `eurodiff-space` | Rectangles and the coordinate index |
//! | [`engine`] | `eurodiff-engine` | Config, cells, regions, the day loop, reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core IDs and the case error type (`eurodiff-core`).
pub use eurodiff_core as types;

/// Grid geometry (`eurodiff-space`).
///
/// [`space::Rect`] for region bounds and [`space::CoordIndex`] for
/// coordinate lookup and collision detection.
pub use eurodiff_space as space;

/// The simulation engine (`eurodiff-engine`).
///
/// [`engine::Case`] for stepping a single case, [`engine::process`] for
/// running one to a [`engine::CaseReport`].
pub use eurodiff_engine as engine;

/// Common imports for typical eurodiff usage.
///
/// ```rust
/// use eurodiff::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use eurodiff_core::{CaseError, Coordinate, Day, RegionId};

    // Engine
    pub use eurodiff_engine::{
        process, render_reports, Case, CaseConfig, CaseLimits, CaseOutcome, CaseReport,
        Completion, DiffusionParams, RegionSpec,
    };
}
