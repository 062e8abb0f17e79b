//! Day-stepped currency diffusion engine.
//!
//! A [`Case`] is built from a validated [`CaseConfig`]: every region lays
//! its cells into one shared [`CellArena`], the geometry checks run over
//! the full cell set, neighbours are wired, and the day loop advances
//! until every region holds every currency in every city.
//!
//! # Day phases
//!
//! Each simulated day runs two strictly ordered phases over all cells of
//! all regions:
//!
//! 1. **Export** ([`Cell::start_day`]): every cell computes its per-neighbour
//!    share of each currency from committed balances and records the
//!    transfer as pending income/expense. Balances are not touched, so the
//!    order in which cells export does not matter.
//! 2. **Commit** ([`Cell::end_day`]): every cell folds its pending income
//!    and expense into its balance and clears the accumulators.
//!
//! [`process`] wraps the whole lifecycle and never fails: an invalid case
//! produces a [`CaseReport`] carrying the error instead of completions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod case;
pub mod cell;
pub mod config;
pub mod geometry;
pub mod region;
pub mod report;

pub use case::{process, Case};
pub use cell::{Cell, CellArena, Neighbour};
pub use config::{CaseConfig, CaseLimits, DiffusionParams, RegionSpec, MAX_NEIGHBOURS};
pub use region::Region;
pub use report::{render_reports, CaseOutcome, CaseReport, Completion};
