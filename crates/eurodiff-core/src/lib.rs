//! Core types for the eurodiff currency-diffusion simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid [`Coordinate`], the dense identifiers used throughout the
//! workspace ([`RegionId`], [`CellId`], [`Day`]) and the case-scoped
//! [`CaseError`] that every validation stage reports through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::CaseError;
pub use id::{CellId, Coordinate, Day, RegionId};
