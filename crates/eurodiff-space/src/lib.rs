//! Spatial data structures for eurodiff grids.
//!
//! This crate defines the axis-aligned [`Rect`] that every region is
//! drawn from, and the [`CoordIndex`] through which cells discover their
//! orthogonal neighbours.
//!
//! # Adjacency
//!
//! Neighbours are strictly 4-connected. Lookups always probe the
//! [`ORTHOGONAL_OFFSETS`] in the same order (+x, -x, +y, -y) so that
//! neighbour lists are reproducible. Coordinates absent from the index
//! (holes between regions, or outside the grid) yield no neighbour.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod rect;

pub use error::SpaceError;
pub use index::{CoordIndex, ORTHOGONAL_OFFSETS};
pub use rect::Rect;
