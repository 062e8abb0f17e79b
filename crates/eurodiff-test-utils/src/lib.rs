//! Test fixtures for eurodiff development.
//!
//! Provides the canonical three-case sample (as structured configs and as
//! raw document text with its expected output) plus small layouts that
//! exercise individual validation rules.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;
