//! Text front end for eurodiff.
//!
//! Splits a case document into per-case inputs, turns region records into
//! [`CaseConfig`](eurodiff_engine::CaseConfig)s, runs every case and
//! renders the joined reports. Record-level problems fail only their own
//! case; structural problems with the document fail the whole run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod document;

pub use document::{parse_record, run_document, split_cases, CaseInput, DocumentError};
