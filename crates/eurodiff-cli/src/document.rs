//! Case document parsing and rendering.
//!
//! A document is a sequence of cases, each introduced by a line holding
//! its region count and followed by one `name xl yl xh yh` record per
//! region. A count line of exactly `0` ends the document.

use std::error::Error;
use std::fmt;

use eurodiff_core::CaseError;
use eurodiff_engine::{
    process, render_reports, CaseConfig, CaseLimits, CaseOutcome, CaseReport, RegionSpec,
};
use tracing::debug;

// ── DocumentError ──────────────────────────────────────────────────

/// Structural problems that make the rest of a document unreadable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentError {
    /// A count line is not an integer.
    BadCount {
        /// Number of the case the line should have introduced.
        case: u32,
        /// The offending line.
        line: String,
    },
    /// A count line evaluates to zero but is not exactly `0`.
    BadTerminator {
        /// The offending line.
        line: String,
    },
    /// The document ends without a `0` line.
    MissingTerminator {
        /// Number of cases read before the end.
        cases: u32,
    },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadCount { case, line } => {
                write!(f, "can not define count of countries for case {case}, got \"{line}\"")
            }
            Self::BadTerminator { line } => write!(f, "invalid end of cases: \"{line}\""),
            Self::MissingTerminator { cases } => {
                write!(f, "document ends after {cases} case(s) without a terminating 0")
            }
        }
    }
}

impl Error for DocumentError {}

// ── CaseInput ──────────────────────────────────────────────────────

/// One case as read from a document, records still unparsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseInput {
    /// 1-based case number.
    pub number: u32,
    /// Region count from the header line; may be negative.
    pub declared: i64,
    /// Region records, blank lines removed.
    pub records: Vec<String>,
}

impl CaseInput {
    /// Check the record count, then parse and check every record in
    /// order, into a [`CaseConfig`] with default limits.
    ///
    /// The first violation wins: a count error is reported before any
    /// record is read, and each record is fully checked before the next
    /// one is parsed.
    pub fn to_config(&self) -> Result<CaseConfig, CaseError> {
        let limits = CaseLimits::default();
        limits.check_count(self.declared, self.records.len())?;
        let regions = self
            .records
            .iter()
            .map(|r| parse_record(r, &limits))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CaseConfig::new(self.number, regions.len(), regions))
    }

    /// Parse and simulate this case.
    pub fn process(&self) -> CaseReport {
        match self.to_config() {
            Ok(config) => process(&config),
            Err(e) => CaseReport {
                number: self.number,
                outcome: CaseOutcome::Invalid(e),
            },
        }
    }
}

/// Split a document into cases.
///
/// Records belong to the preceding count line and run until the next
/// line starting with a digit.
pub fn split_cases(document: &str) -> Result<Vec<CaseInput>, DocumentError> {
    let mut lines = document
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .peekable();
    let mut cases = Vec::new();

    loop {
        let number = cases.len() as u32 + 1;
        let Some(header) = lines.next() else {
            return Err(DocumentError::MissingTerminator { cases: number - 1 });
        };
        let declared: i64 = header.parse().map_err(|_| DocumentError::BadCount {
            case: number,
            line: header.to_string(),
        })?;
        if declared == 0 {
            if header == "0" {
                break;
            }
            return Err(DocumentError::BadTerminator {
                line: header.to_string(),
            });
        }

        let mut records = Vec::new();
        while let Some(line) = lines.next_if(|l| !starts_with_digit(l)) {
            records.push(line.to_string());
        }
        debug!(case = number, declared, records = records.len(), "case read");
        cases.push(CaseInput {
            number,
            declared,
            records,
        });
    }

    Ok(cases)
}

fn starts_with_digit(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Parse a `name xl yl xh yh` record and check it against `limits`.
///
/// Checks run in record order: field count, name length, integer syntax,
/// then the x and y bounds.
pub fn parse_record(record: &str, limits: &CaseLimits) -> Result<RegionSpec, CaseError> {
    let malformed = |reason: String| CaseError::MalformedRecord {
        record: record.to_string(),
        reason,
    };
    let fields: Vec<&str> = record.split_whitespace().collect();
    let [name, xl, yl, xh, yh] = fields.as_slice() else {
        return Err(malformed(format!("expected 5 fields, got {}", fields.len())));
    };
    limits.check_name(name)?;
    let coord = |value: &str| {
        value
            .parse::<i32>()
            .map_err(|_| malformed(format!("can not parse \"{value}\" as coordinate value")))
    };
    let spec = RegionSpec::new(*name, coord(xl)?, coord(yl)?, coord(xh)?, coord(yh)?);
    limits.check_region(&spec)?;
    Ok(spec)
}

/// Run every case of `document` and join the reports.
pub fn run_document(document: &str) -> Result<String, DocumentError> {
    let reports: Vec<CaseReport> = split_cases(document)?
        .iter()
        .map(CaseInput::process)
        .collect();
    debug!(
        cases = reports.len(),
        done = reports.iter().filter(|r| r.is_done()).count(),
        "document processed"
    );
    Ok(render_reports(&reports))
}
