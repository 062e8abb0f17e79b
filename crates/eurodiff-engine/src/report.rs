//! Case outcomes and their text rendering.

use std::fmt;

use eurodiff_core::{CaseError, Day};

/// A region's name and the day it became complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Region name.
    pub name: String,
    /// First day on which every city of the region held every currency.
    pub day: Day,
}

impl Completion {
    /// Pair a name with its completion day.
    pub fn new(name: impl Into<String>, day: Day) -> Self {
        Self {
            name: name.into(),
            day,
        }
    }
}

/// Terminal state of a case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Rejected before the day loop.
    Invalid(CaseError),
    /// Simulated to completion; ordered by day, then name.
    Done(Vec<Completion>),
}

/// The result of one case, tagged with its position in the document.
///
/// Renders as a `Case Number N` header followed by either one
/// `name day` line per region or the validation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseReport {
    /// 1-based case number.
    pub number: u32,
    /// How the case ended.
    pub outcome: CaseOutcome,
}

impl CaseReport {
    /// Whether the case was simulated.
    pub fn is_done(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Done(_))
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case Number {}", self.number)?;
        match &self.outcome {
            CaseOutcome::Invalid(e) => write!(f, "\nValidation error: {e}"),
            CaseOutcome::Done(completions) => {
                for c in completions {
                    write!(f, "\n{} {}", c.name, c.day)?;
                }
                Ok(())
            }
        }
    }
}

/// Render reports one after another, separated by newlines.
pub fn render_reports(reports: &[CaseReport]) -> String {
    reports
        .iter()
        .map(CaseReport::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
