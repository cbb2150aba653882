//! Request number generation
//!
//! A request number has the shape `MMYYNN-X`:
//! - `MM`, `YY`: month and two-digit year of the request date
//! - `NN`: rank of the project among numeric project codes seen in the log
//! - `X`: instance counter for the project, see [`instance_counter`]
//!
//! Everything is recomputed from the supplied snapshot on every call. Nothing
//! is reserved, so two callers working from the same snapshot get the same
//! number.

use std::collections::HashSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::models::ExistingRequestRecord;

/// Numeric project codes in order of first appearance in the request log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRegistry {
    codes: Vec<String>,
}

impl ProjectRegistry {
    pub fn from_records(records: &[ExistingRequestRecord]) -> Self {
        let mut seen = HashSet::new();
        let mut codes = Vec::new();
        for record in records {
            let code = record.trimmed_project_code();
            if is_numeric_code(code) && seen.insert(code) {
                codes.push(code.to_string());
            }
        }
        Self { codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// 1-based rank of `project_code`, or the next free slot when unregistered.
    pub fn rank(&self, project_code: &str) -> usize {
        let code = project_code.trim();
        self.codes
            .iter()
            .position(|c| c == code)
            .map(|idx| idx + 1)
            .unwrap_or(self.codes.len() + 1)
    }
}

fn is_numeric_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestNumber {
    pub month: u32,
    pub year: u32,
    pub project_rank: usize,
    pub instance: u32,
}

impl fmt::Display for RequestNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}-{}",
            self.month, self.year, self.project_rank, self.instance
        )
    }
}

impl RequestNumber {
    pub fn compute(
        project_code: &str,
        reference_date: NaiveDate,
        existing_records: &[ExistingRequestRecord],
    ) -> Self {
        let registry = ProjectRegistry::from_records(existing_records);
        Self {
            month: reference_date.month(),
            year: reference_date.year().rem_euclid(100) as u32,
            project_rank: registry.rank(project_code),
            instance: instance_counter(project_code, reference_date, existing_records),
        }
    }
}

/// Generate the request number string for a new request.
pub fn generate(
    project_code: &str,
    reference_date: NaiveDate,
    existing_records: &[ExistingRequestRecord],
) -> String {
    RequestNumber::compute(project_code, reference_date, existing_records).to_string()
}

/// Instance counter for `project_code` on `reference_date`.
///
/// Any record for the project already dated on `reference_date` collapses the
/// counter to 1, however many there are. Otherwise the first record dated on
/// another day (in snapshot order) supplies the previous counter, and the new
/// one is that plus one. Records without a usable date are ignored.
pub fn instance_counter(
    project_code: &str,
    reference_date: NaiveDate,
    existing_records: &[ExistingRequestRecord],
) -> u32 {
    let code = project_code.trim();
    let mut first_other_day = None;

    for record in existing_records {
        if record.trimmed_project_code() != code {
            continue;
        }
        match record.request_date {
            Some(date) if date == reference_date => return 1,
            Some(_) if first_other_day.is_none() => first_other_day = Some(record),
            _ => {}
        }
    }

    first_other_day
        .and_then(|record| record.request_number.as_deref())
        .and_then(parse_instance_suffix)
        .map(|x| x.saturating_add(1))
        .unwrap_or(1)
}

/// Parse the trailing `-X` of a request number.
pub fn parse_instance_suffix(request_number: &str) -> Option<u32> {
    let (_, suffix) = request_number.trim().rsplit_once('-')?;
    let suffix = suffix.trim();
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}
