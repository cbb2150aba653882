use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// One row of the request log as read back from the sheet.
///
/// Every column is optional: rows missing a column, or carrying a value that
/// cannot be interpreted, simply leave the field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExistingRequestRecord {
    #[serde(
        rename = "Project Code",
        default,
        deserialize_with = "super::serde_utils::deserialize"
    )]
    pub project_code: Option<String>,
    #[serde(rename = "Date", default, deserialize_with = "deserialize_sheet_date")]
    pub request_date: Option<NaiveDate>,
    #[serde(
        rename = "Request #",
        default,
        deserialize_with = "super::serde_utils::deserialize"
    )]
    pub request_number: Option<String>,
}

impl ExistingRequestRecord {
    pub fn new(project_code: &str, request_date: Option<NaiveDate>, request_number: &str) -> Self {
        Self {
            project_code: Some(project_code.to_string()),
            request_date,
            request_number: Some(request_number.to_string()),
        }
    }

    /// Trimmed project code, empty when the column is absent.
    pub fn trimmed_project_code(&self) -> &str {
        self.project_code.as_deref().map(str::trim).unwrap_or("")
    }
}

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%y", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// `%Y` also accepts one to three digit years; those are never real sheet dates.
const MIN_YEAR: i32 = 1000;

/// Parse the free-text `Date` column.
///
/// Two-digit years (`01/15/24`) go through `%y`. ISO timestamps keep their
/// leading calendar date as written, without any timezone conversion.
pub fn parse_sheet_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let date = DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .find(|date| date.year() >= MIN_YEAR)
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .filter_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
                .find(|date| date.year() >= MIN_YEAR)
        })
        .or_else(|| {
            // 2024-01-15T05:00:00.000Z and friends
            let (date_part, _) = text.split_once('T')?;
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
        })?;

    (date.year() >= MIN_YEAR).then_some(date)
}

fn deserialize_sheet_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = super::serde_utils::deserialize(deserializer)?;
    Ok(text.as_deref().and_then(parse_sheet_date))
}
