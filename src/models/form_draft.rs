use chrono::NaiveDate;

use super::errors::RequestError;
use super::glass_request::GlassRequestRecord;

/// Caller-owned state of the request form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub request_date: NaiveDate,
    pub customer_name: String,
    pub project_code: String,
    pub project_name: String,
    pub project_sqm: f64,
    pub cutting_list_received: String,
    pub glass_description: String,
    pub height_mm: f64,
    pub width_mm: f64,
    pub quantity: u32,
    pub wastage_percent: f64,
    pub remarks: String,
}

impl FormDraft {
    pub fn new(request_date: NaiveDate) -> Self {
        Self {
            request_date,
            customer_name: String::new(),
            project_code: String::new(),
            project_name: String::new(),
            project_sqm: 0.0,
            cutting_list_received: String::new(),
            glass_description: String::new(),
            height_mm: 0.0,
            width_mm: 0.0,
            quantity: 0,
            wastage_percent: 0.0,
            remarks: String::new(),
        }
    }

    /// Area in square metres, rounded to 2 decimal places.
    pub fn sqm(&self) -> f64 {
        let area = self.height_mm * self.width_mm * self.quantity as f64 / 1_000_000.0;
        (area * 100.0).round() / 100.0
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.project_code.trim().is_empty() {
            return Err(RequestError::EmptyProjectCode);
        }

        let measurements = [
            ("project_sqm", self.project_sqm),
            ("height_mm", self.height_mm),
            ("width_mm", self.width_mm),
            ("wastage_percent", self.wastage_percent),
        ];
        for (field, value) in measurements {
            if !value.is_finite() || value < 0.0 {
                return Err(RequestError::InvalidMeasurement { field, value });
            }
        }
        Ok(())
    }

    pub fn to_record(&self, request_number: String) -> GlassRequestRecord {
        GlassRequestRecord {
            request_number,
            date: self.request_date.format("%Y-%m-%d").to_string(),
            customer_name: self.customer_name.clone(),
            project_code: self.project_code.trim().to_string(),
            project_name: self.project_name.clone(),
            project_sqm: self.project_sqm,
            cutting_list_received: self.cutting_list_received.clone(),
            glass_description: self.glass_description.clone(),
            height_mm: self.height_mm,
            width_mm: self.width_mm,
            quantity: self.quantity,
            wastage_percent: self.wastage_percent,
            sqm: self.sqm(),
            remarks: self.remarks.clone(),
        }
    }

    /// Clear the per-request fields after a successful save. The date and
    /// glass description carry over to the next entry.
    pub fn reset_after_submit(&mut self) {
        let glass_description = std::mem::take(&mut self.glass_description);
        *self = Self {
            glass_description,
            ..Self::new(self.request_date)
        };
    }
}

/// The working set of one form session.
#[derive(Debug, Clone)]
pub struct RequestSession {
    pub draft: FormDraft,
    pub added_requests: Vec<GlassRequestRecord>,
}

impl RequestSession {
    pub fn new(draft: FormDraft) -> Self {
        Self {
            draft,
            added_requests: Vec::new(),
        }
    }
}
