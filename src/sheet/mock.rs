//! In-memory sheet for testing
//!
//! Serves a fixed request log, records every saved row, and can be told to
//! fail any of its operations.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::{ExistingRequestRecord, GlassRequestRecord, RequestError};

use super::traits::{DescriptionCatalog, RecordSink, RecordSource};

pub struct MockSheet {
    name: String,
    records: Mutex<Vec<ExistingRequestRecord>>,
    descriptions: Mutex<Vec<String>>,
    saved: Mutex<Vec<GlassRequestRecord>>,
    source_error: Mutex<Option<RequestError>>,
    sink_error: Mutex<Option<RequestError>>,
    catalog_error: Mutex<Option<RequestError>>,
}

impl MockSheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: Mutex::new(Vec::new()),
            descriptions: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
            source_error: Mutex::new(None),
            sink_error: Mutex::new(None),
            catalog_error: Mutex::new(None),
        }
    }

    pub fn with_records(name: &str, records: Vec<ExistingRequestRecord>) -> Self {
        let sheet = Self::new(name);
        *sheet.records.lock().unwrap() = records;
        sheet
    }

    pub fn set_descriptions(&self, descriptions: Vec<String>) {
        *self.descriptions.lock().unwrap() = descriptions;
    }

    pub fn fail_source(&self, err: RequestError) {
        *self.source_error.lock().unwrap() = Some(err);
    }

    pub fn fail_sink(&self, err: RequestError) {
        *self.sink_error.lock().unwrap() = Some(err);
    }

    pub fn fail_catalog(&self, err: RequestError) {
        *self.catalog_error.lock().unwrap() = Some(err);
    }

    /// Clear all injected failures
    pub fn clear_failures(&self) {
        *self.source_error.lock().unwrap() = None;
        *self.sink_error.lock().unwrap() = None;
        *self.catalog_error.lock().unwrap() = None;
    }

    /// Rows accepted by `save_record`, oldest first
    pub fn saved(&self) -> Vec<GlassRequestRecord> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSource for MockSheet {
    async fn fetch_records(&self) -> Result<Vec<ExistingRequestRecord>, RequestError> {
        log::debug!("[{}] fetch_records", self.name);
        if let Some(err) = self.source_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.records.lock().unwrap().clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl RecordSink for MockSheet {
    async fn save_record(&self, record: &GlassRequestRecord) -> Result<(), RequestError> {
        log::debug!("[{}] save_record({})", self.name, record.request_number);
        if let Some(err) = self.sink_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.saved.lock().unwrap().push(record.clone());
        // Saved rows become visible to the next snapshot, like the real sheet.
        self.records.lock().unwrap().push(ExistingRequestRecord {
            project_code: Some(record.project_code.clone()),
            request_date: chrono::NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").ok(),
            request_number: Some(record.request_number.clone()),
        });
        Ok(())
    }
}

#[async_trait]
impl DescriptionCatalog for MockSheet {
    async fn fetch_descriptions(&self) -> Result<Vec<String>, RequestError> {
        log::debug!("[{}] fetch_descriptions", self.name);
        if let Some(err) = self.catalog_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.descriptions.lock().unwrap().clone())
    }
}
