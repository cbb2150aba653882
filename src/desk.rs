//! Request desk
//!
//! Drives one submission: validate the draft, read the request log, number
//! the request, write it, then update the session working set.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::models::{
    ExistingRequestRecord, FormDraft, GlassRequestRecord, RequestError, RequestSession,
};
use crate::request_number::RequestNumber;
use crate::sheet::{DescriptionCatalog, RecordSink, RecordSource};

pub struct RequestDesk {
    source: Arc<dyn RecordSource>,
    sink: Arc<dyn RecordSink>,
    catalog: Arc<dyn DescriptionCatalog>,
}

impl RequestDesk {
    pub fn new(
        source: Arc<dyn RecordSource>,
        sink: Arc<dyn RecordSink>,
        catalog: Arc<dyn DescriptionCatalog>,
    ) -> Self {
        Self { source, sink, catalog }
    }

    /// Build a desk whose three collaborators are the same sheet.
    pub fn from_sheet<S>(sheet: Arc<S>) -> Self
    where
        S: RecordSource + RecordSink + DescriptionCatalog + 'static,
    {
        Self {
            source: sheet.clone(),
            sink: sheet.clone(),
            catalog: sheet,
        }
    }

    /// Current request log. An unreachable source yields an empty snapshot.
    pub async fn load_snapshot(&self) -> Vec<ExistingRequestRecord> {
        match self.source.fetch_records().await {
            Ok(records) => {
                debug!("[{}] snapshot has {} records", self.source.name(), records.len());
                records
            }
            Err(e) => {
                warn!(
                    "[{}] existing records unavailable, numbering from empty log: {}",
                    self.source.name(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Number the draft would receive if submitted now.
    pub async fn preview_number(&self, draft: &FormDraft) -> RequestNumber {
        let snapshot = self.load_snapshot().await;
        RequestNumber::compute(&draft.project_code, draft.request_date, &snapshot)
    }

    pub async fn glass_descriptions(&self) -> Vec<String> {
        match self.catalog.fetch_descriptions().await {
            Ok(descriptions) => descriptions,
            Err(e) => {
                warn!("glass descriptions unavailable: {}", e);
                Vec::new()
            }
        }
    }

    /// Submit the session draft.
    ///
    /// On success the saved record is appended to `added_requests` and the
    /// draft is reset. On failure the session is left untouched.
    pub async fn submit(
        &self,
        session: &mut RequestSession,
    ) -> Result<GlassRequestRecord, RequestError> {
        session.draft.validate()?;

        let request_number = self.preview_number(&session.draft).await;
        let record = session.draft.to_record(request_number.to_string());

        if let Err(e) = self.sink.save_record(&record).await {
            warn!("failed to save request {}: {}", record.request_number, e);
            return Err(e);
        }

        info!(
            "request saved: {} project={} sqm={}",
            record.request_number, record.project_code, record.sqm
        );
        session.added_requests.push(record.clone());
        session.draft.reset_after_submit();
        Ok(record)
    }
}
