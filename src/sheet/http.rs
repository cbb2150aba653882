use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::configure::AppConfig;
use crate::models::serde_utils::cell_to_text;
use crate::models::{ExistingRequestRecord, GlassRequestRecord, RequestError};

use super::traits::{DescriptionCatalog, RecordSink, RecordSource};

const DESCRIPTION_COLUMN: &str = "Glass Description";

/// Row payloads come back either bare or wrapped in `{"data": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SheetRows {
    Bare(Vec<Value>),
    Wrapped { data: Vec<Value> },
}

impl SheetRows {
    fn into_rows(self) -> Vec<Value> {
        match self {
            SheetRows::Bare(rows) => rows,
            SheetRows::Wrapped { data } => data,
        }
    }
}

/// Client for the spreadsheet-backed request API.
pub struct SheetsApiClient {
    client: Client,
    api_url: String,
    catalog_url: String,
    timeout: Duration,
}

impl SheetsApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_urls(
            &config.api_url,
            &config.catalog_url,
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    pub fn with_urls(api_url: &str, catalog_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.to_string(),
            catalog_url: catalog_url.to_string(),
            timeout,
        }
    }

    async fn get_rows(
        &self,
        url: &str,
        operation: &str,
        unavailable: fn(String) -> RequestError,
    ) -> Result<Vec<Value>, RequestError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, operation, unavailable))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, operation, unavailable))?;

        if !status.is_success() {
            return Err(unavailable(format!("HTTP {} - {}", status, body)));
        }

        let rows: SheetRows = serde_json::from_str(&body)
            .map_err(|e| RequestError::MalformedResponse(format!("{}: {}", operation, e)))?;
        Ok(rows.into_rows())
    }
}

fn transport_error(
    err: reqwest::Error,
    operation: &str,
    unavailable: fn(String) -> RequestError,
) -> RequestError {
    if err.is_timeout() {
        RequestError::Timeout(operation.to_string())
    } else {
        unavailable(err.to_string())
    }
}

/// Convert raw rows into records, skipping rows that are not objects.
pub fn parse_record_rows(rows: Vec<Value>) -> Vec<ExistingRequestRecord> {
    let total = rows.len();
    let records: Vec<ExistingRequestRecord> = rows
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect();
    if records.len() != total {
        debug!("skipped {} unusable rows of {}", total - records.len(), total);
    }
    records
}

/// Extract descriptions from a catalog payload of strings or row objects.
pub fn parse_description_rows(rows: Vec<Value>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut descriptions = Vec::new();
    for row in rows {
        let text = match &row {
            Value::Object(map) => map.get(DESCRIPTION_COLUMN).and_then(cell_to_text),
            other => cell_to_text(other),
        };
        if let Some(text) = text {
            let text = text.trim().to_string();
            if !text.is_empty() && seen.insert(text.clone()) {
                descriptions.push(text);
            }
        }
    }
    descriptions
}

#[async_trait]
impl RecordSource for SheetsApiClient {
    async fn fetch_records(&self) -> Result<Vec<ExistingRequestRecord>, RequestError> {
        let rows = self
            .get_rows(&self.api_url, "fetch_records", RequestError::SourceUnavailable)
            .await?;
        Ok(parse_record_rows(rows))
    }

    fn name(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl RecordSink for SheetsApiClient {
    async fn save_record(&self, record: &GlassRequestRecord) -> Result<(), RequestError> {
        let operation = "save_record";
        let response = self
            .client
            .post(&self.api_url)
            .json(record)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, operation, RequestError::SinkUnavailable))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".into());
            return Err(RequestError::SinkRejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DescriptionCatalog for SheetsApiClient {
    async fn fetch_descriptions(&self) -> Result<Vec<String>, RequestError> {
        let rows = self
            .get_rows(
                &self.catalog_url,
                "fetch_descriptions",
                RequestError::CatalogUnavailable,
            )
            .await?;
        Ok(parse_description_rows(rows))
    }
}
