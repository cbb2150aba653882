//! Sheet adapter traits

use async_trait::async_trait;

use crate::models::{ExistingRequestRecord, GlassRequestRecord, RequestError};

/// Read access to previously issued requests.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the request log snapshot, in the order the store returns rows.
    async fn fetch_records(&self) -> Result<Vec<ExistingRequestRecord>, RequestError>;

    /// Get source name for logging
    fn name(&self) -> &str;
}

/// Write access for new requests.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Append one request. `Ok` only when the store confirmed the write.
    async fn save_record(&self, record: &GlassRequestRecord) -> Result<(), RequestError>;
}

/// Allowed glass descriptions.
#[async_trait]
pub trait DescriptionCatalog: Send + Sync {
    async fn fetch_descriptions(&self) -> Result<Vec<String>, RequestError>;
}
