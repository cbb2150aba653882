//! Sheet adapters
//!
//! The request log, the record sink and the glass description catalog all
//! live behind the spreadsheet API. This module defines the seams and their
//! HTTP and in-memory implementations.

pub mod http;
pub mod mock;
pub mod traits;

pub use http::SheetsApiClient;
pub use mock::MockSheet;
pub use traits::{DescriptionCatalog, RecordSink, RecordSource};
