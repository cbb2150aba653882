// Error types for glass request submission
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    // Draft validation errors
    EmptyProjectCode,
    InvalidMeasurement { field: &'static str, value: f64 },

    // Sheet API errors
    SourceUnavailable(String),
    SinkUnavailable(String),
    SinkRejected { status: u16, body: String },
    CatalogUnavailable(String),
    MalformedResponse(String),
    Timeout(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyProjectCode => write!(f, "Project code is required"),
            Self::InvalidMeasurement { field, value } => {
                write!(f, "Invalid value for {}: {}", field, value)
            }
            Self::SourceUnavailable(msg) => write!(f, "Existing records unavailable: {}", msg),
            Self::SinkUnavailable(msg) => write!(f, "Failed to save request: {}", msg),
            Self::SinkRejected { status, body } => {
                write!(f, "Sheet API rejected request: HTTP {} - {}", status, body)
            }
            Self::CatalogUnavailable(msg) => {
                write!(f, "Glass description catalog unavailable: {}", msg)
            }
            Self::MalformedResponse(msg) => write!(f, "Malformed sheet response: {}", msg),
            Self::Timeout(operation) => write!(f, "Operation timed out: {}", operation),
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyProjectCode => "EMPTY_PROJECT_CODE",
            Self::InvalidMeasurement { .. } => "INVALID_MEASUREMENT",
            Self::SourceUnavailable(_) => "SOURCE_UNAVAILABLE",
            Self::SinkUnavailable(_) => "SINK_UNAVAILABLE",
            Self::SinkRejected { .. } => "SINK_REJECTED",
            Self::CatalogUnavailable(_) => "CATALOG_UNAVAILABLE",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::Timeout(_) => "TIMEOUT",
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable(_)
                | Self::SinkUnavailable(_)
                | Self::CatalogUnavailable(_)
                | Self::Timeout(_)
        )
    }

    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::EmptyProjectCode | Self::InvalidMeasurement { .. })
    }
}
