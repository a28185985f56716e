// Error taxonomy for telemetry queries

use thiserror::Error;

/// Every way a telemetry query can fail. Each kind carries a human-readable
/// message and maps to a stable machine-readable code.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A required query parameter is absent or blank
    #[error("{0}")]
    MissingParameter(String),

    /// A timestamp is not an ISO-8601 instant
    #[error("{0}")]
    InvalidDateFormat(String),

    /// `from` is after `to`, or the span is too long
    #[error("{0}")]
    InvalidTimeRange(String),

    /// Resolution outside the supported set, or not strictly positive
    #[error("{0}")]
    InvalidResolution(String),

    /// The data source could not be read or contains a malformed row
    #[error("Error reading telemetry data: {0}")]
    DataSource(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TelemetryError {
    /// Machine-readable kind, used as `code` in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "MISSING_PARAMETERS",
            Self::InvalidDateFormat(_) => "INVALID_DATE_FORMAT",
            Self::InvalidTimeRange(_) => "INVALID_TIME_RANGE",
            Self::InvalidResolution(_) => "INVALID_RESOLUTION",
            Self::DataSource(_) => "DATA_SOURCE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True for failures caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_)
                | Self::InvalidDateFormat(_)
                | Self::InvalidTimeRange(_)
                | Self::InvalidResolution(_)
        )
    }
}

impl From<csv::Error> for TelemetryError {
    fn from(e: csv::Error) -> Self {
        Self::DataSource(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TelemetryError>;
