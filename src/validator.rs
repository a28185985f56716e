// Query parameter validation: instants, time range, resolution

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{Result, TelemetryError};
use crate::resolution::Resolution;

pub const DEFAULT_MAX_RANGE_DAYS: u32 = 30;

/// Checks query parameters before any data is loaded.
#[derive(Debug, Clone)]
pub struct TelemetryValidator {
    max_range_days: u32,
}

impl Default for TelemetryValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RANGE_DAYS)
    }
}

impl TelemetryValidator {
    pub fn new(max_range_days: u32) -> Self {
        Self { max_range_days }
    }

    /// `from == to` is allowed; the span limit is inclusive.
    pub fn validate_time_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<()> {
        if from > to {
            return Err(TelemetryError::InvalidTimeRange(
                "'from' time must be before 'to' time".into(),
            ));
        }
        if to - from > TimeDelta::days(i64::from(self.max_range_days)) {
            return Err(TelemetryError::InvalidTimeRange(format!(
                "Time range cannot exceed {} days",
                self.max_range_days
            )));
        }
        Ok(())
    }

    pub fn validate_resolution(&self, resolution: &str) -> Result<Resolution> {
        if resolution.trim().is_empty() {
            return Err(TelemetryError::MissingParameter(
                "Resolution parameter is required".into(),
            ));
        }
        resolution.parse()
    }
}

/// RFC 3339 instant with the `T` date/time separator required; the space form is rejected.
pub(crate) fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    if value.as_bytes().get(10) != Some(&b'T') {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses an ISO-8601 instant with an explicit offset (`2024-02-02T00:00:00Z`).
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    parse_iso8601(value).ok_or_else(|| {
        TelemetryError::InvalidDateFormat(
            "Invalid date format. Use ISO-8601 format (e.g., 2024-02-02T00:00:00Z)".into(),
        )
    })
}
