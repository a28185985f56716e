// Supported bucket resolutions

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::TelemetryError;

/// Bucket width for one query. Only these ten values are accepted at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    TenSeconds,
    ThirtySeconds,
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    SixHours,
    TwelveHours,
    OneDay,
}

impl Resolution {
    pub const ALL: [Resolution; 10] = [
        Resolution::TenSeconds,
        Resolution::ThirtySeconds,
        Resolution::OneMinute,
        Resolution::FiveMinutes,
        Resolution::FifteenMinutes,
        Resolution::ThirtyMinutes,
        Resolution::OneHour,
        Resolution::SixHours,
        Resolution::TwelveHours,
        Resolution::OneDay,
    ];

    /// Canonical query-string token, e.g. `"15m"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TenSeconds => "10s",
            Self::ThirtySeconds => "30s",
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::SixHours => "6h",
            Self::TwelveHours => "12h",
            Self::OneDay => "1d",
        }
    }

    pub fn as_duration(self) -> TimeDelta {
        match self {
            Self::TenSeconds => TimeDelta::seconds(10),
            Self::ThirtySeconds => TimeDelta::seconds(30),
            Self::OneMinute => TimeDelta::minutes(1),
            Self::FiveMinutes => TimeDelta::minutes(5),
            Self::FifteenMinutes => TimeDelta::minutes(15),
            Self::ThirtyMinutes => TimeDelta::minutes(30),
            Self::OneHour => TimeDelta::hours(1),
            Self::SixHours => TimeDelta::hours(6),
            Self::TwelveHours => TimeDelta::hours(12),
            Self::OneDay => TimeDelta::days(1),
        }
    }

    /// Comma-separated list of every supported token, for error messages.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; surrounding whitespace is not trimmed.
impl FromStr for Resolution {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == lower)
            .ok_or_else(|| {
                TelemetryError::InvalidResolution(format!(
                    "Invalid resolution. Supported values: {}",
                    Self::supported_list()
                ))
            })
    }
}
