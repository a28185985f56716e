// One parsed data-source row

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped temperature observation from one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryRecord {
    pub device_id: String,
    pub timestamp: DateTime<Utc>,
    pub ambient_temperature: f64,
    pub device_temperature: f64,
}

impl TelemetryRecord {
    pub fn new(
        device_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        ambient_temperature: f64,
        device_temperature: f64,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            timestamp,
            ambient_temperature,
            device_temperature,
        }
    }
}
