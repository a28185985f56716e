// Aggregated telemetry: one row per non-empty (device, bucket).
// Both temperature channels carry avg/min/max.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics for one device over `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedTelemetry {
    pub device_id: String,
    /// Inclusive.
    pub start_time: DateTime<Utc>,
    /// Exclusive; always `start_time + resolution`.
    pub end_time: DateTime<Utc>,
    pub avg_ambient_temperature: f64,
    pub min_ambient_temperature: f64,
    pub max_ambient_temperature: f64,
    pub avg_device_temperature: f64,
    pub min_device_temperature: f64,
    pub max_device_temperature: f64,
    /// Never zero; empty buckets are not emitted.
    pub record_count: u64,
}
