// Per-device time bucketing. Buckets are anchored at each device's earliest
// reading, not at calendar boundaries, and cover [first, last) of that device.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{Result, TelemetryError};
use crate::models::{AggregatedTelemetry, TelemetryRecord};

/// avg/min/max of one temperature channel within a bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

impl ChannelStats {
    /// `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Summation rounding can land the mean one ulp outside [min, max].
        // NaN input leaves min > max; clamp would panic on that.
        let mean = mean_f64(values);
        let avg = if min <= max { mean.clamp(min, max) } else { mean };
        Some(Self { avg, min, max })
    }
}

/// Groups `records` by device and emits one aggregate per non-empty bucket of width `resolution`.
///
/// Devices are emitted in ascending id order, buckets chronologically within a device.
/// A device whose readings all share one timestamp produces no buckets.
pub fn aggregate_records(
    records: Vec<TelemetryRecord>,
    resolution: TimeDelta,
) -> Result<Vec<AggregatedTelemetry>> {
    if resolution <= TimeDelta::zero() {
        return Err(TelemetryError::InvalidResolution(format!(
            "Resolution must be positive, got {}s",
            resolution.num_seconds()
        )));
    }

    let mut by_device: BTreeMap<String, Vec<TelemetryRecord>> = BTreeMap::new();
    for r in records {
        by_device.entry(r.device_id.clone()).or_default().push(r);
    }

    let mut out = Vec::new();
    for (device_id, mut device_records) in by_device {
        if device_records.is_empty() {
            continue;
        }
        device_records.sort_by_key(|r| r.timestamp);
        aggregate_device(&device_id, &device_records, resolution, &mut out);
    }
    Ok(out)
}

/// `sorted` must be non-empty and ascending by timestamp.
fn aggregate_device(
    device_id: &str,
    sorted: &[TelemetryRecord],
    resolution: TimeDelta,
    out: &mut Vec<AggregatedTelemetry>,
) {
    let first = sorted[0].timestamp;
    let last = sorted[sorted.len() - 1].timestamp;

    // Every record before `cursor` is older than the current bucket start.
    let mut cursor = 0;
    let mut bucket_start = first;
    while bucket_start < last {
        let bucket_end = bucket_start + resolution;
        let len = sorted[cursor..]
            .iter()
            .take_while(|r| r.timestamp < bucket_end)
            .count();
        let bucket = &sorted[cursor..cursor + len];
        cursor += len;

        if let Some(agg) = aggregate_bucket(device_id, bucket, bucket_start, resolution) {
            out.push(agg);
        }
        bucket_start = bucket_end;
    }
}

/// One bucket's statistics, or `None` when the bucket holds no readings.
pub fn aggregate_bucket(
    device_id: &str,
    bucket: &[TelemetryRecord],
    bucket_start: DateTime<Utc>,
    resolution: TimeDelta,
) -> Option<AggregatedTelemetry> {
    let ambient: Vec<f64> = bucket.iter().map(|r| r.ambient_temperature).collect();
    let device: Vec<f64> = bucket.iter().map(|r| r.device_temperature).collect();
    let ambient = ChannelStats::from_values(&ambient)?;
    let device = ChannelStats::from_values(&device)?;

    Some(AggregatedTelemetry {
        device_id: device_id.to_string(),
        start_time: bucket_start,
        end_time: bucket_start + resolution,
        avg_ambient_temperature: ambient.avg,
        min_ambient_temperature: ambient.min,
        max_ambient_temperature: ambient.max,
        avg_device_temperature: device.avg,
        min_device_temperature: device.min,
        max_device_temperature: device.max,
        record_count: bucket.len() as u64,
    })
}

pub fn mean_f64(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().sum::<f64>() / (v.len() as f64)
}
