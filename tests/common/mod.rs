// Shared test helpers
#![allow(dead_code)]

use std::io::Write;

use chrono::{DateTime, Utc};
use telemetry_aggregator::models::TelemetryRecord;
use tempfile::NamedTempFile;

pub const HEADER: &str = "DeviceId,Timestamp,AmbientTemperature,DeviceTemperature";

/// Four readings, 20s apart, the last one exactly at 00:01:00.
pub const SAMPLE_ROWS: &[&str] = &[
    "DEVICE_001,2024-02-02T00:00:00Z,20.0,50.5",
    "DEVICE_001,2024-02-02T00:00:20Z,20.5,51.0",
    "DEVICE_001,2024-02-02T00:00:40Z,20.9,51.75",
    "DEVICE_001,2024-02-02T00:01:00Z,20.4,50.8",
];

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("test timestamp")
        .with_timezone(&Utc)
}

pub fn record(device: &str, at: &str, ambient: f64, device_temp: f64) -> TelemetryRecord {
    TelemetryRecord::new(device, ts(at), ambient, device_temp)
}

/// Header followed by `rows`, in a temp file that lives as long as the handle.
pub fn csv_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn sample_csv() -> NamedTempFile {
    csv_file(SAMPLE_ROWS)
}

pub fn sample_records() -> Vec<TelemetryRecord> {
    vec![
        record("DEVICE_001", "2024-02-02T00:00:00Z", 20.0, 50.5),
        record("DEVICE_001", "2024-02-02T00:00:20Z", 20.5, 51.0),
        record("DEVICE_001", "2024-02-02T00:00:40Z", 20.9, 51.75),
        record("DEVICE_001", "2024-02-02T00:01:00Z", 20.4, 50.8),
    ]
}
