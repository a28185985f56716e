// Row parsing. Timestamp first; temperatures only for rows inside the window.

use chrono::{DateTime, Utc};
use csv::StringRecord;

use crate::models::TelemetryRecord;
use crate::validator::parse_iso8601;

const DEVICE_ID: usize = 0;
const TIMESTAMP: usize = 1;
const AMBIENT: usize = 2;
const DEVICE: usize = 3;

/// `Ok(None)` for a well-formed row outside `[from, to]`.
pub(super) fn parse_in_window(
    row: &StringRecord,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Option<TelemetryRecord>, String> {
    let raw_ts = field(row, TIMESTAMP, "Timestamp")?;
    let timestamp =
        parse_iso8601(raw_ts).ok_or_else(|| format!("invalid timestamp {:?}", raw_ts))?;

    if timestamp < from || timestamp > to {
        return Ok(None);
    }

    Ok(Some(TelemetryRecord {
        device_id: field(row, DEVICE_ID, "DeviceId")?.to_string(),
        timestamp,
        ambient_temperature: number(row, AMBIENT, "AmbientTemperature")?,
        device_temperature: number(row, DEVICE, "DeviceTemperature")?,
    }))
}

fn field<'a>(row: &'a StringRecord, idx: usize, name: &str) -> Result<&'a str, String> {
    row.get(idx).ok_or_else(|| format!("missing {} column", name))
}

fn number(row: &StringRecord, idx: usize, name: &str) -> Result<f64, String> {
    let raw = field(row, idx, name)?;
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid {} {:?}", name, raw))
}
