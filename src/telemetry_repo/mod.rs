// CSV telemetry source. Read once per query; rows are filtered to the requested window.

mod row;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::error::{Result, TelemetryError};
use crate::models::TelemetryRecord;

/// Header row expected at the top of every telemetry file.
pub const CSV_HEADER: [&str; 4] = [
    "DeviceId",
    "Timestamp",
    "AmbientTemperature",
    "DeviceTemperature",
];

/// Read-only handle on a telemetry CSV file. Holds no state besides the path,
/// so any number of queries can load through it concurrently.
#[derive(Debug, Clone)]
pub struct TelemetryRepo {
    path: PathBuf,
}

impl TelemetryRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Readings with `from <= timestamp <= to`, in file order.
    #[instrument(skip(self), fields(repo = "telemetry", operation = "load", path = %self.path.display()))]
    pub fn load(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<TelemetryRecord>> {
        let file = File::open(&self.path).map_err(|e| {
            TelemetryError::DataSource(format!("{}: {}", self.path.display(), e))
        })?;
        let records = load_from_reader(file, from, to)?;
        debug!(records = records.len(), "telemetry loaded");
        Ok(records)
    }
}

/// Same as [`TelemetryRepo::load`] over any reader. The first row is treated as the header.
/// Aborts on the first malformed row.
pub fn load_from_reader<R: io::Read>(
    reader: R,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<TelemetryRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let parsed = row::parse_in_window(&record, from, to)
            .map_err(|e| TelemetryError::DataSource(format!("line {}: {}", line, e)))?;
        if let Some(r) = parsed {
            out.push(r);
        }
    }
    Ok(out)
}
