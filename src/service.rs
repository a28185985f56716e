// Query pipeline: load the window from the data source, then bucket it.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, instrument};

use crate::aggregation::aggregate_records;
use crate::error::Result;
use crate::models::AggregatedTelemetry;
use crate::telemetry_repo::TelemetryRepo;

/// Stateless apart from the repository; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TelemetryService {
    repo: TelemetryRepo,
}

impl TelemetryService {
    pub fn new(repo: TelemetryRepo) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &TelemetryRepo {
        &self.repo
    }

    /// Blocking: reads the whole data source. Call from `spawn_blocking` in async code.
    #[instrument(skip(self), fields(operation = "aggregate_telemetry", resolution_secs = resolution.num_seconds()))]
    pub fn aggregate_telemetry(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        resolution: TimeDelta,
    ) -> Result<Vec<AggregatedTelemetry>> {
        let records = self.repo.load(from, to)?;
        let loaded = records.len();
        let aggregated = aggregate_records(records, resolution)?;
        debug!(loaded, buckets = aggregated.len(), "aggregation complete");
        Ok(aggregated)
    }
}
