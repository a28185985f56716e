// Domain models: raw readings in, per-bucket aggregates out

mod aggregation;
mod error_body;
mod reading;

pub use aggregation::AggregatedTelemetry;
pub use error_body::ErrorResponse;
pub use reading::TelemetryRecord;
