// GET handlers: version, telemetry aggregate

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::info;

use super::AppState;
use crate::error::TelemetryError;
use crate::models::AggregatedTelemetry;
use crate::validator::parse_instant;

/// GET /version — service name and version from Cargo.toml at build time.
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Raw query string. Kept as strings so each problem maps to its own error kind.
#[derive(Debug, Deserialize)]
pub(super) struct AggregateParams {
    from: Option<String>,
    to: Option<String>,
    resolution: Option<String>,
}

/// GET /telemetry/aggregate?from=&to=&resolution=
pub(super) async fn aggregate_handler(
    State(state): State<AppState>,
    Query(params): Query<AggregateParams>,
) -> Result<Json<Vec<AggregatedTelemetry>>, TelemetryError> {
    let (Some(from), Some(to), Some(resolution)) = (params.from, params.to, params.resolution)
    else {
        return Err(TelemetryError::MissingParameter(
            "Missing required parameters".into(),
        ));
    };

    let from = parse_instant(&from)?;
    let to = parse_instant(&to)?;
    state.validator.validate_time_range(from, to)?;
    let resolution = state.validator.validate_resolution(&resolution)?;

    let service = state.service.clone();
    let aggregated = tokio::task::spawn_blocking(move || {
        service.aggregate_telemetry(from, to, resolution.as_duration())
    })
    .await
    .map_err(|e| TelemetryError::Internal(format!("aggregation task: {}", e)))??;

    info!(
        %from,
        %to,
        %resolution,
        buckets = aggregated.len(),
        "telemetry aggregate served"
    );
    Ok(Json(aggregated))
}
