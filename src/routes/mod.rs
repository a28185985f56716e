// HTTP routes

mod error;
mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::service::TelemetryService;
use crate::validator::TelemetryValidator;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) service: Arc<TelemetryService>,
    pub(crate) validator: TelemetryValidator,
}

pub fn app(service: Arc<TelemetryService>, config: &AppConfig) -> Router {
    let state = AppState {
        service,
        validator: TelemetryValidator::new(config.query.max_range_days),
    };
    Router::new()
        .route("/", get(|| async { "Telemetry aggregation service" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/telemetry/aggregate", get(http::aggregate_handler)) // GET /telemetry/aggregate
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
