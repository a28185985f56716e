// TelemetryError -> HTTP response. Client errors echo their message;
// server errors are logged and answered with a generic one.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::TelemetryError;
use crate::models::ErrorResponse;

impl IntoResponse for TelemetryError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message) = if self.is_client_error() {
            debug!(code, error = %self, "rejected telemetry query");
            (StatusCode::BAD_REQUEST, self.to_string())
        } else {
            error!(code, error = %self, "telemetry query failed");
            let message = match self {
                TelemetryError::DataSource(_) => "Error reading telemetry data",
                _ => "Internal server error",
            };
            (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
        };
        (status, Json(ErrorResponse::new(message, code))).into_response()
    }
}
