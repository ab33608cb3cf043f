//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with integration checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always answers `200 OK`: the service can still preview links and list
/// threads when the mailing list integration is disabled.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "subscription": { "status": "ok", "message": "Mailing list provider configured" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            subscription: check_subscription(&state),
        },
    })
}

fn check_subscription(state: &AppState) -> CheckStatus {
    if state.subscription_service.is_configured() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Mailing list provider configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "disabled".to_string(),
            message: Some("BREVO_API_KEY not set".to_string()),
        }
    }
}
