//! Health check

use serde::Serialize;

use crate::api::Success;

/// Fixed status payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    message: &'static str,
}

/// Is the service up?
///
/// Does not touch the database
pub async fn health() -> Success<HealthResponse> {
    Success::ok(HealthResponse { message: "Healthy" })
}
