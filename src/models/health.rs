use crate::config::SERVICE_NAME;
use crate::models::utc_timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for the `/health` endpoint.
///
/// ## Fields
/// - `status`: Always `"healthy"` while the process is serving requests
/// - `service`: Service identifier (`"hello-world-api"`)
/// - `timestamp`: UTC time of the check, ISO 8601 with a trailing `Z`
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "service": "hello-world-api",
///   "timestamp": "2024-03-10T15:30:45.123456Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "hello-world-api")]
    pub service: String,
    #[schema(example = "2024-03-10T15:30:45.123456Z")]
    pub timestamp: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: utc_timestamp(),
        }
    }
}
