use crate::config::API_VERSION;
use crate::models::utc_timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `GET /hello`.
///
/// ```json
/// {
///   "message": "Hello, World!",
///   "timestamp": "2024-01-01T00:00:00.000000Z",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct Greeting {
    #[schema(example = "Hello, World!")]
    pub message: String,
    #[schema(example = "2024-01-01T00:00:00.000000Z")]
    pub timestamp: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

impl Greeting {
    pub fn hello_world() -> Self {
        Self {
            message: "Hello, World!".to_string(),
            timestamp: utc_timestamp(),
            version: API_VERSION.to_string(),
        }
    }
}
