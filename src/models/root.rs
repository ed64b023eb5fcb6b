use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Entry point description served at `/`, pointing callers at the docs and
/// health routes.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct RootInfo {
    #[schema(example = "Welcome to Hello World API")]
    pub message: String,
    #[schema(example = "/docs")]
    pub docs: String,
    #[schema(example = "/health")]
    pub health: String,
}

impl Default for RootInfo {
    fn default() -> Self {
        Self {
            message: "Welcome to Hello World API".to_string(),
            docs: "/docs".to_string(),
            health: "/health".to_string(),
        }
    }
}
