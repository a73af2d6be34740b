// API layer - HTTP endpoints
pub mod assistant;
pub mod auth;
pub mod health;
pub mod progress;
pub mod quests;

pub use assistant::AssistantApi;
pub use auth::AuthApi;
pub use health::HealthApi;
pub use progress::ProgressApi;
pub use quests::QuestsApi;

use poem_openapi::{auth::Bearer, SecurityScheme};

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);
