use poem_openapi::{payload::Json, ApiResponse, Object};

/// Standardized error response for quest catalog endpoints
#[derive(Object, Debug)]
pub struct QuestErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Quest catalog error types
#[derive(ApiResponse, Debug)]
pub enum QuestError {
    /// No quest exists with the requested ID
    #[oai(status = 404)]
    UnknownQuest(Json<QuestErrorResponse>),
}

impl QuestError {
    pub fn unknown_quest(id: &str) -> Self {
        QuestError::UnknownQuest(Json(QuestErrorResponse {
            error: "unknown_quest".to_string(),
            message: format!("No quest with id '{}'", id),
            status_code: 404,
        }))
    }
}
