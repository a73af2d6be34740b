use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    /// Transport-level failure reaching the model API
    #[error("Request to model API failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the model API
    #[error("Model API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Response arrived but carried no candidate text
    #[error("Model response contained no candidate text")]
    EmptyResponse,

    /// Candidate text was not the JSON the schema asked for
    #[error("Failed to parse model response: {0}")]
    Parse(#[from] serde_json::Error),
}
