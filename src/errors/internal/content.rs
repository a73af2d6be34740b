use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Unknown quest: {0}")]
    UnknownQuest(String),
}
