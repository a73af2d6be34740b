use serde::{Deserialize, Serialize};

/// Verdict returned by the model for a code submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CodeEvaluation {
    /// Whether the submission satisfies the quest objective
    pub passed: bool,
    /// Feedback shown to the learner
    pub feedback: String,
}

/// A generated hint for a stuck learner
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hint {
    pub hint: String,
}

/// AI-generated career roadmap: an ordered tech-tree of stages
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roadmap {
    /// Short title for the overall path
    pub title: String,
    pub stages: Vec<RoadmapStage>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoadmapStage {
    pub title: String,
    pub description: String,
    /// Concrete skills or technologies to pick up in this stage
    pub skills: Vec<String>,
}

/// One turn of an assistant conversation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatTurn {
    /// "user" or "model"
    pub role: String,
    pub content: String,
}

/// Assistant reply to a chat message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
