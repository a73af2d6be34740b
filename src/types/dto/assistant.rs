use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::dto::progress::{AchievementDto, ProgressResponse};
use crate::types::internal::assistant::{ChatTurn, Roadmap};

/// Request model for AI code evaluation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// Quest the submission belongs to
    pub quest_id: String,

    /// The learner's code
    pub code: String,
}

/// Response model for AI code evaluation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct EvaluateResponse {
    /// Whether the model accepted the submission
    pub passed: bool,

    /// Feedback addressed to the learner
    pub feedback: String,

    /// XP granted (zero unless this submission newly completed the quest)
    pub xp_awarded: u32,

    /// Whether the quest transitioned to completed
    pub newly_completed: bool,

    /// Achievements unlocked by this submission
    pub unlocked: Vec<AchievementDto>,

    /// Progress snapshot after an accepted submission
    pub progress: Option<ProgressResponse>,
}

/// Request model for hint generation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HintRequest {
    pub quest_id: String,

    /// The learner's current code
    pub code: String,
}

/// Response model for hint generation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HintResponse {
    pub hint: String,
}

/// Request model for roadmap generation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RoadmapRequest {
    /// Target career goal, e.g. "ML engineer"
    pub goal: String,

    /// Self-reported experience level; defaults to "beginner"
    pub experience_level: Option<String>,
}

/// One stage of a generated roadmap
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RoadmapStageDto {
    pub title: String,

    pub description: String,

    pub skills: Vec<String>,
}

/// Response model for roadmap generation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RoadmapResponse {
    pub title: String,

    pub stages: Vec<RoadmapStageDto>,
}

impl From<Roadmap> for RoadmapResponse {
    fn from(roadmap: Roadmap) -> Self {
        Self {
            title: roadmap.title,
            stages: roadmap
                .stages
                .into_iter()
                .map(|stage| RoadmapStageDto {
                    title: stage.title,
                    description: stage.description,
                    skills: stage.skills,
                })
                .collect(),
        }
    }
}

/// One prior turn of an assistant conversation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ChatTurnDto {
    /// "user" or "model"
    pub role: String,

    pub content: String,
}

impl From<&ChatTurnDto> for ChatTurn {
    fn from(turn: &ChatTurnDto) -> Self {
        Self {
            role: turn.role.clone(),
            content: turn.content.clone(),
        }
    }
}

/// Request model for assistant chat
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,

    /// Prior turns, oldest first
    #[oai(default)]
    pub history: Vec<ChatTurnDto>,
}

/// Response model for assistant chat
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
