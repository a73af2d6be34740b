use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::content::achievement_by_id;
use crate::types::internal::progress::{UnlockedAchievement, UserProgress};

/// An unlocked achievement joined with its catalog definition
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AchievementDto {
    pub id: String,

    pub title: String,

    pub description: String,

    /// Unix timestamp of the unlock
    pub unlocked_at: i64,
}

impl From<&UnlockedAchievement> for AchievementDto {
    fn from(unlocked: &UnlockedAchievement) -> Self {
        // Unknown IDs (catalog drift) fall back to the raw ID
        let (title, description) = match achievement_by_id(&unlocked.id) {
            Some(def) => (def.title.to_string(), def.description.to_string()),
            None => (unlocked.id.clone(), String::new()),
        };

        Self {
            id: unlocked.id.clone(),
            title,
            description,
            unlocked_at: unlocked.unlocked_at,
        }
    }
}

/// Full progress snapshot with derived display statistics
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    /// IDs of completed quests
    pub completed_quests: Vec<String>,

    /// IDs of quests whose quiz was passed
    pub passed_quizzes: Vec<String>,

    /// Total experience points
    pub experience: u32,

    /// Display level derived from experience
    pub level: u32,

    /// Experience still needed to reach the next level
    pub xp_to_next_level: u32,

    pub achievements: Vec<AchievementDto>,

    pub login_count: u32,

    /// Current consecutive-day login streak
    pub streak_days: u32,

    /// Most recently generated career roadmap, if any
    pub roadmap: Option<serde_json::Value>,
}

impl From<&UserProgress> for ProgressResponse {
    fn from(progress: &UserProgress) -> Self {
        Self {
            completed_quests: progress.completed_quests.iter().cloned().collect(),
            passed_quizzes: progress.passed_quizzes.iter().cloned().collect(),
            experience: progress.experience,
            level: progress.level(),
            xp_to_next_level: progress.xp_to_next_level(),
            achievements: progress.achievements.iter().map(AchievementDto::from).collect(),
            login_count: progress.login_count,
            streak_days: progress.streak_days,
            roadmap: progress.roadmap.clone(),
        }
    }
}

/// Request model for quiz submission
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct QuizSubmission {
    /// Selected option index per question, in question order
    pub answers: Vec<u32>,
}

/// Response model for a graded quiz submission
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct QuizResultResponse {
    pub passed: bool,

    /// Number of correctly answered questions
    pub correct: u32,

    /// Total number of questions
    pub total: u32,

    /// Minimum correct answers required to pass
    pub required: u32,

    /// XP granted by this submission (zero on fail or repeat completion)
    pub xp_awarded: u32,

    /// Whether the quest transitioned to completed with this submission
    pub newly_completed: bool,

    /// Achievements unlocked by this submission
    pub unlocked: Vec<AchievementDto>,

    /// Progress snapshot after grading
    pub progress: ProgressResponse,
}
