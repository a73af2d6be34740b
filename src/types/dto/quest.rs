use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::content::quests::Quest;

/// Catalog listing entry for a quest
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct QuestSummary {
    /// Stable quest ID
    pub id: String,

    pub title: String,

    pub description: String,

    /// "beginner" | "intermediate" | "advanced"
    pub difficulty: String,

    /// XP granted on first completion
    pub xp_reward: u32,
}

impl From<&Quest> for QuestSummary {
    fn from(quest: &Quest) -> Self {
        Self {
            id: quest.id.to_string(),
            title: quest.title.to_string(),
            description: quest.description.to_string(),
            difficulty: quest.difficulty.as_str().to_string(),
            xp_reward: quest.xp_reward,
        }
    }
}

/// A quiz question as shown to the learner (answer index withheld)
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct QuizQuestionDto {
    pub prompt: String,

    pub options: Vec<String>,
}

/// The quiz embedded in a quest
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct QuizDto {
    pub questions: Vec<QuizQuestionDto>,

    /// Minimum number of correct answers to pass
    pub required_correct: u32,
}

/// Full quest content for the quest runner view
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct QuestDetail {
    pub id: String,

    pub title: String,

    pub description: String,

    pub difficulty: String,

    pub xp_reward: u32,

    /// Lesson text, markdown
    pub lesson: String,

    /// Code the editor is seeded with
    pub starter_code: String,

    pub quiz: QuizDto,
}

impl From<&Quest> for QuestDetail {
    fn from(quest: &Quest) -> Self {
        Self {
            id: quest.id.to_string(),
            title: quest.title.to_string(),
            description: quest.description.to_string(),
            difficulty: quest.difficulty.as_str().to_string(),
            xp_reward: quest.xp_reward,
            lesson: quest.lesson.to_string(),
            starter_code: quest.starter_code.to_string(),
            quiz: QuizDto {
                questions: quest
                    .quiz
                    .questions
                    .iter()
                    .map(|q| QuizQuestionDto {
                        prompt: q.prompt.to_string(),
                        options: q.options.iter().map(|o| o.to_string()).collect(),
                    })
                    .collect(),
                required_correct: quest.quiz.pass_score as u32,
            },
        }
    }
}
