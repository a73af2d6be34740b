use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::api::BearerAuth;
use crate::content::quest_by_id;
use crate::errors::api::progress::ProgressError;
use crate::services::{ProgressService, TokenService};
use crate::types::dto::progress::{
    AchievementDto, ProgressResponse, QuizResultResponse, QuizSubmission,
};
use crate::types::internal::auth::Claims;

/// Progress API endpoints
pub struct ProgressApi {
    token_service: Arc<TokenService>,
    progress_service: Arc<ProgressService>,
}

impl ProgressApi {
    pub fn new(token_service: Arc<TokenService>, progress_service: Arc<ProgressService>) -> Self {
        Self {
            token_service,
            progress_service,
        }
    }

    fn authenticate(&self, auth: &BearerAuth) -> Result<Claims, ProgressError> {
        Ok(self.token_service.validate_jwt(&auth.0.token)?)
    }
}

/// API tags for progress endpoints
#[derive(Tags)]
enum ProgressTags {
    /// Progress tracking endpoints
    Progress,
}

#[OpenApi]
impl ProgressApi {
    /// Fetch the authenticated user's progress
    #[oai(path = "/progress", method = "get", tag = "ProgressTags::Progress")]
    async fn get(&self, auth: BearerAuth) -> Result<Json<ProgressResponse>, ProgressError> {
        let claims = self.authenticate(&auth)?;
        let progress = self.progress_service.get(&claims.sub).await?;
        Ok(Json(ProgressResponse::from(&progress)))
    }

    /// Record a login for streak tracking
    ///
    /// Idempotent within a UTC day.
    #[oai(path = "/progress/login", method = "post", tag = "ProgressTags::Progress")]
    async fn record_login(&self, auth: BearerAuth) -> Result<Json<ProgressResponse>, ProgressError> {
        let claims = self.authenticate(&auth)?;
        let progress = self.progress_service.record_login(&claims.sub).await?;
        Ok(Json(ProgressResponse::from(&progress)))
    }

    /// Submit quiz answers for a quest
    ///
    /// A passing submission records the quiz pass, completes the quest, and
    /// may unlock achievements; a failing one leaves progress untouched.
    #[oai(path = "/progress/quests/:id/quiz", method = "post", tag = "ProgressTags::Progress")]
    async fn submit_quiz(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<QuizSubmission>,
    ) -> Result<Json<QuizResultResponse>, ProgressError> {
        let claims = self.authenticate(&auth)?;

        let quest = quest_by_id(&id.0).ok_or_else(|| ProgressError::unknown_quest(&id.0))?;
        if body.answers.len() != quest.quiz.questions.len() {
            return Err(ProgressError::invalid_submission(format!(
                "Expected {} answers, got {}",
                quest.quiz.questions.len(),
                body.answers.len()
            )));
        }

        let answers: Vec<usize> = body.answers.iter().map(|&a| a as usize).collect();
        let outcome = self
            .progress_service
            .submit_quiz(&claims.sub, &id.0, &answers)
            .await?;

        let response = match outcome.completion {
            Some(completion) => QuizResultResponse {
                passed: true,
                correct: outcome.correct as u32,
                total: outcome.total as u32,
                required: outcome.required as u32,
                xp_awarded: completion.xp_awarded,
                newly_completed: completion.newly_completed,
                unlocked: completion
                    .progress
                    .achievements
                    .iter()
                    .filter(|a| completion.unlocked.iter().any(|d| d.id == a.id))
                    .map(AchievementDto::from)
                    .collect(),
                progress: ProgressResponse::from(&completion.progress),
            },
            None => {
                // Failed submission: report the grade over unchanged progress
                let progress = self.progress_service.get(&claims.sub).await?;
                QuizResultResponse {
                    passed: false,
                    correct: outcome.correct as u32,
                    total: outcome.total as u32,
                    required: outcome.required as u32,
                    xp_awarded: 0,
                    newly_completed: false,
                    unlocked: Vec::new(),
                    progress: ProgressResponse::from(&progress),
                }
            }
        };

        Ok(Json(response))
    }
}
