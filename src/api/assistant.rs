use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::BearerAuth;
use crate::content::quest_by_id;
use crate::errors::api::assistant::AssistantApiError;
use crate::services::{GeminiService, ProgressService, TokenService};
use crate::types::dto::assistant::{
    ChatRequest, ChatResponse, EvaluateRequest, EvaluateResponse, HintRequest, HintResponse,
    RoadmapRequest, RoadmapResponse,
};
use crate::types::dto::progress::{AchievementDto, ProgressResponse};
use crate::types::internal::assistant::ChatTurn;
use crate::types::internal::auth::Claims;

/// AI assistant API endpoints
///
/// Each endpoint is one model call; code evaluation additionally feeds an
/// accepted submission into the progression evaluator.
pub struct AssistantApi {
    token_service: Arc<TokenService>,
    progress_service: Arc<ProgressService>,
    gemini: Arc<GeminiService>,
}

impl AssistantApi {
    pub fn new(
        token_service: Arc<TokenService>,
        progress_service: Arc<ProgressService>,
        gemini: Arc<GeminiService>,
    ) -> Self {
        Self {
            token_service,
            progress_service,
            gemini,
        }
    }

    fn authenticate(&self, auth: &BearerAuth) -> Result<Claims, AssistantApiError> {
        Ok(self.token_service.validate_jwt(&auth.0.token)?)
    }
}

/// API tags for assistant endpoints
#[derive(Tags)]
enum AssistantTags {
    /// AI assistant endpoints
    Assistant,
}

#[OpenApi(prefix_path = "/assistant")]
impl AssistantApi {
    /// Submit code for AI grading
    ///
    /// An accepted submission completes the quest: XP is granted and
    /// achievement predicates run, exactly as for a passed quiz.
    #[oai(path = "/evaluate", method = "post", tag = "AssistantTags::Assistant")]
    async fn evaluate(
        &self,
        auth: BearerAuth,
        body: Json<EvaluateRequest>,
    ) -> Result<Json<EvaluateResponse>, AssistantApiError> {
        let claims = self.authenticate(&auth)?;

        let quest = quest_by_id(&body.quest_id)
            .ok_or_else(|| AssistantApiError::unknown_quest(&body.quest_id))?;

        let verdict = self.gemini.evaluate_code(quest, &body.code).await?;

        if !verdict.passed {
            return Ok(Json(EvaluateResponse {
                passed: false,
                feedback: verdict.feedback,
                xp_awarded: 0,
                newly_completed: false,
                unlocked: Vec::new(),
                progress: None,
            }));
        }

        let completion = self
            .progress_service
            .complete_quest(&claims.sub, quest.id)
            .await?;

        Ok(Json(EvaluateResponse {
            passed: true,
            feedback: verdict.feedback,
            xp_awarded: completion.xp_awarded,
            newly_completed: completion.newly_completed,
            unlocked: completion
                .progress
                .achievements
                .iter()
                .filter(|a| completion.unlocked.iter().any(|d| d.id == a.id))
                .map(AchievementDto::from)
                .collect(),
            progress: Some(ProgressResponse::from(&completion.progress)),
        }))
    }

    /// Request a hint for a quest
    ///
    /// Falls back to a canned hint when the model is unavailable.
    #[oai(path = "/hint", method = "post", tag = "AssistantTags::Assistant")]
    async fn hint(
        &self,
        auth: BearerAuth,
        body: Json<HintRequest>,
    ) -> Result<Json<HintResponse>, AssistantApiError> {
        self.authenticate(&auth)?;

        let quest = quest_by_id(&body.quest_id)
            .ok_or_else(|| AssistantApiError::unknown_quest(&body.quest_id))?;

        let hint = self.gemini.generate_hint(quest, &body.code).await;
        Ok(Json(HintResponse { hint: hint.hint }))
    }

    /// Generate a career roadmap
    ///
    /// The generated roadmap is also stored on the user's progress record.
    #[oai(path = "/roadmap", method = "post", tag = "AssistantTags::Assistant")]
    async fn roadmap(
        &self,
        auth: BearerAuth,
        body: Json<RoadmapRequest>,
    ) -> Result<Json<RoadmapResponse>, AssistantApiError> {
        let claims = self.authenticate(&auth)?;

        let level = body.experience_level.as_deref().unwrap_or("beginner");
        let roadmap = self.gemini.generate_roadmap(&body.goal, level).await?;

        let as_value = serde_json::to_value(&roadmap)
            .map_err(|e| AssistantApiError::from(crate::errors::internal::AssistantError::Parse(e)))?;
        self.progress_service
            .save_roadmap(&claims.sub, as_value)
            .await?;

        Ok(Json(roadmap.into()))
    }

    /// Ask the study assistant a question
    ///
    /// Falls back to a canned reply when the model is unavailable.
    #[oai(path = "/chat", method = "post", tag = "AssistantTags::Assistant")]
    async fn chat(
        &self,
        auth: BearerAuth,
        body: Json<ChatRequest>,
    ) -> Result<Json<ChatResponse>, AssistantApiError> {
        self.authenticate(&auth)?;

        let history: Vec<ChatTurn> = body.history.iter().map(ChatTurn::from).collect();
        let reply = self.gemini.chat(&body.message, &history).await;

        Ok(Json(ChatResponse { reply: reply.reply }))
    }
}
