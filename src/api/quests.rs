use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::content::{all_quests, quest_by_id};
use crate::errors::api::quest::QuestError;
use crate::types::dto::quest::{QuestDetail, QuestSummary};

/// Quest catalog API endpoints
///
/// The catalog is static content; these endpoints require no authentication.
pub struct QuestsApi;

/// API tags for quest endpoints
#[derive(Tags)]
enum QuestTags {
    /// Quest catalog endpoints
    Quests,
}

#[OpenApi]
impl QuestsApi {
    /// List the quest catalog
    #[oai(path = "/quests", method = "get", tag = "QuestTags::Quests")]
    async fn list(&self) -> Json<Vec<QuestSummary>> {
        Json(all_quests().iter().map(QuestSummary::from).collect())
    }

    /// Fetch full quest content by ID
    #[oai(path = "/quests/:id", method = "get", tag = "QuestTags::Quests")]
    async fn get(&self, id: Path<String>) -> Result<Json<QuestDetail>, QuestError> {
        match quest_by_id(&id.0) {
            Some(quest) => Ok(Json(quest.into())),
            None => Err(QuestError::unknown_quest(&id.0)),
        }
    }
}
