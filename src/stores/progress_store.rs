use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::errors::internal::InternalError;
use crate::types::db::progress::{self, ActiveModel as ProgressActiveModel, Entity as Progress};
use crate::types::internal::progress::UserProgress;

/// ProgressStore persists per-user progress aggregates
///
/// Each user's progress is one JSON blob, read and replaced wholesale; there
/// are no partial updates. A blob that fails to parse is treated as absent
/// and replaced by the empty default on the next save.
pub struct ProgressStore {
    db: DatabaseConnection,
}

impl ProgressStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load a user's progress, falling back to the empty default when no row
    /// exists or the stored blob is corrupted
    pub async fn get(&self, user_id: &str) -> Result<UserProgress, InternalError> {
        let row = Progress::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_progress", e))?;

        let Some(row) = row else {
            return Ok(UserProgress::default());
        };

        match serde_json::from_str(&row.data) {
            Ok(progress) => Ok(progress),
            Err(e) => {
                tracing::warn!(
                    user_id,
                    error = %e,
                    "Corrupted progress blob, resetting to default"
                );
                Ok(UserProgress::default())
            }
        }
    }

    /// Replace a user's progress wholesale
    pub async fn save(
        &self,
        user_id: &str,
        progress: &UserProgress,
    ) -> Result<(), InternalError> {
        let data = serde_json::to_string(progress)
            .map_err(|e| InternalError::parse("progress blob", e.to_string()))?;

        let record = ProgressActiveModel {
            user_id: Set(user_id.to_string()),
            data: Set(data),
            updated_at: Set(Utc::now().timestamp()),
        };

        Progress::insert(record)
            .on_conflict(
                OnConflict::column(progress::Column::UserId)
                    .update_columns([progress::Column::Data, progress::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("save_progress", e))?;

        Ok(())
    }
}
