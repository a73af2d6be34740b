use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-user progress aggregate
///
/// Stored as a single JSON blob and replaced wholesale after each mutation.
/// Every field carries a serde default so blobs written by older versions
/// (or hand-edited ones missing fields) still load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProgress {
    /// Quest IDs the user has completed (deduplicated)
    pub completed_quests: BTreeSet<String>,

    /// Quest IDs whose embedded quiz the user has passed (deduplicated)
    pub passed_quizzes: BTreeSet<String>,

    /// Total experience points; never decreases during normal operation
    pub experience: u32,

    /// Unlocked achievements, append-only, unique by ID
    pub achievements: Vec<UnlockedAchievement>,

    /// Total number of logins recorded
    pub login_count: u32,

    /// Current consecutive-day login streak
    pub streak_days: u32,

    /// UTC date of the most recent recorded login
    pub last_login_day: Option<NaiveDate>,

    /// Most recently generated career roadmap, if any
    pub roadmap: Option<serde_json::Value>,
}

/// A single unlocked achievement on a user's progress record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    /// Achievement definition ID
    pub id: String,
    /// Unix timestamp of the unlock
    pub unlocked_at: i64,
}

impl UserProgress {
    /// Whether the achievement with the given ID has already been unlocked
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }

    /// Display level derived from experience (level 1 at 0 XP, +1 per 250 XP)
    pub fn level(&self) -> u32 {
        self.experience / 250 + 1
    }

    /// Experience still needed to reach the next level
    pub fn xp_to_next_level(&self) -> u32 {
        250 - self.experience % 250
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let progress: UserProgress = serde_json::from_str(r#"{"experience": 300}"#).unwrap();
        assert_eq!(progress.experience, 300);
        assert!(progress.completed_quests.is_empty());
        assert!(progress.achievements.is_empty());
        assert_eq!(progress.streak_days, 0);
        assert!(progress.roadmap.is_none());
    }

    #[test]
    fn level_derivation() {
        let mut progress = UserProgress::default();
        assert_eq!(progress.level(), 1);
        progress.experience = 249;
        assert_eq!(progress.level(), 1);
        progress.experience = 250;
        assert_eq!(progress.level(), 2);
        assert_eq!(progress.xp_to_next_level(), 250);
    }

    #[test]
    fn roundtrip_preserves_sets_and_achievements() {
        let mut progress = UserProgress::default();
        progress.completed_quests.insert("intro-to-ml".to_string());
        progress.achievements.push(UnlockedAchievement {
            id: "first-steps".to_string(),
            unlocked_at: 1_700_000_000,
        });

        let json = serde_json::to_string(&progress).unwrap();
        let restored: UserProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, progress);
    }
}
