use crate::types::internal::progress::UserProgress;

/// A badge definition unlocked by a predicate over a progress snapshot
///
/// Predicates are evaluated in catalog order after every progress mutation;
/// the evaluator appends an unlock at most once per ID.
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: fn(&UserProgress) -> bool,
}

/// Experience threshold for the XP collector badge
pub const XP_COLLECTOR_THRESHOLD: u32 = 500;

/// Quest whose completion grants the brain-builder badge
pub const BRAIN_BUILDER_QUEST: &str = "neural-networks";

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first-steps",
        title: "First Steps",
        description: "Complete your first quest",
        unlocked: |p| !p.completed_quests.is_empty(),
    },
    Achievement {
        id: "quest-veteran",
        title: "Quest Veteran",
        description: "Complete three quests",
        unlocked: |p| p.completed_quests.len() >= 3,
    },
    Achievement {
        id: "brain-builder",
        title: "Brain Builder",
        description: "Complete the neural networks quest",
        unlocked: |p| p.completed_quests.contains(BRAIN_BUILDER_QUEST),
    },
    Achievement {
        id: "xp-collector",
        title: "XP Collector",
        description: "Earn 500 experience points",
        unlocked: |p| p.experience >= XP_COLLECTOR_THRESHOLD,
    },
];

/// Look up an achievement definition by its stable ID
pub fn achievement_by_id(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_steps_requires_a_completion() {
        let mut progress = UserProgress::default();
        let first_steps = achievement_by_id("first-steps").unwrap();
        assert!(!(first_steps.unlocked)(&progress));

        progress.completed_quests.insert("intro-to-ml".to_string());
        assert!((first_steps.unlocked)(&progress));
    }

    #[test]
    fn xp_collector_threshold_is_inclusive() {
        let mut progress = UserProgress::default();
        progress.experience = XP_COLLECTOR_THRESHOLD - 1;
        let badge = achievement_by_id("xp-collector").unwrap();
        assert!(!(badge.unlocked)(&progress));

        progress.experience = XP_COLLECTOR_THRESHOLD;
        assert!((badge.unlocked)(&progress));
    }
}
