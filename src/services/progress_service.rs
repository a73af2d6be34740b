use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::content::{quest_by_id, quests::Quest, Achievement, ACHIEVEMENTS};
use crate::errors::internal::{ContentError, InternalError};
use crate::stores::ProgressStore;
use crate::types::internal::progress::{UnlockedAchievement, UserProgress};

/// Result of applying a quest completion to a progress record
pub struct QuestCompletion {
    pub progress: UserProgress,
    /// False when the quest had already been completed before
    pub newly_completed: bool,
    /// XP granted by this call; zero on repeat completion
    pub xp_awarded: u32,
    pub unlocked: Vec<&'static Achievement>,
}

/// Result of grading a quiz submission
pub struct QuizOutcome {
    pub correct: usize,
    pub total: usize,
    pub required: usize,
    pub passed: bool,
    /// Present only when the quiz was passed
    pub completion: Option<QuestCompletion>,
}

/// ProgressService owns every mutation of a user's progress record
///
/// Each operation loads the full aggregate, recomputes a new snapshot, runs
/// the achievement predicates, and saves wholesale. Completion is
/// idempotent: repeating a quest neither grants XP twice nor duplicates set
/// entries.
pub struct ProgressService {
    store: Arc<ProgressStore>,
}

impl ProgressService {
    pub fn new(store: Arc<ProgressStore>) -> Self {
        Self { store }
    }

    /// Load a user's current progress
    pub async fn get(&self, user_id: &str) -> Result<UserProgress, InternalError> {
        self.store.get(user_id).await
    }

    /// Mark a quest completed, award XP on first completion, and evaluate
    /// achievement predicates
    pub async fn complete_quest(
        &self,
        user_id: &str,
        quest_id: &str,
    ) -> Result<QuestCompletion, InternalError> {
        let quest = quest_by_id(quest_id)
            .ok_or_else(|| ContentError::UnknownQuest(quest_id.to_string()))?;

        let mut progress = self.store.get(user_id).await?;
        let completion = apply_completion(&mut progress, quest, Utc::now().timestamp());
        self.store.save(user_id, &progress).await?;

        tracing::info!(
            user_id,
            quest_id,
            newly_completed = completion.newly_completed,
            xp_awarded = completion.xp_awarded,
            unlocked = completion.unlocked.len(),
            "Quest completion recorded"
        );

        Ok(QuestCompletion {
            progress,
            ..completion
        })
    }

    /// Grade a quiz submission against the quest's embedded quiz
    ///
    /// A passing submission records the quiz pass and completes the quest in
    /// the same snapshot; a failing one leaves progress untouched.
    pub async fn submit_quiz(
        &self,
        user_id: &str,
        quest_id: &str,
        answers: &[usize],
    ) -> Result<QuizOutcome, InternalError> {
        let quest = quest_by_id(quest_id)
            .ok_or_else(|| ContentError::UnknownQuest(quest_id.to_string()))?;

        let correct = grade_quiz(quest, answers);
        let total = quest.quiz.questions.len();
        let required = quest.quiz.pass_score;
        let passed = correct >= required;

        if !passed {
            return Ok(QuizOutcome {
                correct,
                total,
                required,
                passed,
                completion: None,
            });
        }

        let mut progress = self.store.get(user_id).await?;
        progress.passed_quizzes.insert(quest.id.to_string());
        let completion = apply_completion(&mut progress, quest, Utc::now().timestamp());
        self.store.save(user_id, &progress).await?;

        tracing::info!(
            user_id,
            quest_id,
            correct,
            total,
            "Quiz passed"
        );

        Ok(QuizOutcome {
            correct,
            total,
            required,
            passed,
            completion: Some(QuestCompletion {
                progress,
                ..completion
            }),
        })
    }

    /// Record a login, updating the login counter and consecutive-day streak
    pub async fn record_login(&self, user_id: &str) -> Result<UserProgress, InternalError> {
        let mut progress = self.store.get(user_id).await?;
        if apply_login(&mut progress, Utc::now().date_naive()) {
            self.store.save(user_id, &progress).await?;
        }
        Ok(progress)
    }

    /// Attach a generated roadmap to the user's progress record
    pub async fn save_roadmap(
        &self,
        user_id: &str,
        roadmap: serde_json::Value,
    ) -> Result<UserProgress, InternalError> {
        let mut progress = self.store.get(user_id).await?;
        progress.roadmap = Some(roadmap);
        self.store.save(user_id, &progress).await?;
        Ok(progress)
    }
}

/// Count correct answers in a submission
///
/// Missing answers count as wrong; extra answers are ignored.
fn grade_quiz(quest: &Quest, answers: &[usize]) -> usize {
    quest
        .quiz
        .questions
        .iter()
        .enumerate()
        .filter(|(i, question)| answers.get(*i) == Some(&question.answer))
        .count()
}

/// Apply a quest completion to a progress snapshot
///
/// Set insertion dedups repeat completions; XP is granted only on the first.
/// Returns the completion summary with an empty progress placeholder (the
/// caller moves the final snapshot in).
fn apply_completion(progress: &mut UserProgress, quest: &Quest, now: i64) -> QuestCompletion {
    let newly_completed = progress.completed_quests.insert(quest.id.to_string());
    let xp_awarded = if newly_completed { quest.xp_reward } else { 0 };
    progress.experience += xp_awarded;

    let unlocked = evaluate_achievements(progress, now);

    QuestCompletion {
        progress: UserProgress::default(),
        newly_completed,
        xp_awarded,
        unlocked,
    }
}

/// Evaluate achievement predicates in catalog order, appending each newly
/// satisfied one exactly once
fn evaluate_achievements(progress: &mut UserProgress, now: i64) -> Vec<&'static Achievement> {
    let mut unlocked = Vec::new();
    for achievement in ACHIEVEMENTS {
        if (achievement.unlocked)(progress) && !progress.has_achievement(achievement.id) {
            progress.achievements.push(UnlockedAchievement {
                id: achievement.id.to_string(),
                unlocked_at: now,
            });
            unlocked.push(achievement);
        }
    }
    unlocked
}

/// Apply a login on the given UTC date; returns false for a same-day repeat
fn apply_login(progress: &mut UserProgress, today: NaiveDate) -> bool {
    match progress.last_login_day {
        Some(last) if last == today => return false,
        Some(last) if today.signed_duration_since(last).num_days() == 1 => {
            progress.streak_days += 1;
        }
        _ => progress.streak_days = 1,
    }

    progress.login_count += 1;
    progress.last_login_day = Some(today);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(id: &str) -> &'static Quest {
        quest_by_id(id).expect("catalog quest")
    }

    #[test]
    fn completing_twice_awards_xp_once() {
        let mut progress = UserProgress::default();
        let intro = quest("intro-to-ml");

        let first = apply_completion(&mut progress, intro, 0);
        assert!(first.newly_completed);
        assert_eq!(first.xp_awarded, intro.xp_reward);
        assert_eq!(progress.experience, intro.xp_reward);

        let second = apply_completion(&mut progress, intro, 0);
        assert!(!second.newly_completed);
        assert_eq!(second.xp_awarded, 0);
        assert_eq!(progress.experience, intro.xp_reward);
        assert_eq!(progress.completed_quests.len(), 1);
    }

    #[test]
    fn first_steps_unlocks_on_zero_to_one_transition_only() {
        let mut progress = UserProgress::default();

        let first = apply_completion(&mut progress, quest("intro-to-ml"), 0);
        assert!(first.unlocked.iter().any(|a| a.id == "first-steps"));

        let second = apply_completion(&mut progress, quest("linear-regression"), 0);
        assert!(!second.unlocked.iter().any(|a| a.id == "first-steps"));
        assert_eq!(
            progress
                .achievements
                .iter()
                .filter(|a| a.id == "first-steps")
                .count(),
            1
        );
    }

    #[test]
    fn veteran_unlocks_on_third_completion() {
        let mut progress = UserProgress::default();
        apply_completion(&mut progress, quest("intro-to-ml"), 0);
        apply_completion(&mut progress, quest("linear-regression"), 0);
        assert!(!progress.has_achievement("quest-veteran"));

        let third = apply_completion(&mut progress, quest("classification-basics"), 0);
        assert!(third.unlocked.iter().any(|a| a.id == "quest-veteran"));
    }

    #[test]
    fn brain_builder_requires_the_neural_networks_quest() {
        let mut progress = UserProgress::default();
        let result = apply_completion(&mut progress, quest("neural-networks"), 0);
        assert!(result.unlocked.iter().any(|a| a.id == "brain-builder"));
    }

    #[test]
    fn xp_collector_unlocks_at_threshold() {
        let mut progress = UserProgress::default();
        // 100 + 150 + 150 = 400, below the 500 threshold
        apply_completion(&mut progress, quest("intro-to-ml"), 0);
        apply_completion(&mut progress, quest("linear-regression"), 0);
        apply_completion(&mut progress, quest("classification-basics"), 0);
        assert!(!progress.has_achievement("xp-collector"));

        // 400 + 200 = 600
        let result = apply_completion(&mut progress, quest("neural-networks"), 0);
        assert!(result.unlocked.iter().any(|a| a.id == "xp-collector"));
    }

    #[test]
    fn quiz_grading_counts_only_matching_answers() {
        let intro = quest("intro-to-ml");
        assert_eq!(grade_quiz(intro, &[1, 1, 1]), 3);
        assert_eq!(grade_quiz(intro, &[0, 1, 1]), 2);
        // Short submissions leave the rest wrong
        assert_eq!(grade_quiz(intro, &[1]), 1);
        assert_eq!(grade_quiz(intro, &[]), 0);
    }

    #[test]
    fn streak_increments_on_consecutive_days() {
        let mut progress = UserProgress::default();
        let day1 = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        assert!(apply_login(&mut progress, day1));
        assert_eq!(progress.streak_days, 1);
        assert_eq!(progress.login_count, 1);

        assert!(apply_login(&mut progress, day2));
        assert_eq!(progress.streak_days, 2);
        assert_eq!(progress.login_count, 2);
    }

    #[test]
    fn same_day_login_is_a_no_op() {
        let mut progress = UserProgress::default();
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        assert!(apply_login(&mut progress, day));
        assert!(!apply_login(&mut progress, day));
        assert_eq!(progress.streak_days, 1);
        assert_eq!(progress.login_count, 1);
    }

    #[test]
    fn gap_day_resets_the_streak() {
        let mut progress = UserProgress::default();
        let day1 = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let day3 = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();

        apply_login(&mut progress, day1);
        apply_login(&mut progress, day3);
        assert_eq!(progress.streak_days, 1);
        assert_eq!(progress.login_count, 2);
    }
}
