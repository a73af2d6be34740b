mod common;

use common::*;

use sea_orm::{ActiveModelTrait, Set};

use pyquest_backend::content::quest_by_id;
use pyquest_backend::types::db::progress;

#[tokio::test]
async fn completing_a_quest_twice_awards_xp_once() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;
    let intro = quest_by_id("intro-to-ml").unwrap();

    let first = service.complete_quest(&user.id, "intro-to-ml").await.unwrap();
    assert!(first.newly_completed);
    assert_eq!(first.xp_awarded, intro.xp_reward);
    assert_eq!(first.progress.experience, intro.xp_reward);

    let second = service.complete_quest(&user.id, "intro-to-ml").await.unwrap();
    assert!(!second.newly_completed);
    assert_eq!(second.xp_awarded, 0);
    assert_eq!(second.progress.experience, intro.xp_reward);
    assert_eq!(second.progress.completed_quests.len(), 1);
}

#[tokio::test]
async fn unknown_quest_completion_is_an_error() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;

    assert!(service.complete_quest(&user.id, "no-such-quest").await.is_err());
}

#[tokio::test]
async fn failed_quiz_leaves_progress_untouched() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;

    // All answers wrong for intro-to-ml (correct indices are all 1)
    let outcome = service
        .submit_quiz(&user.id, "intro-to-ml", &[0, 0, 0])
        .await
        .unwrap();

    assert!(!outcome.passed);
    assert_eq!(outcome.correct, 0);
    assert!(outcome.completion.is_none());

    let progress = service.get(&user.id).await.unwrap();
    assert!(progress.completed_quests.is_empty());
    assert!(progress.passed_quizzes.is_empty());
    assert_eq!(progress.experience, 0);
}

#[tokio::test]
async fn passed_quiz_records_quiz_and_completion_together() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;
    let intro = quest_by_id("intro-to-ml").unwrap();

    // Two of three correct meets the pass threshold
    let outcome = service
        .submit_quiz(&user.id, "intro-to-ml", &[1, 1, 0])
        .await
        .unwrap();

    assert!(outcome.passed);
    assert_eq!(outcome.correct, 2);
    let completion = outcome.completion.expect("Passing quiz completes the quest");
    assert!(completion.newly_completed);
    assert_eq!(completion.xp_awarded, intro.xp_reward);

    let progress = service.get(&user.id).await.unwrap();
    assert!(progress.completed_quests.contains("intro-to-ml"));
    assert!(progress.passed_quizzes.contains("intro-to-ml"));
}

#[tokio::test]
async fn repeating_a_passed_quiz_does_not_double_award() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;
    let intro = quest_by_id("intro-to-ml").unwrap();

    service.submit_quiz(&user.id, "intro-to-ml", &[1, 1, 1]).await.unwrap();
    let again = service
        .submit_quiz(&user.id, "intro-to-ml", &[1, 1, 1])
        .await
        .unwrap();

    assert!(again.passed);
    let completion = again.completion.unwrap();
    assert!(!completion.newly_completed);
    assert_eq!(completion.xp_awarded, 0);
    assert_eq!(completion.progress.experience, intro.xp_reward);
}

#[tokio::test]
async fn corrupted_progress_blob_resets_to_default() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;

    // Write a corrupted blob directly, bypassing the store
    let row = progress::ActiveModel {
        user_id: Set(user.id.clone()),
        data: Set("{not valid json!".to_string()),
        updated_at: Set(0),
    };
    row.insert(&db).await.unwrap();

    let progress = service.get(&user.id).await.unwrap();
    assert!(progress.completed_quests.is_empty());
    assert_eq!(progress.experience, 0);

    // The next mutation replaces the corrupted blob with a valid one
    let completion = service.complete_quest(&user.id, "intro-to-ml").await.unwrap();
    assert!(completion.newly_completed);

    let reloaded = service.get(&user.id).await.unwrap();
    assert!(reloaded.completed_quests.contains("intro-to-ml"));
}

#[tokio::test]
async fn login_recording_is_idempotent_within_a_day() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;

    let first = service.record_login(&user.id).await.unwrap();
    assert_eq!(first.login_count, 1);
    assert_eq!(first.streak_days, 1);

    let second = service.record_login(&user.id).await.unwrap();
    assert_eq!(second.login_count, 1);
    assert_eq!(second.streak_days, 1);
}

#[tokio::test]
async fn roadmap_is_attached_to_progress() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;

    let roadmap = serde_json::json!({
        "title": "ML Engineer Path",
        "stages": []
    });
    let progress = service.save_roadmap(&user.id, roadmap.clone()).await.unwrap();
    assert_eq!(progress.roadmap, Some(roadmap.clone()));

    let reloaded = service.get(&user.id).await.unwrap();
    assert_eq!(reloaded.roadmap, Some(roadmap));
}
