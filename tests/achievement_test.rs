mod common;

use common::*;

#[tokio::test]
async fn first_steps_unlocks_exactly_once() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;

    let first = service.complete_quest(&user.id, "intro-to-ml").await.unwrap();
    assert!(first.unlocked.iter().any(|a| a.id == "first-steps"));

    // Neither a repeat nor a second quest re-fires it
    let repeat = service.complete_quest(&user.id, "intro-to-ml").await.unwrap();
    assert!(repeat.unlocked.is_empty());

    let second = service
        .complete_quest(&user.id, "linear-regression")
        .await
        .unwrap();
    assert!(!second.unlocked.iter().any(|a| a.id == "first-steps"));

    let progress = service.get(&user.id).await.unwrap();
    assert_eq!(
        progress
            .achievements
            .iter()
            .filter(|a| a.id == "first-steps")
            .count(),
        1
    );
}

#[tokio::test]
async fn achievements_accumulate_across_the_catalog() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;

    service.complete_quest(&user.id, "intro-to-ml").await.unwrap();
    service.complete_quest(&user.id, "linear-regression").await.unwrap();

    // Third completion grants the veteran badge
    let third = service
        .complete_quest(&user.id, "classification-basics")
        .await
        .unwrap();
    assert!(third.unlocked.iter().any(|a| a.id == "quest-veteran"));

    // Fourth completion is the neural networks quest: both the quest-specific
    // badge and the 500 XP threshold (400 + 200) land together
    let fourth = service.complete_quest(&user.id, "neural-networks").await.unwrap();
    assert!(fourth.unlocked.iter().any(|a| a.id == "brain-builder"));
    assert!(fourth.unlocked.iter().any(|a| a.id == "xp-collector"));

    let progress = service.get(&user.id).await.unwrap();
    assert_eq!(progress.achievements.len(), 4);
    assert_eq!(progress.experience, 600);
}

#[tokio::test]
async fn quiz_path_unlocks_achievements_too() {
    let db = setup_test_db().await;
    let service = progress_service(&db);
    let user = register_test_user(&credential_store(&db)).await;

    let outcome = service
        .submit_quiz(&user.id, "intro-to-ml", &[1, 1, 1])
        .await
        .unwrap();

    let completion = outcome.completion.unwrap();
    assert!(completion.unlocked.iter().any(|a| a.id == "first-steps"));
}
