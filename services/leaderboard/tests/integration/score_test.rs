use chrono::{Duration, Utc};
use uuid::Uuid;

use arcade_leaderboard::error::LeaderboardError;
use arcade_leaderboard::usecase::score::{SubmitScoreInput, SubmitScoreUseCase};

use crate::helpers::{MockScoreRepo, test_score};

#[tokio::test]
async fn should_accept_first_three_scores_and_reject_the_fourth() {
    let player_id = Uuid::now_v7();
    let mock_repo = MockScoreRepo::empty();
    let scores_handle = mock_repo.scores_handle();

    let uc = SubmitScoreUseCase { scores: mock_repo };

    for _ in 0..3 {
        uc.execute(SubmitScoreInput {
            player_id,
            value: 50,
        })
        .await
        .unwrap();
    }

    let result = uc
        .execute(SubmitScoreInput {
            player_id,
            value: 50,
        })
        .await;
    assert!(
        matches!(result, Err(LeaderboardError::RateLimitExceeded)),
        "expected RateLimitExceeded, got {result:?}"
    );

    // The rejected submission wrote nothing.
    assert_eq!(scores_handle.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn should_accept_score_after_the_day_rolls_over() {
    let player_id = Uuid::now_v7();
    let yesterday = Utc::now() - Duration::days(1);
    let mock_repo = MockScoreRepo::new(vec![
        test_score(player_id, 50, yesterday),
        test_score(player_id, 60, yesterday),
        test_score(player_id, 70, yesterday),
    ]);
    let scores_handle = mock_repo.scores_handle();

    let uc = SubmitScoreUseCase { scores: mock_repo };
    uc.execute(SubmitScoreInput {
        player_id,
        value: 80,
    })
    .await
    .unwrap();

    assert_eq!(scores_handle.lock().unwrap().len(), 4);
}

#[tokio::test]
async fn should_count_the_cap_per_player() {
    let capped = Uuid::now_v7();
    let other = Uuid::now_v7();
    let now = Utc::now();
    let mock_repo = MockScoreRepo::new(vec![
        test_score(capped, 50, now),
        test_score(capped, 60, now),
        test_score(capped, 70, now),
    ]);
    let scores_handle = mock_repo.scores_handle();

    let uc = SubmitScoreUseCase { scores: mock_repo };
    uc.execute(SubmitScoreInput {
        player_id: other,
        value: 90,
    })
    .await
    .unwrap();

    assert_eq!(scores_handle.lock().unwrap().len(), 4);
}
