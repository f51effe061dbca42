use chrono::{Duration, NaiveDate, Utc};

use arcade_leaderboard::auth::validate_session_token;
use arcade_leaderboard::error::LeaderboardError;
use arcade_leaderboard::usecase::register::{RegisterInput, RegisterUseCase};

use crate::helpers::{MockOtpRepo, MockPlayerRepo, TEST_JWT_SECRET, test_otp, test_player};

fn register_input(phone_no: &str, otp: &str) -> RegisterInput {
    RegisterInput {
        phone_no: phone_no.to_owned(),
        name: "Asha".to_owned(),
        dob: NaiveDate::from_ymd_opt(1995, 2, 11).unwrap(),
        email: "asha@example.com".to_owned(),
        otp: otp.to_owned(),
    }
}

#[tokio::test]
async fn should_register_and_issue_valid_token() {
    let players = MockPlayerRepo::empty();
    let players_handle = players.players_handle();

    let uc = RegisterUseCase {
        players,
        otps: MockOtpRepo::new(vec![test_otp("9876543210")]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = uc.execute(register_input("9876543210", "1234")).await.unwrap();

    let created = &players_handle.lock().unwrap()[0];
    assert_eq!(created.phone_no, "9876543210");
    assert_eq!(created.name, "Asha");

    // The token is bound to the new player's id.
    let claims = validate_session_token(&output.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, created.id.to_string());
}

#[tokio::test]
async fn should_reject_wrong_code_as_invalid_otp() {
    let uc = RegisterUseCase {
        players: MockPlayerRepo::empty(),
        otps: MockOtpRepo::new(vec![test_otp("9876543210")]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc.execute(register_input("9876543210", "9999")).await;
    assert!(
        matches!(result, Err(LeaderboardError::InvalidOtp)),
        "expected InvalidOtp, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_phone_as_invalid_otp() {
    let uc = RegisterUseCase {
        players: MockPlayerRepo::empty(),
        otps: MockOtpRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc.execute(register_input("9876543210", "1234")).await;
    assert!(
        matches!(result, Err(LeaderboardError::InvalidOtp)),
        "expected InvalidOtp, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_stale_code_as_expired_otp() {
    let mut otp = test_otp("9876543210");
    otp.created_at = Utc::now() - Duration::seconds(120);
    otp.expires_at = Utc::now() - Duration::seconds(60);

    let uc = RegisterUseCase {
        players: MockPlayerRepo::empty(),
        otps: MockOtpRepo::new(vec![otp]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc.execute(register_input("9876543210", "1234")).await;
    assert!(
        matches!(result, Err(LeaderboardError::ExpiredOtp)),
        "expected ExpiredOtp, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_already_registered_phone() {
    let uc = RegisterUseCase {
        players: MockPlayerRepo::new(vec![test_player("9876543210")]),
        otps: MockOtpRepo::new(vec![test_otp("9876543210")]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc.execute(register_input("9876543210", "1234")).await;
    assert!(
        matches!(result, Err(LeaderboardError::Validation(_))),
        "expected Validation, got {result:?}"
    );
}

#[tokio::test]
async fn should_use_otp_exactly_once_per_phone() {
    let players = MockPlayerRepo::empty();
    let otps = MockOtpRepo::new(vec![test_otp("9876543210")]);

    let uc = RegisterUseCase {
        players,
        otps,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    uc.execute(register_input("9876543210", "1234")).await.unwrap();

    // The code row survives, but the phone is now taken.
    let result = uc.execute(register_input("9876543210", "1234")).await;
    assert!(
        matches!(result, Err(LeaderboardError::Validation(_))),
        "expected Validation, got {result:?}"
    );
}
