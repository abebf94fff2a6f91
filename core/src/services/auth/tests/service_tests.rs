//! Unit tests for authentication service

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::job_message::{OTP_EMAIL_JOB, VERIFICATION_EMAIL_JOB, WELCOME_EMAIL_JOB};
use crate::domain::entities::user::RegistrationProfile;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::MockUserRepository;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::session::{SessionTokenConfig, SessionTokenService};

use super::mocks::RecordingJobQueue;

struct Harness {
    repo: Arc<MockUserRepository>,
    queue: Arc<RecordingJobQueue>,
    tokens: Arc<SessionTokenService>,
    service: AuthService<MockUserRepository, RecordingJobQueue>,
}

fn harness_with_queue(queue: RecordingJobQueue) -> Harness {
    let repo = Arc::new(MockUserRepository::new());
    let queue = Arc::new(queue);
    let tokens = Arc::new(SessionTokenService::new(SessionTokenConfig::default()));
    let service = AuthService::new(
        repo.clone(),
        queue.clone(),
        tokens.clone(),
        AuthServiceConfig::default(),
    );

    Harness {
        repo,
        queue,
        tokens,
        service,
    }
}

fn harness() -> Harness {
    harness_with_queue(RecordingJobQueue::new())
}

fn profile(email: &str, phone: &str) -> RegistrationProfile {
    RegistrationProfile {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        quality: "Engineer".to_string(),
        organization: "Analytical Engines".to_string(),
    }
}

/// Register and confirm a user so it can log in
async fn confirmed_user(h: &Harness, email: &str, phone: &str) {
    h.service.register(profile(email, phone)).await.unwrap();
    let token = h
        .queue
        .last_for(VERIFICATION_EMAIL_JOB)
        .and_then(|m| m.get("token").map(str::to_string))
        .unwrap();
    h.service.confirm(&token).await.unwrap();
}

#[tokio::test]
async fn test_register_enqueues_verification_email() {
    let h = harness();

    let user = h.service.register(profile("a@x.com", "1")).await.unwrap();
    assert!(!user.is_confirmed);

    let job = h.queue.last_for(VERIFICATION_EMAIL_JOB).unwrap();
    assert_eq!(job.get("email"), Some("a@x.com"));

    let token = job.get("token").unwrap();
    assert_eq!(token.len(), 64);
    // Only the digest is stored
    assert_ne!(user.confirmation_token_hash, token);
}

#[tokio::test]
async fn test_register_twice_with_same_email_or_phone_fails() {
    let h = harness();
    h.service.register(profile("a@x.com", "1")).await.unwrap();

    let same_email = h.service.register(profile("a@x.com", "2")).await;
    assert!(matches!(
        same_email,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    let same_phone = h.service.register(profile("b@x.com", "1")).await;
    assert!(matches!(
        same_phone,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    assert_eq!(h.repo.len().await, 1);
    assert_eq!(h.queue.sent().len(), 1);
}

#[tokio::test]
async fn test_register_validates_profile() {
    let h = harness();

    let bad_email = h.service.register(profile("not-an-email", "1")).await;
    assert!(matches!(
        bad_email,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));

    let mut missing_name = profile("a@x.com", "1");
    missing_name.first_name = "   ".to_string();
    assert!(matches!(
        h.service.register(missing_name).await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { field })) if field == "first_name"
    ));

    let long_phone = profile("a@x.com", &"9".repeat(40));
    assert!(matches!(
        h.service.register(long_phone).await,
        Err(DomainError::ValidationErr(ValidationError::TooLong { .. }))
    ));

    assert!(h.repo.is_empty().await);
    assert!(h.queue.sent().is_empty());
}

#[tokio::test]
async fn test_register_keeps_user_when_enqueue_fails() {
    let h = harness_with_queue(RecordingJobQueue::failing());

    let result = h.service.register(profile("a@x.com", "1")).await;
    assert!(matches!(result, Err(DomainError::Queue { .. })));

    // Partial failure: the row exists and a retry is reported as a duplicate
    assert!(h.repo.get_by_email("a@x.com").await.is_some());
    assert!(matches!(
        h.service.register(profile("a@x.com", "1")).await,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}

#[tokio::test]
async fn test_confirm_with_unknown_token_fails() {
    let h = harness();
    h.service.register(profile("a@x.com", "1")).await.unwrap();

    let result = h.service.confirm("deadbeef").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidConfirmationToken))
    ));
    assert!(!h.repo.get_by_email("a@x.com").await.unwrap().is_confirmed);
    assert!(h.queue.last_for(WELCOME_EMAIL_JOB).is_none());
}

#[tokio::test]
async fn test_confirm_marks_account_and_enqueues_welcome_email() {
    let h = harness();
    h.service.register(profile("a@x.com", "1")).await.unwrap();
    let token = h
        .queue
        .last_for(VERIFICATION_EMAIL_JOB)
        .unwrap()
        .get("token")
        .unwrap()
        .to_string();

    let user = h.service.confirm(&token).await.unwrap();
    assert!(user.is_confirmed);
    assert!(h.repo.get_by_email("a@x.com").await.unwrap().is_confirmed);

    let welcome = h.queue.last_for(WELCOME_EMAIL_JOB).unwrap();
    assert_eq!(welcome.get("email"), Some("a@x.com"));
    assert_eq!(welcome.get("name"), Some("Ada"));
}

#[tokio::test]
async fn test_confirmation_token_cannot_be_replayed() {
    let h = harness();
    h.service.register(profile("a@x.com", "1")).await.unwrap();
    let token = h
        .queue
        .last_for(VERIFICATION_EMAIL_JOB)
        .unwrap()
        .get("token")
        .unwrap()
        .to_string();

    h.service.confirm(&token).await.unwrap();
    let replay = h.service.confirm(&token).await;

    assert!(matches!(
        replay,
        Err(DomainError::Auth(AuthError::InvalidConfirmationToken))
    ));
    let welcomes = h
        .queue
        .sent()
        .into_iter()
        .filter(|m| m.job() == Some(WELCOME_EMAIL_JOB))
        .count();
    assert_eq!(welcomes, 1);
}

#[tokio::test]
async fn test_login_unconfirmed_account_fails() {
    let h = harness();
    h.service.register(profile("a@x.com", "1")).await.unwrap();

    let result = h.service.login("a@x.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountNotConfirmed))
    ));
    assert!(h.repo.get_by_email("a@x.com").await.unwrap().current_otp.is_none());
    assert!(h.queue.last_for(OTP_EMAIL_JOB).is_none());
}

#[tokio::test]
async fn test_login_unknown_account_fails() {
    let h = harness();
    assert!(matches!(
        h.service.login("ghost@x.com").await,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn test_email_case_does_not_create_a_second_account() {
    let h = harness();
    confirmed_user(&h, "Ada@X.com", "1").await;

    let duplicate = h.service.register(profile("ada@x.com", "2")).await;
    assert!(matches!(
        duplicate,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
    assert_eq!(h.repo.len().await, 1);

    h.service.login("ADA@x.com").await.unwrap();
    let job = h.queue.last_for(OTP_EMAIL_JOB).unwrap();
    assert_eq!(job.get("email"), Some("Ada@X.com"));
}

#[tokio::test]
async fn test_login_issues_otp_and_enqueues_email() {
    let h = harness();
    confirmed_user(&h, "a@x.com", "1").await;

    let before = Utc::now();
    h.service.login("a@x.com").await.unwrap();

    let stored = h.repo.get_by_email("a@x.com").await.unwrap();
    let otp = stored.current_otp.unwrap();
    assert_eq!(otp.code.len(), 6);
    assert!(otp.code.chars().all(|c| c.is_ascii_digit()));
    assert!(otp.expires_at >= before + Duration::seconds(150));
    assert!(otp.expires_at <= Utc::now() + Duration::seconds(150));

    let job = h.queue.last_for(OTP_EMAIL_JOB).unwrap();
    assert_eq!(job.get("email"), Some("a@x.com"));
    assert_eq!(job.get("otp"), Some(otp.code.as_str()));
    assert_eq!(job.get("name"), Some("Ada"));
}

#[tokio::test]
async fn test_verify_otp_success_issues_session() {
    let h = harness();
    confirmed_user(&h, "a@x.com", "1").await;
    h.service.login("a@x.com").await.unwrap();
    let code = h.repo.get_by_email("a@x.com").await.unwrap().current_otp.unwrap().code;

    let session = h.service.verify_otp("a@x.com", &code).await.unwrap();

    let claims = h.tokens.verify(&session.token).unwrap();
    assert_eq!(claims.email, "a@x.com");
    assert!(session.expires_at > Utc::now() + Duration::hours(23));
}

#[tokio::test]
async fn test_verify_otp_mismatch_fails() {
    let h = harness();
    confirmed_user(&h, "a@x.com", "1").await;
    h.service.login("a@x.com").await.unwrap();
    let code = h.repo.get_by_email("a@x.com").await.unwrap().current_otp.unwrap().code;

    let wrong = if code == "000000" { "000001" } else { "000000" };
    assert!(matches!(
        h.service.verify_otp("a@x.com", wrong).await,
        Err(DomainError::Auth(AuthError::InvalidOtp))
    ));
    assert!(matches!(
        h.service.verify_otp("a@x.com", &format!("{} ", code)).await,
        Err(DomainError::Auth(AuthError::InvalidOtp))
    ));
}

#[tokio::test]
async fn test_verify_otp_after_window_fails() {
    let h = harness();
    confirmed_user(&h, "a@x.com", "1").await;
    h.service.login("a@x.com").await.unwrap();
    let code = h.repo.get_by_email("a@x.com").await.unwrap().current_otp.unwrap().code;

    // Issued 150 seconds ago
    h.repo
        .update_user("a@x.com", |user| {
            if let Some(otp) = user.current_otp.as_mut() {
                otp.expires_at = Utc::now();
            }
        })
        .await;

    assert!(matches!(
        h.service.verify_otp("a@x.com", &code).await,
        Err(DomainError::Auth(AuthError::OtpExpired))
    ));
}

#[tokio::test]
async fn test_new_login_replaces_previous_otp() {
    let h = harness();
    confirmed_user(&h, "a@x.com", "1").await;

    h.service.login("a@x.com").await.unwrap();
    let first = h.repo.get_by_email("a@x.com").await.unwrap().current_otp.unwrap();
    h.service.login("a@x.com").await.unwrap();
    let second = h.repo.get_by_email("a@x.com").await.unwrap().current_otp.unwrap();

    assert!(h.service.verify_otp("a@x.com", &second.code).await.is_ok());
    if first.code != second.code {
        assert!(h.service.verify_otp("a@x.com", &first.code).await.is_err());
    }
}

#[tokio::test]
async fn test_verify_otp_without_login_fails() {
    let h = harness();
    confirmed_user(&h, "a@x.com", "1").await;

    assert!(matches!(
        h.service.verify_otp("a@x.com", "123456").await,
        Err(DomainError::Auth(AuthError::OtpNotIssued))
    ));
}
