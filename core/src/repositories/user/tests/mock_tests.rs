//! Unit tests for mock user repository

use chrono::{Duration, Utc};

use crate::domain::entities::otp::OneTimePasscode;
use crate::domain::entities::user::{RegistrationProfile, User};
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{MockUserRepository, UserRepository};

fn user(email: &str, phone: &str, token_hash: &str) -> User {
    User::register(
        RegistrationProfile {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            quality: "Admiral".to_string(),
            organization: "Navy".to_string(),
        },
        token_hash.to_string(),
    )
}

#[tokio::test]
async fn test_create_and_find_by_email_or_phone() {
    let repo = MockUserRepository::new();
    repo.create(user("a@x.com", "1", "h1")).await.unwrap();

    assert!(repo.find_by_email_or_phone("a@x.com", None).await.unwrap().is_some());
    assert!(repo
        .find_by_email_or_phone("other@x.com", Some("1"))
        .await
        .unwrap()
        .is_some());
    assert!(repo
        .find_by_email_or_phone("other@x.com", Some("2"))
        .await
        .unwrap()
        .is_none());
    assert!(repo.find_by_email_or_phone("other@x.com", None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_rejects_duplicate_email_or_phone() {
    let repo = MockUserRepository::new();
    repo.create(user("a@x.com", "1", "h1")).await.unwrap();

    let same_email = repo.create(user("a@x.com", "2", "h2")).await;
    assert!(matches!(
        same_email,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    let same_phone = repo.create(user("b@x.com", "1", "h3")).await;
    assert!(matches!(
        same_phone,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_emails_match_regardless_of_case() {
    let repo = MockUserRepository::new();
    repo.create(user("Ada@X.com", "1", "h1")).await.unwrap();

    let duplicate = repo.create(user("ada@x.com", "2", "h2")).await;
    assert!(matches!(
        duplicate,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
    assert!(repo.find_by_email_or_phone("ADA@x.COM", None).await.unwrap().is_some());

    let otp = OneTimePasscode::issue(Utc::now(), 150);
    assert!(repo.set_current_otp("ada@x.com", &otp).await.unwrap());
}

#[tokio::test]
async fn test_confirm_registration_is_single_use() {
    let repo = MockUserRepository::new();
    repo.create(user("a@x.com", "1", "h1")).await.unwrap();

    assert!(repo.confirm_registration("unknown").await.unwrap().is_none());

    let confirmed = repo.confirm_registration("h1").await.unwrap().unwrap();
    assert!(confirmed.is_confirmed);

    assert!(repo.confirm_registration("h1").await.unwrap().is_none());
    assert!(repo.get_by_email("a@x.com").await.unwrap().is_confirmed);
}

#[tokio::test]
async fn test_set_current_otp_overwrites() {
    let repo = MockUserRepository::new();
    repo.create(user("a@x.com", "1", "h1")).await.unwrap();

    let first = OneTimePasscode {
        code: "111111".to_string(),
        expires_at: Utc::now() + Duration::seconds(150),
    };
    let second = OneTimePasscode {
        code: "222222".to_string(),
        expires_at: Utc::now() + Duration::seconds(150),
    };

    assert!(repo.set_current_otp("a@x.com", &first).await.unwrap());
    assert!(repo.set_current_otp("a@x.com", &second).await.unwrap());
    assert!(!repo.set_current_otp("nobody@x.com", &second).await.unwrap());

    let stored = repo.get_by_email("a@x.com").await.unwrap();
    assert_eq!(stored.current_otp, Some(second));
}
