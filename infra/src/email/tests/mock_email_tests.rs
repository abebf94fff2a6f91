//! Unit tests for mock email service

use crate::email::{EmailService, MockEmailService, OutboundEmail};
use crate::InfrastructureError;

fn email(to: &str) -> OutboundEmail {
    OutboundEmail {
        from: "FRCC <bot@frcc.example.com>".to_string(),
        to: to.to_string(),
        subject: "Welcome!".to_string(),
        html_body: String::new(),
        text_body: String::new(),
    }
}

#[tokio::test]
async fn test_mock_email_send_success() {
    let service = MockEmailService::new();
    let message_id = service.send_email(&email("ada@example.com")).await.unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
    assert_eq!(service.sent_emails()[0].to, "ada@example.com");
}

#[tokio::test]
async fn test_mock_email_simulate_failure() {
    let mut service = MockEmailService::new();
    service.set_simulate_failure(true);

    let result = service.send_email(&email("ada@example.com")).await;
    assert!(matches!(result, Err(InfrastructureError::Email(_))));
    assert_eq!(service.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_email_clones_share_state() {
    let service = MockEmailService::new();
    let clone = service.clone();

    for i in 1..=3 {
        clone
            .send_email(&email(&format!("user{}@example.com", i)))
            .await
            .unwrap();
    }

    assert_eq!(service.get_message_count(), 3);
    assert_eq!(service.provider_name(), "Mock");
}
