//! Emailer rendering and delivery through the mock transport

use std::sync::Arc;

use frcc_core::services::messaging::{OtpEmailSender, VerificationEmailSender, WelcomeEmailSender};
use frcc_shared::EmailConfig;

use crate::email::{Emailer, MockEmailService};

fn config() -> EmailConfig {
    EmailConfig {
        sender_name: "FRCC".to_string(),
        sender_address: "bot@frcc.example.com".to_string(),
        base_url: "https://frcc.example.com/".to_string(),
        website: "https://www.frcc.example.com".to_string(),
        ..EmailConfig::default()
    }
}

fn emailer() -> (Emailer, MockEmailService) {
    let transport = MockEmailService::new();
    let emailer = Emailer::new(Arc::new(transport.clone()), &config());
    (emailer, transport)
}

#[tokio::test]
async fn test_verification_email_links_to_confirmation() {
    let (emailer, transport) = emailer();

    let message_id = emailer
        .send_verification_email("ada@example.com", "abc123")
        .await
        .unwrap();
    assert!(message_id.starts_with("mock_"));

    let sent = transport.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, "FRCC <bot@frcc.example.com>");
    assert_eq!(sent[0].to, "ada@example.com");
    assert_eq!(sent[0].subject, "Confirm your registration");
    assert!(sent[0]
        .text_body
        .contains("https://frcc.example.com/register/confirm/abc123"));
    assert!(sent[0]
        .html_body
        .contains("https://frcc.example.com/register/confirm/abc123"));
}

#[tokio::test]
async fn test_welcome_email() {
    let (emailer, transport) = emailer();

    emailer
        .send_welcome_email("ada@example.com", "Ada Lovelace")
        .await
        .unwrap();

    let sent = &transport.sent_emails()[0];
    assert_eq!(sent.subject, "Welcome!");
    assert!(sent.text_body.contains("Welcome, Ada Lovelace!"));
    assert!(sent.text_body.contains("ada@example.com"));
    assert!(sent.text_body.contains("https://www.frcc.example.com"));
}

#[tokio::test]
async fn test_otp_email() {
    let (emailer, transport) = emailer();

    emailer
        .send_otp_email("ada@example.com", "042133", "Ada")
        .await
        .unwrap();

    let sent = &transport.sent_emails()[0];
    assert_eq!(sent.subject, "Your login code");
    assert!(sent.html_body.contains("042133"));
    assert!(sent.text_body.contains("Hello Ada,"));
}

#[tokio::test]
async fn test_transport_failure_is_reported_as_string() {
    let emailer = Emailer::new(Arc::new(MockEmailService::failing()), &config());

    let err = emailer
        .send_welcome_email("ada@example.com", "Ada")
        .await
        .unwrap_err();

    assert!(err.contains("Simulated email sending failure"));
    assert!(err.contains("Mock"));
}
