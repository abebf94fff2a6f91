//! Tests for the email transports and the emailer

#[cfg(test)]
mod emailer_tests;
#[cfg(test)]
mod mock_email_tests;
