//! User repository trait defining the interface for user data persistence.
//!
//! The store exposes exactly the operations the registration flow needs.
//! Uniqueness of email and phone is enforced by implementations, not by
//! callers. Emails match case-insensitively.

use async_trait::async_trait;

use crate::domain::entities::otp::OneTimePasscode;
use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// use frcc_core::repositories::UserRepository;
/// use frcc_core::errors::DomainError;
///
/// async fn is_registered(repo: &impl UserRepository, email: &str) -> Result<bool, DomainError> {
///     Ok(repo.find_by_email_or_phone(email, None).await?.is_some())
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a newly registered user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Email or phone already taken
    /// * `Err(DomainError)` - Any other storage failure
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user whose email matches, or whose phone matches when one is given
    ///
    /// # Arguments
    /// * `email` - Email address to match
    /// * `phone` - Optional phone number to match as an alternative
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Option<User>, DomainError>;

    /// Confirm the unconfirmed registration holding this token digest
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The user, now confirmed
    /// * `Ok(None)` - No pending registration carries this token (unknown or already redeemed)
    async fn confirm_registration(&self, token_hash: &str) -> Result<Option<User>, DomainError>;

    /// Store a login passcode on the user with this email, replacing any previous one
    ///
    /// # Returns
    /// * `Ok(true)` - Passcode stored
    /// * `Ok(false)` - No user with this email
    async fn set_current_otp(&self, email: &str, otp: &OneTimePasscode)
        -> Result<bool, DomainError>;
}
