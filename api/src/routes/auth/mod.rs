//! Registration and login route handlers
//!
//! - `POST /register` stores a pending registration
//! - `POST /register/confirm` redeems the emailed confirmation token
//! - `POST /login` emails a one-time passcode
//! - `POST /otp` exchanges the passcode for a session cookie

pub mod confirm;
pub mod login;
pub mod otp;
pub mod register;

use std::sync::Arc;

use frcc_core::repositories::UserRepository;
use frcc_core::services::messaging::JobQueue;
use frcc_core::services::AuthService;
use frcc_shared::SessionConfig;

pub use confirm::confirm;
pub use login::login;
pub use otp::verify_otp;
pub use register::register;

/// Application state shared by the auth handlers
pub struct AppState<U, Q>
where
    U: UserRepository + ?Sized,
    Q: JobQueue + ?Sized,
{
    pub auth_service: Arc<AuthService<U, Q>>,
    /// Attributes of the session cookie set on successful login
    pub session: SessionConfig,
}

impl<U, Q> AppState<U, Q>
where
    U: UserRepository + ?Sized,
    Q: JobQueue + ?Sized,
{
    pub fn new(auth_service: Arc<AuthService<U, Q>>, session: SessionConfig) -> Self {
        Self {
            auth_service,
            session,
        }
    }
}
