use serde::{Deserialize, Serialize};
use validator::Validate;

use frcc_core::domain::entities::user::RegistrationProfile;

/// Body of `POST /register`
///
/// Only the shape is checked here. Trimming and email syntax are enforced
/// by the registration service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(length(min = 1, max = 255))]
    pub email: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    /// Role or title of the registrant
    #[serde(default)]
    #[validate(length(max = 255))]
    pub quality: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub organization: String,
}

impl From<RegisterRequest> for RegistrationProfile {
    fn from(request: RegisterRequest) -> Self {
        RegistrationProfile {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            quality: request.quality,
            organization: request.organization,
        }
    }
}

/// Form body of `POST /register/confirm`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmForm {
    #[validate(length(min = 1, max = 128))]
    pub token: String,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255))]
    pub email: String,
}

/// Body of `POST /otp`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OtpRequest {
    #[validate(length(min = 1, max = 255))]
    pub email: String,

    /// 6-digit passcode from the login email
    #[validate(length(min = 1, max = 16))]
    pub otp: String,
}
