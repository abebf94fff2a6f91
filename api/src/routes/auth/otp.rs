use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use frcc_core::domain::entities::session::SessionToken;
use frcc_core::repositories::UserRepository;
use frcc_core::services::messaging::JobQueue;
use frcc_shared::SessionConfig;

use crate::dto::OtpRequest;
use crate::handlers::ApiError;

use super::AppState;

/// Handler for POST /otp
///
/// Checks the passcode sent by `/login`. On success the signed session token
/// is returned in the session cookie and the body is the JSON value `true`.
pub async fn verify_otp<U, Q>(
    state: web::Data<AppState<U, Q>>,
    request: web::Json<OtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + ?Sized + 'static,
    Q: JobQueue + ?Sized + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let session = state
        .auth_service
        .verify_otp(&request.email, &request.otp)
        .await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&state.session, session))
        .json(true))
}

/// Builds the cookie carrying a session token
pub fn session_cookie(config: &SessionConfig, session: SessionToken) -> Cookie<'static> {
    let max_age = (session.expires_at - Utc::now()).num_seconds().max(0);

    Cookie::build(config.cookie_name.clone(), session.token)
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site))
        .max_age(time::Duration::seconds(max_age))
        .finish()
}

fn parse_same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}
