use actix_web::{web, HttpResponse};
use validator::Validate;

use frcc_core::repositories::UserRepository;
use frcc_core::services::messaging::JobQueue;
use frcc_shared::masking::mask_email;

use crate::dto::LoginRequest;
use crate::handlers::ApiError;

use super::AppState;

/// Handler for POST /login
///
/// Issues a fresh passcode for a confirmed account and queues the email
/// delivering it. Answers `200 OK` with the JSON body `true`.
pub async fn login<U, Q>(
    state: web::Data<AppState<U, Q>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + ?Sized + 'static,
    Q: JobQueue + ?Sized + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    tracing::info!(email = %mask_email(&request.email), "Processing login");

    state.auth_service.login(&request.email).await?;

    Ok(HttpResponse::Ok().json(true))
}
