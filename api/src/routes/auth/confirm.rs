use actix_web::{web, HttpResponse};
use validator::Validate;

use frcc_core::repositories::UserRepository;
use frcc_core::services::messaging::JobQueue;

use crate::dto::ConfirmForm;
use crate::handlers::ApiError;

use super::AppState;

/// Handler for POST /register/confirm
///
/// Takes the form-encoded `token` from the confirmation link. A token can be
/// redeemed once.
pub async fn confirm<U, Q>(
    state: web::Data<AppState<U, Q>>,
    form: web::Form<ConfirmForm>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + ?Sized + 'static,
    Q: JobQueue + ?Sized + 'static,
{
    let form = form.into_inner();
    form.validate()?;

    state.auth_service.confirm(&form.token).await?;

    Ok(HttpResponse::Created().json(true))
}
