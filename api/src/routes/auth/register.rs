use actix_web::{web, HttpResponse};
use validator::Validate;

use frcc_core::repositories::UserRepository;
use frcc_core::services::messaging::JobQueue;
use frcc_shared::masking::mask_email;

use crate::dto::RegisterRequest;
use crate::handlers::ApiError;

use super::AppState;

/// Handler for POST /register
///
/// Stores the registrant as unconfirmed and queues the email carrying the
/// confirmation link.
///
/// # Request Body
///
/// ```json
/// {
///     "first_name": "Ada",
///     "last_name": "Lovelace",
///     "email": "ada@example.com",
///     "phone": "+33600000000",
///     "quality": "Speaker",
///     "organization": "Analytical Engines"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the JSON body `true`.
pub async fn register<U, Q>(
    state: web::Data<AppState<U, Q>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + ?Sized + 'static,
    Q: JobQueue + ?Sized + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    tracing::info!(email = %mask_email(&request.email), "Processing registration");

    state.auth_service.register(request.into()).await?;

    Ok(HttpResponse::Created().json(true))
}
