//! Application factory
//!
//! Builds the actix-web application around an already wired [`AppState`],
//! so that the binary and the integration tests serve the same routes.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::ContentType;
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use frcc_core::repositories::UserRepository;
use frcc_core::services::messaging::JobQueue;

use crate::handlers::ApiError;
use crate::middleware::create_cors;
use crate::routes::auth::{confirm, login, register, verify_otp, AppState};
use crate::routes::health::health_check;

/// Create and configure the application with all dependencies
pub fn create_app<U, Q>(
    app_state: web::Data<AppState<U, Q>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + ?Sized + 'static,
    Q: JobQueue + ?Sized + 'static,
{
    // Undecodable bodies get the same plain text 400 as every other failure
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());
    let form_config = web::FormConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(form_config)
        .wrap(create_cors())
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .route("/register", web::post().to(register::<U, Q>))
        .route("/register/confirm", web::post().to(confirm::<U, Q>))
        .route("/login", web::post().to(login::<U, Q>))
        .route("/otp", web::post().to(verify_otp::<U, Q>))
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body("Not Found")
}
