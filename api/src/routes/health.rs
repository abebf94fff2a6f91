use actix_web::HttpResponse;

use frcc_shared::HealthResponse;

/// Service description reported by the health check
pub const SERVICE_DESCRIPTION: &str = "FRCC event registration API";

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::pass(
        env!("CARGO_PKG_VERSION"),
        SERVICE_DESCRIPTION,
    ))
}
