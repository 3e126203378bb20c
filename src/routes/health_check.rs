use actix_web::HttpResponse;

/// `GET /health_check`
///
/// Liveness probe; never touches the store
pub async fn health_check() -> HttpResponse { HttpResponse::Ok().finish() }
