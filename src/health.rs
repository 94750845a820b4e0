use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No storage access
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
///
/// Topic storage is in-process, so there is no dependency left to check;
/// the probe exists so deployments can keep a uniform check across services.
#[get("/ready")]
pub async fn readiness() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}
