use actix_web::{web, HttpResponse, Responder};

use crate::core::{label_for, ZodiacSign};
use crate::models::{
    CompatibilityRequest, ErrorResponse, HealthResponse, LabelResponse, SignInfoResponse,
};
use crate::routes::{error_response, AppState};

/// Configure scoring and reference-data routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility", web::post().to(score_pair))
        .route("/signs/{sign}", web::get().to(sign_info))
        .route("/labels/{score}", web::get().to(score_label));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one pair of profiles
///
/// POST /api/v1/compatibility
///
/// Request body:
/// ```json
/// {
///   "profileA": { "id": "a", "name": "A", "age": 28, "sunSign": "Leo" },
///   "profileB": { "id": "b", "name": "B", "age": 30, "sunSign": "Aries" }
/// }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    let result = state.matcher.score(&req.profile_a, &req.profile_b);

    tracing::info!(
        "Compatibility {} -> {}: {}",
        req.profile_a.id,
        req.profile_b.id,
        result.overall
    );

    HttpResponse::Ok().json(result)
}

/// Element and horoscope-compatible signs for one sign
///
/// GET /api/v1/signs/{sign}
async fn sign_info(path: web::Path<String>) -> impl Responder {
    let sign = match path.parse::<ZodiacSign>() {
        Ok(sign) => sign,
        Err(e) => {
            tracing::debug!("Rejected sign lookup: {}", e);
            return error_response(&e);
        }
    };

    HttpResponse::Ok().json(SignInfoResponse {
        sign,
        element: sign.element(),
        compatible_signs: sign.compatible_signs().to_vec(),
    })
}

/// Qualitative label for an arbitrary score
///
/// GET /api/v1/labels/{score}
async fn score_label(path: web::Path<u8>) -> impl Responder {
    let score = path.into_inner();
    if score > 100 {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_input".to_string(),
            message: format!("score {} is outside 0-100", score),
            status_code: 400,
        });
    }

    HttpResponse::Ok().json(LabelResponse {
        score,
        label: label_for(score).to_string(),
    })
}
