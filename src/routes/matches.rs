use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::summarize;
use crate::models::{RankMatchesRequest, RankMatchesResponse};
use crate::routes::{error_response, validation_failed, AppState};

/// Configure match-ranking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/matches/rank", web::post().to(rank_matches));
}

/// Rank a candidate deck for a viewer
///
/// Candidates are filtered as raw records; a record with an unrecognized
/// sign only drops out when it fails a filter or cannot be scored.
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "viewer": { "id": "me", "name": "Me", "age": 29, "sunSign": "Leo" },
///   "candidates": [{ "id": "a", "name": "A", "age": 28, "sunSign": "Aries" }],
///   "filters": { "elements": ["Fire"] },
///   "limit": 20
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return validation_failed(errors);
    }
    if let Err(e) = req.filters.validate() {
        return error_response(&e);
    }

    let req = req.into_inner();
    let limit = state.matching.resolve_limit(req.limit);

    tracing::info!(
        "Ranking {} candidates for {}, limit: {}",
        req.candidates.len(),
        req.viewer.id,
        limit
    );

    let result = state
        .matcher
        .rank(&req.viewer, req.candidates, &req.filters, limit);

    let response = RankMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        skipped: result.skipped,
        filter_summary: summarize(&req.filters),
    };

    tracing::info!(
        "Returning {} matches for {} (from {} candidates)",
        response.matches.len(),
        req.viewer.id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}
