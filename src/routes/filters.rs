use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{apply_filters, default_criteria, summarize};
use crate::models::{
    ApplyFiltersRequest, ApplyFiltersResponse, FilterCriteria, FilterSummaryResponse,
};
use crate::routes::{error_response, validation_failed};

/// Configure filter routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/filters/apply", web::post().to(filter_profiles))
        .route("/filters/default", web::get().to(default_filters))
        .route("/filters/summary", web::post().to(filter_summary));
}

/// Filter a list of profiles
///
/// POST /api/v1/filters/apply
///
/// Request body:
/// ```json
/// {
///   "profiles": [{ "id": "a", "name": "A", "age": 28, "sunSign": "Leo" }],
///   "filters": { "sunSigns": ["Leo"], "ageRange": [21, 35] }
/// }
/// ```
async fn filter_profiles(req: web::Json<ApplyFiltersRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }
    if let Err(e) = req.filters.validate() {
        return error_response(&e);
    }

    let profiles = apply_filters(&req.profiles, &req.filters);

    tracing::info!(
        "Filtered {} profiles to {}",
        req.profiles.len(),
        profiles.len()
    );

    HttpResponse::Ok().json(ApplyFiltersResponse {
        profiles,
        summary: summarize(&req.filters),
    })
}

/// The "no filters" configuration
async fn default_filters() -> impl Responder {
    HttpResponse::Ok().json(default_criteria())
}

/// Describe a filter configuration
async fn filter_summary(req: web::Json<FilterCriteria>) -> impl Responder {
    let criteria = req.into_inner();
    HttpResponse::Ok().json(FilterSummaryResponse {
        summary: summarize(&criteria),
        criteria,
    })
}
