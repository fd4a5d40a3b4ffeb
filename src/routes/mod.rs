// Route exports
pub mod compatibility;
pub mod filters;
pub mod matches;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use std::fmt;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::error::ZoMateError;
use crate::models::ErrorResponse;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(compatibility::configure)
            .configure(filters::configure)
            .configure(matches::configure),
    );
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}

impl error::ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

impl From<&ZoMateError> for ErrorResponse {
    fn from(err: &ZoMateError) -> Self {
        let status_code = match err {
            ZoMateError::InvalidInput(_) | ZoMateError::Serialization(_) => 400,
            ZoMateError::Config(_) => 500,
        };
        ErrorResponse {
            error: err.kind().to_string(),
            message: err.to_string(),
            status_code,
        }
    }
}

/// Render a crate error as a JSON error body
pub(crate) fn error_response(err: &ZoMateError) -> HttpResponse {
    error::ResponseError::error_response(&ErrorResponse::from(err))
}

pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Handle JSON payload errors, including profiles with unknown signs
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}
