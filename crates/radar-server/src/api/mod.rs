//! Release HTTP API.
//!
//! - `POST /releases`, `GET /releases`, `GET /releases/:version`
//! - `GET /timeline`
//! - `GET /analysis/:version`
//!
//! Handlers return `ApiResult`; every `RadarError` is rendered as
//! `{ "error": CODE, "message": text }` with the matching status code.

pub mod analysis;
pub mod releases;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use radar_core::error::{ClientCode, RadarError};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// HTTP wrapper around `RadarError`.
#[derive(Debug)]
pub struct ApiError(pub RadarError);

impl From<RadarError> for ApiError {
    fn from(e: RadarError) -> Self {
        Self(e)
    }
}

/// Body decode failures are client errors; an oversize body keeps its own code.
pub fn rejection_to_error(rejection: JsonRejection) -> RadarError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        RadarError::PayloadTooLarge
    } else {
        RadarError::Validation(rejection.body_text())
    }
}

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::Validation => StatusCode::BAD_REQUEST,
        ClientCode::Conflict => StatusCode::CONFLICT,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ClientCode::InvalidConfig | ClientCode::UnsupportedVersion | ClientCode::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let body = Json(json!({
            "error": code.as_str(),
            "message": self.0.to_string(),
        }));
        (status_for(code), body).into_response()
    }
}
