use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::NewsError;

/// JSON body of every error returned by the `/api` routes.
#[derive(Debug, Serialize)]
pub struct JsonError {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    News(#[from] NewsError),
    #[error("missing query parameter `{0}`")]
    MissingParam(&'static str),
    #[error(transparent)]
    BadQuery(#[from] QueryRejection),
    #[error("price lookups are not enabled")]
    PriceDisabled,
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParam(_)
            | ApiError::BadQuery(_)
            | ApiError::News(NewsError::InvalidSymbol(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PriceDisabled => StatusCode::NOT_FOUND,
            ApiError::News(NewsError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::News(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Upstream details (URLs, provider messages) stay in the logs.
    fn public_message(&self) -> String {
        match self {
            ApiError::News(e) if e.is_upstream() => "upstream news provider error".to_string(),
            ApiError::News(NewsError::Config(_)) => "server is misconfigured".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.as_status_code();
        if status.is_server_error() {
            error!("api error {self}");
        } else {
            warn!("rejected request: {self}");
        }
        let body = JsonError {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
