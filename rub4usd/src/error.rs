use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::api::responses;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("content type must be application/json")]
    UnsupportedMediaType,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unable to get rate: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("expected at least {expected} rate matches on the page, found {found}")]
    RateNotFound { expected: usize, found: usize },
    #[error("unable to parse rate '{0}'")]
    InvalidRate(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Fetch(_) | Error::RateNotFound { .. } | Error::InvalidRate(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("{self}");
        }

        let body = responses::Error {
            error: status.canonical_reason().unwrap_or_default(),
        };

        (status, Json(body)).into_response()
    }
}
