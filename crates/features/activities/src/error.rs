use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mhs_kernel::server::ApiStateError;
use serde::Serialize;
use std::borrow::Cow;
use tracing::error;
use utoipa::ToSchema;

/// Activity directory error type.
///
/// The display strings double as the HTTP `detail` payloads, so they must not
/// drift from the documented API surface.
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Already signed up for this activity")]
    AlreadySignedUp,
    #[error("Activity is full")]
    Full,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Email must be from mergington.edu domain")]
    WrongDomain,
    #[error("Internal error: {0}")]
    Internal(Cow<'static, str>),
}

/// Error body shape shared by every failure response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Human-readable failure reason.
    pub detail: String,
}

impl ActivityError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp | Self::Full | Self::InvalidEmail | Self::WrongDomain => {
                StatusCode::BAD_REQUEST
            },
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let detail = match &self {
            Self::Internal(message) => {
                error!(%message, "Internal error while serving activity request");
                "Internal server error".to_owned()
            },
            other => other.to_string(),
        };

        (self.status(), Json(ErrorDetail { detail })).into_response()
    }
}

impl From<ApiStateError> for ActivityError {
    fn from(err: ApiStateError) -> Self {
        Self::Internal(err.to_string().into())
    }
}
