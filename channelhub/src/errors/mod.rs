use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::service::ImportError;

/// Error body of every failed request: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<ImportError> for ApiError {
    fn from(value: ImportError) -> Self {
        let status = match &value {
            ImportError::Format(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ImportError::Fetch(_) => StatusCode::BAD_GATEWAY,
            ImportError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &value {
            ImportError::Join(_) => "internal error".to_owned(),
            _ => value.to_string(),
        };

        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[macro_export]
macro_rules! api_error_with_log {
    ($position:expr) => {
        |e| {
            use log::{error, warn};

            if matches!(e, $crate::service::ImportError::Join(_)) {
                error!("{}: {}", $position, e);
            } else {
                warn!("{}: {}", $position, e);
            }
            $crate::errors::ApiError::from(e)
        }
    };
}

pub use api_error_with_log;
