use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use mergington::data::ErrorDetail;
use mergington::errors::ActivityError;
use mergington::log;

/// Errors a handler can return, rendered as `{"detail": ...}` with a matching status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Activity(#[from] ActivityError),
    #[error("{0}")]
    InvalidQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Activity(ActivityError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Activity(
                ActivityError::AlreadySignedUp { .. } | ActivityError::NotSignedUp { .. },
            ) => StatusCode::BAD_REQUEST,
            Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::warn!(status = status.as_u16(), "Request rejected: {}", self);

        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_errors_map_to_statuses() {
        assert_eq!(
            ApiError::from(ActivityError::not_found("x")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ActivityError::AlreadySignedUp {
                activity: "x".to_string(),
                email: "e".to_string(),
            })
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ActivityError::NotSignedUp {
                activity: "x".to_string(),
                email: "e".to_string(),
            })
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidQuery("missing field `email`".to_string()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn transparent_message_is_the_detail() {
        let err = ApiError::from(ActivityError::not_found("NoSuchClub"));
        assert_eq!(err.to_string(), "Activity not found");
    }
}
