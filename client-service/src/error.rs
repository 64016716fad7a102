use crate::models::responses::ErrorResponse;
use crate::services::books_api::BooksApiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{label} parameter is required")]
    MissingParameter {
        label: &'static str,
        usage: &'static str,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("Failed to retrieve books")]
    Upstream { status_code: u16 },
    #[error("Failed to retrieve books")]
    InvalidUpstreamResponse(String),
    #[error("Service unavailable")]
    Unavailable(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } | ApiError::InvalidUpstreamResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// One-line message for the HTML search page.
    pub fn page_message(&self) -> String {
        match self {
            ApiError::Upstream { status_code } => {
                format!("{} (books service returned status {})", self, status_code)
            }
            ApiError::InvalidUpstreamResponse(details) | ApiError::Unavailable(details) => {
                format!("{}: {}", self, details)
            }
            _ => self.to_string(),
        }
    }

    fn body(&self) -> ErrorResponse {
        let mut body = ErrorResponse {
            error: self.to_string(),
            ..Default::default()
        };
        match self {
            ApiError::MissingParameter { usage, .. } => body.usage = Some(usage.to_string()),
            ApiError::Upstream { status_code } => body.status_code = Some(*status_code),
            ApiError::InvalidUpstreamResponse(details) | ApiError::Unavailable(details) => {
                body.details = Some(details.clone())
            }
            ApiError::NotFound(_) => {}
        }
        body
    }
}

impl From<BooksApiError> for ApiError {
    fn from(e: BooksApiError) -> Self {
        match e {
            BooksApiError::Transport(details) => ApiError::Unavailable(details),
            BooksApiError::Status(status_code) => ApiError::Upstream { status_code },
            BooksApiError::NotFound(genre) => {
                ApiError::NotFound(format!("No books found for genre: {}", genre))
            }
            BooksApiError::Decode(details) => ApiError::InvalidUpstreamResponse(details),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_errors_map_to_taxonomy() {
        assert_eq!(
            ApiError::from(BooksApiError::Transport("connection refused".into())),
            ApiError::Unavailable("connection refused".into())
        );
        assert_eq!(
            ApiError::from(BooksApiError::Status(502)),
            ApiError::Upstream { status_code: 502 }
        );
        assert_eq!(
            ApiError::from(BooksApiError::Decode("expected value".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_genre_not_found_names_the_genre() {
        let err = ApiError::from(BooksApiError::NotFound("Poetry".into()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "No books found for genre: Poetry");
    }

    #[test]
    fn test_status_codes() {
        let missing = ApiError::MissingParameter {
            label: "Genre",
            usage: "/books/genre?genre=<genre_name>",
        };
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.to_string(), "Genre parameter is required");
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Unavailable("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_body_carries_detail_fields() {
        let body = ApiError::Upstream { status_code: 418 }.body();
        assert_eq!(body.error, "Failed to retrieve books");
        assert_eq!(body.status_code, Some(418));
        assert!(body.details.is_none());

        let body = ApiError::Unavailable("timed out".into()).body();
        assert_eq!(body.error, "Service unavailable");
        assert_eq!(body.details.as_deref(), Some("timed out"));
    }

    #[test]
    fn test_page_message_includes_details() {
        let message = ApiError::Unavailable("connection refused".into()).page_message();
        assert_eq!(message, "Service unavailable: connection refused");
    }
}
