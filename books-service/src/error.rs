use crate::models::responses::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Book not found")]
    BookNotFound(u32),
    #[error("Book not found")]
    InvalidBookId(String),
    #[error("No books found for this genre")]
    GenreNotFound(String),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
}
