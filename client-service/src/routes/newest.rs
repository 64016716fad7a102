use crate::error::ApiError;
use crate::models::responses::NewestBookResponse;
use crate::routes::AppState;
use crate::services::books_api::BookFilters;
use crate::services::newest;
use axum::{extract::State, response::Json};
use tracing::{error, warn};

pub async fn newest_book(
    State(state): State<AppState>,
) -> Result<Json<NewestBookResponse>, ApiError> {
    let books = state
        .books_api
        .fetch_books(&BookFilters::default())
        .await
        .map_err(|e| {
            error!("Fetching books for newest lookup failed: {}", e);
            ApiError::from(e)
        })?;

    let book = newest::newest_book(&books).cloned().ok_or_else(|| {
        warn!("Books service returned an empty catalog");
        ApiError::NotFound("No books available".to_string())
    })?;

    Ok(Json(NewestBookResponse {
        message: "Successfully retrieved newest book".to_string(),
        book,
    }))
}
