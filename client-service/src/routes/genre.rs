use crate::error::ApiError;
use crate::models::responses::GenreBooksResponse;
use crate::routes::AppState;
use crate::services::books_api::BooksApiError;
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::{error, info};

pub const GENRE_USAGE: &str = "/books/genre?genre=<genre_name>";

#[derive(Debug, Deserialize)]
pub struct GenreParams {
    pub genre: Option<String>,
}

pub async fn books_by_genre(
    State(state): State<AppState>,
    Query(params): Query<GenreParams>,
) -> Result<Json<GenreBooksResponse>, ApiError> {
    let genre = params
        .genre
        .filter(|genre| !genre.is_empty())
        .ok_or(ApiError::MissingParameter {
            label: "Genre",
            usage: GENRE_USAGE,
        })?;

    let books = state
        .books_api
        .fetch_books_by_genre(&genre)
        .await
        .map_err(|e| {
            match e {
                BooksApiError::NotFound(_) => info!("No books for genre {:?}", genre),
                ref other => error!("Genre lookup for {:?} failed: {}", genre, other),
            }
            ApiError::from(e)
        })?;

    Ok(Json(GenreBooksResponse {
        message: format!("Successfully retrieved books in genre: {}", genre),
        count: books.len(),
        books,
    }))
}
