use crate::error::ApiError;
use crate::models::responses::FilteredBooksResponse;
use crate::routes::AppState;
use crate::services::books_api::BookFilters;
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::{error, info};

/// Filter parameters as typed by the caller; forwarded without parsing.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub min_year: Option<String>,
    pub max_year: Option<String>,
    pub author: Option<String>,
}

impl From<FilterParams> for BookFilters {
    fn from(params: FilterParams) -> Self {
        BookFilters::new(params.min_year, params.max_year, params.author)
    }
}

pub async fn filtered_books(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<FilteredBooksResponse>, ApiError> {
    let filters = BookFilters::from(params);
    info!("Filtered search: {:?}", filters);

    let books = state.books_api.fetch_books(&filters).await.map_err(|e| {
        error!("Filtered search failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(FilteredBooksResponse {
        message: "Successfully retrieved filtered books".to_string(),
        filters: filters.applied(),
        count: books.len(),
        books,
    }))
}
