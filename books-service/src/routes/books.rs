use crate::error::CatalogError;
use crate::models::responses::{BookResponse, BooksResponse};
use crate::routes::SharedCatalog;
use crate::services::catalog::BookFilter;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::{info, warn};

/// Raw query string. Values stay text so that empty or malformed numbers
/// fall back to "not supplied" instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct BooksQuery {
    pub min_year: Option<String>,
    pub max_year: Option<String>,
    pub author: Option<String>,
}

impl From<BooksQuery> for BookFilter {
    fn from(query: BooksQuery) -> Self {
        BookFilter {
            min_year: parse_year("min_year", query.min_year.as_deref()),
            max_year: parse_year("max_year", query.max_year.as_deref()),
            author: query.author.filter(|author| !author.is_empty()),
        }
    }
}

fn parse_year(name: &str, raw: Option<&str>) -> Option<i32> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(year) => Some(year),
        Err(_) => {
            warn!("Ignoring non-integer {} filter: {:?}", name, raw);
            None
        }
    }
}

pub async fn list_books(
    State(catalog): State<SharedCatalog>,
    Query(query): Query<BooksQuery>,
) -> Json<BooksResponse> {
    let filter = BookFilter::from(query);
    let books = catalog.list(&filter);

    if !filter.is_empty() {
        info!("Filter {:?} matched {} books", filter, books.len());
    }

    Json(BooksResponse { books })
}

pub async fn get_book(
    State(catalog): State<SharedCatalog>,
    Path(book_id): Path<String>,
) -> Result<Json<BookResponse>, CatalogError> {
    // Mirrors an integer route converter: anything that is not a
    // non-negative integer simply matches no book.
    let book_id: u32 = book_id.parse().map_err(|_| {
        warn!("Rejecting non-numeric book id {:?}", book_id);
        CatalogError::InvalidBookId(book_id.clone())
    })?;

    let book = catalog.get_by_id(book_id)?.clone();
    Ok(Json(BookResponse { book }))
}

pub async fn get_books_by_genre(
    State(catalog): State<SharedCatalog>,
    Path(genre): Path<String>,
) -> Result<Json<BooksResponse>, CatalogError> {
    let books = catalog.get_by_genre(&genre)?;
    info!("Genre {:?} matched {} books", genre, books.len());
    Ok(Json(BooksResponse { books }))
}
