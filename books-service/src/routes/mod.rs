pub mod books;
pub mod health;

use crate::services::catalog::Catalog;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use books::{get_book, get_books_by_genre, list_books};
use health::{health_check, home};

pub type SharedCatalog = Arc<Catalog>;

pub fn app(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/status", get(health_check))
        .route("/books", get(list_books))
        .route("/books/:book_id", get(get_book))
        .route("/genre/:genre", get(get_books_by_genre))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}
