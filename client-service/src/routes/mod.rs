pub mod books;
pub mod genre;
pub mod health;
pub mod newest;
pub mod search;

use crate::services::books_api::BooksApi;
use crate::templates;
use axum::{routing::get, Router};
use minijinja::Environment;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use books::filtered_books;
use genre::books_by_genre;
use health::{health_check, home};
use newest::newest_book;
use search::search_page;

pub type Upstream = Arc<dyn BooksApi + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub books_api: Upstream,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(books_api: Upstream) -> Result<Self, minijinja::Error> {
        Ok(Self {
            books_api,
            templates: Arc::new(templates::environment()?),
        })
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/status", get(health_check))
        .route("/books/genre", get(books_by_genre))
        .route("/newest-book", get(newest_book))
        .route("/books", get(filtered_books))
        .route("/search", get(search_page))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
