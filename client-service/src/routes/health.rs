use crate::models::responses::{Endpoints, HealthResponse, HomeResponse};
use axum::response::Json;
use chrono::Utc;

pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the Books Client Service".to_string(),
        endpoints: Endpoints {
            get_books_by_genre: "/books/genre?genre=<genre_name>".to_string(),
            get_newest_book: "/newest-book".to_string(),
            get_filtered_books: "/books?min_year=<year>&max_year=<year>&author=<name>".to_string(),
            search_page: "/search".to_string(),
        },
    })
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "client-service".to_string(),
        status: "running".to_string(),
        checked_at: Utc::now().to_rfc3339(),
    })
}
