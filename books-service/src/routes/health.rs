use crate::models::responses::{AvailableEndpoints, HealthResponse, HomeResponse};
use axum::response::Json;
use chrono::Utc;

pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the Books API".to_string(),
        available_endpoints: AvailableEndpoints {
            get_all_books: "/books".to_string(),
            get_book_by_id: "/books/<id>".to_string(),
            get_books_by_genre: "/genre/<genre>".to_string(),
        },
    })
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "books-service".to_string(),
        status: "running".to_string(),
        checked_at: Utc::now().to_rfc3339(),
    })
}
