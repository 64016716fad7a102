use crate::models::book::Book;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub checked_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailableEndpoints {
    pub get_all_books: String,
    pub get_book_by_id: String,
    pub get_books_by_genre: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
    pub available_endpoints: AvailableEndpoints,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookResponse {
    pub book: Book,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
