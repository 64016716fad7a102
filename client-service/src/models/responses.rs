use crate::models::book::Book;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub checked_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Endpoints {
    pub get_books_by_genre: String,
    pub get_newest_book: String,
    pub get_filtered_books: String,
    pub search_page: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenreBooksResponse {
    pub message: String,
    pub count: usize,
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewestBookResponse {
    pub message: String,
    pub book: Book,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilteredBooksResponse {
    pub message: String,
    pub filters: BTreeMap<String, String>,
    pub count: usize,
    pub books: Vec<Book>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
