use serde::{Deserialize, Serialize};

/// A book as returned by the books service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
}

/// `{"books": [...]}` body shared by the books service list endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct BooksEnvelope {
    pub books: Vec<Book>,
}
