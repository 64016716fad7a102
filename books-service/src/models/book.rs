use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
}

impl Book {
    pub fn new(id: u32, title: &str, author: &str, publication_year: i32, genre: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            genre: genre.to_string(),
        }
    }
}

/// The fixed collection every catalog starts from, in display order.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "To Kill a Mockingbird", "Harper Lee", 1960, "Southern Gothic"),
        Book::new(2, "1984", "George Orwell", 1949, "Dystopian Fiction"),
        Book::new(3, "Pride and Prejudice", "Jane Austen", 1813, "Romantic Novel"),
        Book::new(4, "The Great Gatsby", "F. Scott Fitzgerald", 1925, "American Literature"),
        Book::new(5, "The Hunger Games", "Suzanne Collins", 2008, "Young Adult Dystopian"),
    ]
}
