use crate::models::book::Book;

/// Book with the highest publication year. On ties the earliest book in
/// sequence order wins. `None` for an empty slice.
pub fn newest_book(books: &[Book]) -> Option<&Book> {
    books.iter().reduce(|newest, book| {
        if book.publication_year > newest.publication_year {
            book
        } else {
            newest
        }
    })
}
