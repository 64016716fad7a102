use crate::error::CatalogError;
use crate::models::book::{seed_books, Book};

/// Conjunctive filter over the catalog. `None` means the filter was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub author: Option<String>,
}

impl BookFilter {
    pub fn is_empty(&self) -> bool {
        self.min_year.is_none() && self.max_year.is_none() && self.author.is_none()
    }

    pub fn matches(&self, book: &Book) -> bool {
        if let Some(min_year) = self.min_year {
            if book.publication_year < min_year {
                return false;
            }
        }

        if let Some(max_year) = self.max_year {
            if book.publication_year > max_year {
                return false;
            }
        }

        if let Some(ref author_filter) = self.author {
            if !book
                .author
                .to_lowercase()
                .contains(&author_filter.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}

/// Immutable in-memory book collection. Built once at startup and shared
/// read-only between request handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Books satisfying every supplied filter, in insertion order.
    pub fn list(&self, filter: &BookFilter) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect()
    }

    pub fn get_by_id(&self, book_id: u32) -> Result<&Book, CatalogError> {
        self.books
            .iter()
            .find(|book| book.id == book_id)
            .ok_or(CatalogError::BookNotFound(book_id))
    }

    /// Case-insensitive exact genre match.
    pub fn get_by_genre(&self, genre: &str) -> Result<Vec<Book>, CatalogError> {
        let wanted = genre.to_lowercase();
        let books: Vec<Book> = self
            .books
            .iter()
            .filter(|book| book.genre.to_lowercase() == wanted)
            .cloned()
            .collect();

        if books.is_empty() {
            return Err(CatalogError::GenreNotFound(genre.to_string()));
        }

        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(books: &[Book]) -> Vec<u32> {
        books.iter().map(|book| book.id).collect()
    }

    #[test]
    fn test_list_without_filters_returns_everything_in_order() {
        let catalog = Catalog::seeded();
        let books = catalog.list(&BookFilter::default());

        assert_eq!(ids(&books), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_min_year_is_inclusive() {
        let catalog = Catalog::seeded();
        let filter = BookFilter {
            min_year: Some(1949),
            ..Default::default()
        };

        assert_eq!(ids(&catalog.list(&filter)), vec![1, 2, 5]);
    }

    #[test]
    fn test_max_year_is_inclusive() {
        let catalog = Catalog::seeded();
        let filter = BookFilter {
            max_year: Some(1925),
            ..Default::default()
        };

        assert_eq!(ids(&catalog.list(&filter)), vec![3, 4]);
    }

    #[test]
    fn test_author_filter_is_case_insensitive_substring() {
        let catalog = Catalog::seeded();
        let filter = BookFilter {
            author: Some("lee".to_string()),
            ..Default::default()
        };

        let books = catalog.list(&filter);
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author, "Harper Lee");

        let filter = BookFilter {
            author: Some("ORWELL".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.list(&filter)), vec![2]);
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let catalog = Catalog::seeded();
        let combined = BookFilter {
            min_year: Some(1900),
            max_year: Some(1960),
            author: Some("e".to_string()),
        };

        let min_only = BookFilter {
            min_year: Some(1900),
            ..Default::default()
        };
        let max_only = BookFilter {
            max_year: Some(1960),
            ..Default::default()
        };
        let author_only = BookFilter {
            author: Some("e".to_string()),
            ..Default::default()
        };

        let sequential: Vec<Book> = catalog
            .list(&min_only)
            .into_iter()
            .filter(|book| max_only.matches(book))
            .filter(|book| author_only.matches(book))
            .collect();

        assert_eq!(catalog.list(&combined), sequential);
        assert_eq!(ids(&sequential), vec![1, 2, 4]);
    }

    #[test]
    fn test_filtered_result_is_ordered_subset() {
        let catalog = Catalog::seeded();
        let all = catalog.list(&BookFilter::default());
        let filters = [
            BookFilter {
                min_year: Some(1800),
                max_year: Some(2000),
                author: None,
            },
            BookFilter {
                author: Some("a".to_string()),
                ..Default::default()
            },
            BookFilter {
                min_year: Some(3000),
                ..Default::default()
            },
        ];

        for filter in &filters {
            let subset = catalog.list(filter);
            let positions: Vec<usize> = subset
                .iter()
                .map(|book| all.iter().position(|b| b == book).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_zero_year_is_a_real_filter() {
        let catalog = Catalog::new(vec![
            Book::new(1, "Ancient", "Anon", -500, "History"),
            Book::new(2, "Modern", "Someone", 1999, "History"),
        ]);
        let filter = BookFilter {
            min_year: Some(0),
            ..Default::default()
        };

        assert_eq!(ids(&catalog.list(&filter)), vec![2]);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let catalog = Catalog::seeded();
        let filter = BookFilter {
            min_year: Some(2010),
            ..Default::default()
        };

        assert!(catalog.list(&filter).is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seeded();

        assert_eq!(catalog.get_by_id(3).unwrap().title, "Pride and Prejudice");
        assert!(matches!(
            catalog.get_by_id(99),
            Err(CatalogError::BookNotFound(99))
        ));
    }

    #[test]
    fn test_genre_is_case_insensitive_and_exact() {
        let catalog = Catalog::seeded();

        let books = catalog.get_by_genre("dystopian fiction").unwrap();
        assert_eq!(ids(&books), vec![2]);

        assert!(matches!(
            catalog.get_by_genre("dystopian"),
            Err(CatalogError::GenreNotFound(_))
        ));
    }

    #[test]
    fn test_filter_is_empty() {
        assert!(BookFilter::default().is_empty());
        assert!(!BookFilter {
            max_year: Some(0),
            ..Default::default()
        }
        .is_empty());
    }
}
