use books_service::models::book::Book;
use books_service::services::catalog::{BookFilter, Catalog};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_large_catalog() -> Catalog {
    let books = (1..=5000)
        .map(|i| {
            Book::new(
                i,
                &format!("Test Book {}", i),
                &format!("Test Author {}", i % 50),
                1800 + (i % 220) as i32,
                &format!("Genre {}", i % 12),
            )
        })
        .collect();
    Catalog::new(books)
}

fn benchmark_list_seeded(c: &mut Criterion) {
    let catalog = Catalog::seeded();
    let filter = BookFilter::default();

    c.bench_function("list_seeded", |b| {
        b.iter(|| catalog.list(black_box(&filter)))
    });
}

fn benchmark_list_with_filters(c: &mut Criterion) {
    let catalog = create_large_catalog();
    let filter = BookFilter {
        min_year: Some(1900),
        max_year: Some(1950),
        author: Some("author 2".to_string()),
    };

    c.bench_function("list_with_filters", |b| {
        b.iter(|| catalog.list(black_box(&filter)))
    });
}

fn benchmark_get_by_genre(c: &mut Criterion) {
    let catalog = create_large_catalog();

    c.bench_function("get_by_genre", |b| {
        b.iter(|| catalog.get_by_genre(black_box("genre 7")))
    });
}

criterion_group!(
    benches,
    benchmark_list_seeded,
    benchmark_list_with_filters,
    benchmark_get_by_genre
);
criterion_main!(benches);
