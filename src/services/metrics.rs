use crate::context::RequestContext;
use crate::error::MetricsError;
use crate::models::book::Book;
use crate::models::responses::MetricsResponse;
use crate::repositories::books::BooksRepository;
use async_trait::async_trait;
use std::sync::Arc;

type Repository = Arc<dyn BooksRepository>;

#[async_trait]
pub trait MetricsService: Send + Sync {
    async fn get_metrics(
        &self,
        ctx: &RequestContext,
        author: &str,
    ) -> Result<MetricsResponse, MetricsError>;
}

pub struct BooksMetricsService {
    repository: Repository,
}

impl BooksMetricsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl MetricsService for BooksMetricsService {
    async fn get_metrics(
        &self,
        ctx: &RequestContext,
        author: &str,
    ) -> Result<MetricsResponse, MetricsError> {
        let books = self.repository.get_all(ctx).await?;
        Ok(compute_metrics(books, author))
    }
}

/// Aggregates a catalog snapshot. The returned `books` is the input, untouched.
pub fn compute_metrics(books: Vec<Book>, author: &str) -> MetricsResponse {
    if books.is_empty() {
        return MetricsResponse::default();
    }

    let mean_units_sold = mean_units_sold(&books);
    let cheapest_book = cheapest_book(&books)
        .map(|book| book.name.clone())
        .unwrap_or_default();
    let books_written_by_author = books_written_by_author(&books, author);

    MetricsResponse {
        books,
        mean_units_sold,
        cheapest_book,
        books_written_by_author,
    }
}

/// Truncating integer mean of `units_sold`; 0 for an empty slice.
pub fn mean_units_sold(books: &[Book]) -> u64 {
    if books.is_empty() {
        return 0;
    }

    let total: u128 = books.iter().map(|book| u128::from(book.units_sold)).sum();
    // The mean never exceeds the largest element, so it fits back into u64.
    (total / books.len() as u128) as u64
}

/// First book with the lowest price, in catalog order.
pub fn cheapest_book(books: &[Book]) -> Option<&Book> {
    books.iter().min_by_key(|book| book.price)
}

/// Case-sensitive, exact match on the author field.
pub fn books_written_by_author(books: &[Book], author: &str) -> u64 {
    books.iter().filter(|book| book.author == author).count() as u64
}
