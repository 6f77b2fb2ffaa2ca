use crate::models::book::Book;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub books: Vec<Book>,
    pub mean_units_sold: u64,
    pub cheapest_book: String,
    pub books_written_by_author: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
