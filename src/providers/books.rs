use crate::config::REQUEST_TIMEOUT;
use crate::context::RequestContext;
use crate::error::FetchError;
use crate::models::book::Book;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{error, info};

/// Source of the full book catalog.
///
/// Implementations never fail outward: any upstream problem is logged and
/// reported as an empty catalog.
#[async_trait]
pub trait BooksProvider: Send + Sync {
    async fn get_books(&self, ctx: &RequestContext) -> Vec<Book>;
}

pub struct HttpBooksProvider {
    base_url: String,
    client: Client,
}

impl HttpBooksProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    async fn fetch(&self) -> Result<Vec<Book>, FetchError> {
        let request = self
            .client
            .get(&self.base_url)
            .build()
            .map_err(FetchError::Request)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(FetchError::Transport)?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        let books = serde_json::from_slice(&body)?;

        Ok(books)
    }
}

#[async_trait]
impl BooksProvider for HttpBooksProvider {
    async fn get_books(&self, ctx: &RequestContext) -> Vec<Book> {
        let result = match ctx.deadline() {
            Some(deadline) => tokio::time::timeout_at(deadline, self.fetch())
                .await
                .unwrap_or(Err(FetchError::DeadlineExceeded)),
            None => self.fetch().await,
        };

        match result {
            Ok(books) => {
                info!("Fetched {} books from {}", books.len(), self.base_url);
                books
            }
            Err(e) => {
                error!("Failed to fetch books from {}: {}", self.base_url, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode as ServerStatus, response::Json, routing::get, Router};
    use tokio::net::TcpListener;
    use tokio::time::Instant;

    fn tolkien_books() -> Vec<Book> {
        vec![
            Book {
                id: 1,
                name: "The Fellowship of the Ring".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                units_sold: 50_000_000,
                price: 20,
            },
            Book {
                id: 2,
                name: "The Two Towers".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                units_sold: 30_000_000,
                price: 20,
            },
            Book {
                id: 3,
                name: "The Return of the King".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                units_sold: 50_000_000,
                price: 20,
            },
        ]
    }

    async fn spawn_upstream(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/books", addr)
    }

    async fn fetch_from(router: Router) -> Vec<Book> {
        let url = spawn_upstream(router).await;
        let provider = HttpBooksProvider::new(url).unwrap();
        provider.get_books(&RequestContext::background()).await
    }

    #[tokio::test]
    async fn test_get_books_success() {
        let expected = tolkien_books();
        let served = expected.clone();
        let router = Router::new().route("/books", get(move || async move { Json(served) }));

        let books = fetch_from(router).await;

        assert_eq!(books, expected);
    }

    #[tokio::test]
    async fn test_get_books_empty_response() {
        let router = Router::new().route("/books", get(|| async { "[]" }));
        assert!(fetch_from(router).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_not_found() {
        let router = Router::new().route("/books", get(|| async { ServerStatus::NOT_FOUND }));
        assert!(fetch_from(router).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_internal_server_error() {
        let router = Router::new().route(
            "/books",
            get(|| async { ServerStatus::INTERNAL_SERVER_ERROR }),
        );
        assert!(fetch_from(router).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_non_200_success_status() {
        let router = Router::new().route(
            "/books",
            get(|| async { (ServerStatus::ACCEPTED, "[]") }),
        );
        assert!(fetch_from(router).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_invalid_json() {
        let router = Router::new().route("/books", get(|| async { "invalid json" }));
        assert!(fetch_from(router).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_truncated_json() {
        let router = Router::new().route("/books", get(|| async { r#"{"id": 1, "name": "Book""# }));
        assert!(fetch_from(router).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_wrong_json_structure() {
        let router = Router::new().route("/books", get(|| async { r#"{"not": "a book array"}"# }));
        assert!(fetch_from(router).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_accepts_camel_case_units_sold() {
        let router = Router::new().route(
            "/books",
            get(|| async {
                r#"[{"id": 4, "name": "Dune", "author": "Frank Herbert", "unitsSold": 1200, "price": 15}]"#
            }),
        );

        let books = fetch_from(router).await;

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].units_sold, 1200);
    }

    #[tokio::test]
    async fn test_get_books_server_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = HttpBooksProvider::new(format!("http://{}/books", addr)).unwrap();
        let books = provider.get_books(&RequestContext::background()).await;

        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_invalid_url() {
        let provider = HttpBooksProvider::new("http://localhost:99999/nonexistent").unwrap();
        let books = provider.get_books(&RequestContext::background()).await;

        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_get_books_context_deadline() {
        let router = Router::new().route(
            "/books",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "[]"
            }),
        );
        let url = spawn_upstream(router).await;
        let provider = HttpBooksProvider::new(url).unwrap();

        let started = Instant::now();
        let ctx = RequestContext::with_timeout(Duration::from_millis(100));
        let books = provider.get_books(&ctx).await;

        assert!(books.is_empty());
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_get_books_client_timeout() {
        let router = Router::new().route(
            "/books",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "[]"
            }),
        );
        let url = spawn_upstream(router).await;
        let provider = HttpBooksProvider::with_timeout(url, Duration::from_millis(100)).unwrap();

        let books = provider.get_books(&RequestContext::background()).await;

        assert!(books.is_empty());
    }
}
