use crate::context::RequestContext;
use crate::error::RepositoryError;
use crate::models::book::Book;
use crate::providers::books::BooksProvider;
use async_trait::async_trait;
use std::sync::Arc;

type Provider = Arc<dyn BooksProvider>;

#[async_trait]
pub trait BooksRepository: Send + Sync {
    async fn get_all(&self, ctx: &RequestContext) -> Result<Vec<Book>, RepositoryError>;
}

/// Repository backed directly by a [`BooksProvider`].
///
/// Providers already swallow their failures, so this never returns `Err`.
pub struct ProviderBooksRepository {
    provider: Provider,
}

impl ProviderBooksRepository {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl BooksRepository for ProviderBooksRepository {
    async fn get_all(&self, ctx: &RequestContext) -> Result<Vec<Book>, RepositoryError> {
        Ok(self.provider.get_books(ctx).await)
    }
}
