//! Repository layer for database operations

pub mod books;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{DatabaseConfig, StorageBackend},
    error::AppResult,
    models::book::{Book, BookId, BookPayload},
};

pub use books::MongoBookStore;
pub use memory::InMemoryBookStore;

/// Storage operations backing the books API.
///
/// Implementations are shared across in-flight requests and must do their
/// own synchronization.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetch every stored book, in no particular order
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get(&self, id: &BookId) -> AppResult<Option<Book>>;

    async fn insert(&self, book: &Book) -> AppResult<()>;

    /// Replace title and author. Returns `false` when no document matched.
    async fn update(&self, id: &BookId, payload: &BookPayload) -> AppResult<bool>;

    /// Returns `false` when no document was removed.
    async fn delete(&self, id: &BookId) -> AppResult<bool>;

    /// Liveness check against the underlying storage
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding the shared store handle
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookStore>,
}

impl Repository {
    pub fn new(books: Arc<dyn BookStore>) -> Self {
        Self { books }
    }

    /// Open the configured backend. For MongoDB this connects and pings
    /// once; any failure is returned to the caller.
    pub async fn open(config: &DatabaseConfig) -> AppResult<Self> {
        let books: Arc<dyn BookStore> = match config.backend {
            StorageBackend::Mongodb => Arc::new(MongoBookStore::connect(config).await?),
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory book store, data will not persist");
                Arc::new(InMemoryBookStore::new())
            }
        };
        Ok(Self::new(books))
    }
}
