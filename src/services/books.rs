//! Book catalog service

use std::{future::Future, sync::Arc, time::Duration};

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, BookPayload},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
    operation_timeout: Duration,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>, operation_timeout: Duration) -> Self {
        Self {
            store,
            operation_timeout,
        }
    }

    /// List all books. An empty catalog is not an error.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.bounded("Failed to retrieve books", self.store.list())
            .await
    }

    pub async fn get_by_id(&self, id: &BookId) -> AppResult<Book> {
        self.bounded("Failed to retrieve book", self.store.get(id))
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Validate, assign a new identifier and persist
    pub async fn create(&self, payload: BookPayload) -> AppResult<Book> {
        validate(&payload)?;

        let book = Book::new(BookId::generate(), payload);
        self.bounded("Failed to create book", self.store.insert(&book))
            .await?;

        tracing::info!(id = %book.id, "Created book");
        Ok(book)
    }

    /// Replace title and author of an existing book; the id never changes
    pub async fn update(&self, id: &BookId, payload: BookPayload) -> AppResult<Book> {
        validate(&payload)?;

        let matched = self
            .bounded("Failed to update book", self.store.update(id, &payload))
            .await?;
        if !matched {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        tracing::info!(id = %id, "Updated book");
        Ok(Book::new(*id, payload))
    }

    pub async fn delete(&self, id: &BookId) -> AppResult<()> {
        let deleted = self
            .bounded("Failed to delete book", self.store.delete(id))
            .await?;
        if !deleted {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        tracing::info!(id = %id, "Deleted book");
        Ok(())
    }

    /// Storage liveness, used by the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        self.bounded("Storage is not reachable", self.store.ping())
            .await
    }

    /// Run one storage operation under the per-request timeout. Driver
    /// failures and timeouts both surface as `StorageUnavailable` carrying
    /// `failure` as the client-facing message.
    async fn bounded<T, F>(&self, failure: &str, operation: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        match tokio::time::timeout(self.operation_timeout, operation).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!("{}: {}", failure, e);
                Err(AppError::StorageUnavailable(failure.to_string()))
            }
            Err(_) => {
                tracing::error!(
                    timeout_ms = self.operation_timeout.as_millis() as u64,
                    "{}: storage operation timed out",
                    failure
                );
                Err(AppError::StorageUnavailable(failure.to_string()))
            }
        }
    }
}

fn validate(payload: &BookPayload) -> AppResult<()> {
    payload.validate().map_err(|e| {
        tracing::debug!("Book payload rejected: {}", e);
        AppError::MissingFields("Missing required fields: title or author".to_string())
    })
}
