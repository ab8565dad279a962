//! MongoDB-backed book store

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ClientOptions,
    Client, Collection, Database,
};
use serde::{Deserialize, Serialize};
use tokio_stream::StreamExt;

use super::BookStore;
use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
    models::book::{Book, BookId, BookPayload},
};

/// Persisted shape of a book document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    author: String,
}

impl From<BookDocument> for Book {
    fn from(doc: BookDocument) -> Self {
        Self {
            id: doc.id.into(),
            title: doc.title,
            author: doc.author,
        }
    }
}

impl From<&Book> for BookDocument {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.object_id(),
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}

#[derive(Clone)]
pub struct MongoBookStore {
    database: Database,
    collection: Collection<BookDocument>,
}

impl MongoBookStore {
    /// Connect to MongoDB and verify the server answers a ping within the
    /// configured connect timeout.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let timeout = config.connect_timeout();

        let mut options = ClientOptions::parse(&config.url).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        tracing::info!("Attempting to connect to MongoDB...");
        let client = Client::with_options(options)?;
        let database = client.database(&config.name);

        tracing::info!("Pinging MongoDB server...");
        tokio::time::timeout(timeout, database.run_command(doc! { "ping": 1 }, None))
            .await
            .map_err(|_| {
                AppError::StorageUnavailable(format!(
                    "MongoDB did not answer ping within {}s",
                    timeout.as_secs()
                ))
            })??;

        let collection = database.collection::<BookDocument>(&config.collection);
        tracing::info!(
            database = %config.name,
            collection = %config.collection,
            "Book collection initialized"
        );

        Ok(Self {
            database,
            collection,
        })
    }
}

#[async_trait]
impl BookStore for MongoBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let cursor = self.collection.find(doc! {}, None).await?;
        let documents = cursor.collect::<Result<Vec<_>, _>>().await?;
        Ok(documents.into_iter().map(Book::from).collect())
    }

    async fn get(&self, id: &BookId) -> AppResult<Option<Book>> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.object_id() }, None)
            .await?;
        Ok(document.map(Book::from))
    }

    async fn insert(&self, book: &Book) -> AppResult<()> {
        self.collection
            .insert_one(BookDocument::from(book), None)
            .await?;
        Ok(())
    }

    async fn update(&self, id: &BookId, payload: &BookPayload) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id.object_id() },
                doc! { "$set": { "title": payload.title.as_str(), "author": payload.author.as_str() } },
                None,
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &BookId) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() }, None)
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_uses_mongo_id_field() {
        let book = Book::new(
            BookId::generate(),
            BookPayload::new("Dune", "Herbert"),
        );
        let document = mongodb::bson::to_document(&BookDocument::from(&book)).unwrap();

        assert_eq!(document.get_object_id("_id").unwrap(), book.id.object_id());
        assert_eq!(document.get_str("title").unwrap(), "Dune");
        assert!(document.get("id").is_none());

        let back: BookDocument = mongodb::bson::from_document(document).unwrap();
        assert_eq!(Book::from(back), book);
    }
}
