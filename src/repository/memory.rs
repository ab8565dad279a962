//! In-memory book store for development and tests

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{
    error::AppResult,
    models::book::{Book, BookId, BookPayload},
};

#[derive(Default)]
pub struct InMemoryBookStore {
    books: RwLock<HashMap<BookId, Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &BookId) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn insert(&self, book: &Book) -> AppResult<()> {
        self.books.write().await.insert(book.id, book.clone());
        Ok(())
    }

    async fn update(&self, id: &BookId, payload: &BookPayload) -> AppResult<bool> {
        let mut books = self.books.write().await;
        match books.get_mut(id) {
            Some(book) => {
                book.title = payload.title.clone();
                book.author = payload.author.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &BookId) -> AppResult<bool> {
        Ok(self.books.write().await.remove(id).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str) -> Book {
        Book::new(BookId::generate(), BookPayload::new(title, author))
    }

    #[tokio::test]
    async fn test_insert_get_delete() {
        let store = InMemoryBookStore::new();
        let dune = book("Dune", "Herbert");

        store.insert(&dune).await.unwrap();
        assert_eq!(store.get(&dune.id).await.unwrap(), Some(dune.clone()));

        assert!(store.delete(&dune.id).await.unwrap());
        assert!(!store.delete(&dune.id).await.unwrap());
        assert_eq!(store.get(&dune.id).await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_reports_match() {
        let store = InMemoryBookStore::new();
        let dune = book("Dune", "Herbert");
        store.insert(&dune).await.unwrap();

        let payload = BookPayload::new("Dune Messiah", "Frank Herbert");
        assert!(store.update(&dune.id, &payload).await.unwrap());
        assert!(!store.update(&BookId::generate(), &payload).await.unwrap());

        let stored = store.get(&dune.id).await.unwrap().unwrap();
        assert_eq!(stored.id, dune.id);
        assert_eq!(stored.title, "Dune Messiah");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_returns_everything() {
        let store = InMemoryBookStore::new();
        assert!(store.list().await.unwrap().is_empty());

        store.insert(&book("Dune", "Herbert")).await.unwrap();
        store.insert(&book("Solaris", "Lem")).await.unwrap();

        let mut titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["Dune", "Solaris"]);
    }
}
