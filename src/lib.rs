//! Bookshelf
//!
//! A small REST JSON API over a MongoDB collection of books.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: &AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository, config.database.operation_timeout());
        Self {
            services: Arc::new(services),
        }
    }
}
