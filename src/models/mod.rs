//! Data models for Bookshelf

pub mod book;
pub mod response;

// Re-export commonly used types
pub use book::{Book, BookId, BookIdQuery, BookPayload};
pub use response::{ApiResponse, ResponseStatus, StatusResponse};
