//! Response envelopes

use serde::Serialize;
use utoipa::ToSchema;

use super::book::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// Envelope without payload, used for failures and bare confirmations
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            message: message.into(),
        }
    }
}

/// Successful envelope carrying data
#[derive(Debug, Serialize, ToSchema)]
#[aliases(BookResponse = ApiResponse<Book>, BookListResponse = ApiResponse<Vec<Book>>)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data,
        }
    }
}
