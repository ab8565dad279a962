//! Book model and request types.
//!
//! Identifiers are MongoDB ObjectIds; on the wire they always travel as
//! 24-character hex strings.

use std::{fmt, str::FromStr};

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::AppError;

/// Server-generated book identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BookId(ObjectId);

impl BookId {
    /// Generate a fresh, previously unused identifier
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for BookId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for BookId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| AppError::InvalidId("Invalid ID format".to_string()))
    }
}

impl TryFrom<String> for BookId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BookId> for String {
    fn from(id: BookId) -> Self {
        id.to_hex()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Hex-encoded identifier
    #[schema(value_type = String, example = "6523f1c2a4b5c6d7e8f90123")]
    pub id: BookId,
    #[schema(example = "Dune")]
    pub title: String,
    #[schema(example = "Frank Herbert")]
    pub author: String,
}

impl Book {
    pub fn new(id: BookId, payload: BookPayload) -> Self {
        Self {
            id,
            title: payload.title,
            author: payload.author,
        }
    }
}

/// Create / replace book request.
///
/// Absent and `null` fields decode as empty strings so they are reported
/// as missing rather than as a malformed payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
}

impl BookPayload {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Decode a request body. The content type is not consulted.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            AppError::InvalidPayload("Invalid request payload".to_string())
        })
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `?id=` query parameter shared by the books endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookIdQuery {
    /// Hex-encoded book identifier
    pub id: Option<String>,
}

impl BookIdQuery {
    /// Parse the id when one is required (update, delete)
    pub fn require(&self) -> Result<BookId, AppError> {
        match self.id.as_deref() {
            None | Some("") => Err(AppError::InvalidId("Missing ID parameter".to_string())),
            Some(raw) => raw.parse(),
        }
    }
}
