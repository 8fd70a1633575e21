//! Error types for the todo API client.
//!
//! `NotFound` and `Validation` get dedicated variants because the service
//! distinguishes "nothing was deleted" from "the request was malformed".
//! Other non-2xx responses land in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: no todo has the requested id.
    #[error("resource not found")]
    NotFound,

    /// The server returned 422: the body or path was rejected.
    #[error("request rejected: {body}")]
    Validation { body: String },

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
