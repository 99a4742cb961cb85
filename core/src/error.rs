//! Error types for the Mars API client.
//!
//! # Design
//! A non-2xx status is not an error: JSON endpoints report it as
//! `Outcome::Absent` and the session endpoints pass the body through. What
//! remains are the failures a caller cannot reasonably expect, so the
//! taxonomy stays shallow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The exchange never completed: connection refused, DNS failure, I/O
    /// error while reading the body.
    #[error("transport failed: {0}")]
    Transport(String),

    /// A successful response carried a body that is not the expected JSON.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
