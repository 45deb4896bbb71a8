//! Error type for remote calls against the items API.
//!
//! # Design
//! The synchronizer treats every failure the same way (log it, leave the UI
//! alone), so there is a single error type. The variants only exist to make
//! the diagnostic log useful.

use thiserror::Error;

/// Any failure during a remote call.
#[derive(Debug, Error)]
pub enum RequestFailure {
    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
