//! Error types for the Zencoder API client.
//!
//! # Design
//! Configuration problems and transport problems get separate variants
//! because only the latter are worth retrying by the caller (this crate
//! never retries on its own). `ApiError` carries the raw response body
//! verbatim — Zencoder's error payload is not parsed further. Response
//! bodies that fail to parse surface as `ResponseParseError` instead of
//! an empty mapping.

use std::fmt;

/// Errors returned by [`ZencoderClient`](crate::ZencoderClient).
#[derive(Debug)]
pub enum ZencoderError {
    /// Rejected at construction time: missing API key or unsupported
    /// response type. Not retryable; the configuration must be fixed.
    InvalidConfiguration(String),

    /// The job payload could not be serialized to JSON.
    SerializationError(String),

    /// Network-level failure sending the request, including timeout.
    TransportError(String),

    /// The server answered with status >= 400. `body` is the raw
    /// response text.
    ApiError { status: u16, body: String },

    /// The response body could not be parsed as a JSON object.
    ResponseParseError(String),
}

impl fmt::Display for ZencoderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZencoderError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            ZencoderError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ZencoderError::TransportError(msg) => {
                write!(f, "transport failed: {msg}")
            }
            ZencoderError::ApiError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ZencoderError::ResponseParseError(msg) => {
                write!(f, "response parse failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ZencoderError {}
