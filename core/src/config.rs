//! Client configuration: connection options and their validation.
//!
//! # Design
//! `ClientOptions` is the caller-facing record with optional fields;
//! `ZencoderClient::new` validates it once and freezes the result. The
//! defaults come from the Zencoder API itself: production jobs endpoint,
//! JSON responses, 30-second deadline.

use std::fmt;

use crate::error::ZencoderError;

/// Zencoder's production jobs endpoint, used when no endpoint is supplied.
pub const DEFAULT_API_ENDPOINT: &str = "https://app.zencoder.com/api/v2/jobs";

/// Timeout applied when none (or a non-positive value) is supplied.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Response content type accepted by the Zencoder API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Json,
    Xml,
}

impl ResponseType {
    /// The exact MIME string sent in the `Content-Type` header.
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseType::Json => "application/json",
            ResponseType::Xml => "application/xml",
        }
    }

    /// Parse a configured content-type string. Only the two values the
    /// API accepts are recognized.
    pub fn parse(s: &str) -> Result<Self, ZencoderError> {
        match s {
            "application/json" => Ok(ResponseType::Json),
            "application/xml" => Ok(ResponseType::Xml),
            other => Err(ZencoderError::InvalidConfiguration(format!(
                "unsupported response type {other:?}: must be application/json or application/xml"
            ))),
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection options for building a [`ZencoderClient`](crate::ZencoderClient).
///
/// Only `api_key` is required. `response_type` is validated against the
/// two content types the API accepts; `timeout_secs` overrides the
/// 30-second default only when positive.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub api_key: String,
    pub api_endpoint: Option<String>,
    pub response_type: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}
