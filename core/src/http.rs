//! Plain-data HTTP types and the transport seam.
//!
//! # Design
//! Requests and responses are described as plain data so the client core
//! never touches the network directly. The [`Transport`] trait is the
//! single injection point: [`UreqTransport`](crate::UreqTransport) sends
//! real HTTP, test doubles return canned responses. The jobs API is
//! POST-only, so requests carry no method field.

use std::time::Duration;

use crate::error::ZencoderError;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "Zencoder-Api-Key";

/// An HTTP POST described as plain data.
///
/// Built by [`ZencoderClient::build_encode`](crate::ZencoderClient::build_encode).
/// The timeout is the per-call deadline the transport must enforce.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub timeout: Duration,
}

/// An HTTP response described as plain data, passed to
/// [`ZencoderClient::parse_encode`](crate::ZencoderClient::parse_encode).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Sends one [`HttpRequest`] and returns the raw [`HttpResponse`].
///
/// Implementations must return the response as data for any HTTP status —
/// status interpretation belongs to the client, not the transport. Failures
/// at the network level (including the request deadline elapsing) surface
/// as [`ZencoderError::TransportError`].
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ZencoderError>;
}
