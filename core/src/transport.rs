//! Blocking HTTP transport backed by ureq.
//!
//! # Design
//! One agent per call, configured with the request's own deadline, so
//! clients with different timeouts can share a transport. Status codes are
//! never treated as errors here — 4xx/5xx come back as data and the
//! client decides what they mean.

use crate::error::ZencoderError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// [`Transport`] implementation that executes requests over real HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl UreqTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ZencoderError> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(request.timeout))
            .build()
            .new_agent();

        let mut builder = agent.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder
            .send(request.body.as_bytes())
            .map_err(|e| ZencoderError::TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ZencoderError::TransportError(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}
