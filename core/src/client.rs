//! Immutable Zencoder client: validated configuration plus the encode
//! operation.
//!
//! # Design
//! `ZencoderClient::new` validates [`ClientOptions`] once; the resulting
//! client is immutable and safe to share between threads. The encode
//! operation is split into [`build_encode`](ZencoderClient::build_encode)
//! and [`parse_encode`](ZencoderClient::parse_encode), with
//! [`encode`](ZencoderClient::encode) driving a [`Transport`] between the
//! two. Every call is independent: no retries, no caching, no state
//! carried across invocations.

use std::time::Duration;

use crate::config::{ClientOptions, ResponseType, DEFAULT_API_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::error::ZencoderError;
use crate::http::{HttpRequest, HttpResponse, Transport, API_KEY_HEADER};
use crate::types::{JobRequest, JobResponse};

/// Synchronous client for the Zencoder jobs API.
#[derive(Debug, Clone)]
pub struct ZencoderClient {
    api_key: String,
    api_endpoint: String,
    response_type: ResponseType,
    timeout: Duration,
}

impl ZencoderClient {
    /// Validate `options` and build a client. Fails with
    /// [`ZencoderError::InvalidConfiguration`] on an empty API key or an
    /// unsupported response type. Performs no network access.
    pub fn new(options: ClientOptions) -> Result<Self, ZencoderError> {
        if options.api_key.is_empty() {
            return Err(ZencoderError::InvalidConfiguration(
                "api_key must be non-empty".to_string(),
            ));
        }
        let response_type = match options.response_type.as_deref() {
            Some(s) => ResponseType::parse(s)?,
            None => ResponseType::Json,
        };
        // Matches the original API contract: only a positive timeout
        // overrides the 30-second default.
        let timeout_secs = options
            .timeout_secs
            .filter(|&t| t > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let api_endpoint = options
            .api_endpoint
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        Ok(Self {
            api_key: options.api_key,
            api_endpoint,
            response_type,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn response_type(&self) -> ResponseType {
        self.response_type
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Serialize `job` into the POST request for the configured endpoint.
    pub fn build_encode(&self, job: &JobRequest) -> Result<HttpRequest, ZencoderError> {
        let body = serde_json::to_string(job)
            .map_err(|e| ZencoderError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            url: self.api_endpoint.clone(),
            headers: vec![
                ("Content-Type".to_string(), self.response_type.as_str().to_string()),
                (API_KEY_HEADER.to_string(), self.api_key.clone()),
            ],
            body,
            timeout: self.timeout,
        })
    }

    /// Interpret the raw response. Status >= 400 fails with
    /// [`ZencoderError::ApiError`] carrying the body verbatim; otherwise
    /// the body must parse as a JSON object.
    pub fn parse_encode(&self, response: HttpResponse) -> Result<JobResponse, ZencoderError> {
        if response.status >= 400 {
            return Err(ZencoderError::ApiError {
                status: response.status,
                body: response.body,
            });
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ZencoderError::ResponseParseError(e.to_string()))
    }

    /// Submit one encode job: build the request, send it once through
    /// `transport`, parse the response. Blocks until the response arrives
    /// or the configured timeout elapses.
    pub fn encode<T: Transport + ?Sized>(
        &self,
        transport: &T,
        job: &JobRequest,
    ) -> Result<JobResponse, ZencoderError> {
        let request = self.build_encode(job)?;
        let response = transport.send(&request)?;
        self.parse_encode(response)
    }
}
