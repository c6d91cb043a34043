//! Synchronous client for the Zencoder video-encoding API.
//!
//! # Overview
//! Validates connection options once into an immutable [`ZencoderClient`],
//! then submits encode jobs with a single HTTP POST per call. The request
//! body is built as one serde value (never string interpolation), the
//! response comes back as a generic JSON object, and the HTTP round-trip
//! goes through the [`Transport`] trait so the client is testable without
//! a network.
//!
//! # Design
//! - `ZencoderClient` is immutable — safe to share across threads; every
//!   call allocates its own request and response.
//! - Each operation is split into `build_*` (produces [`HttpRequest`]) and
//!   `parse_*` (consumes [`HttpResponse`]), with [`ZencoderClient::encode`]
//!   driving a [`Transport`] between the two. The I/O boundary stays
//!   explicit and fake transports plug in directly.
//! - Responses are returned as an untyped `serde_json` map: Zencoder's
//!   response shape is not contractually fixed, so no schema is invented.
//! - No retries, no polling, no shared state between calls.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ZencoderClient;
pub use config::{ClientOptions, ResponseType};
pub use error::ZencoderError;
pub use http::{HttpRequest, HttpResponse, Transport, API_KEY_HEADER};
pub use transport::UreqTransport;
pub use types::{JobRequest, JobResponse, OutputOptions};
