//! Job request and response types for the Zencoder jobs API.
//!
//! # Design
//! `JobRequest` mirrors the wire body exactly, so the whole request
//! serializes as one value and `input` is always correctly JSON-escaped.
//! The response stays an untyped JSON object: Zencoder's response shape
//! is documented by the vendor, not fixed by this crate, so callers
//! interpret fields themselves.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arbitrary string-keyed configuration for one encode target.
pub type OutputOptions = Map<String, Value>;

/// The generic JSON object returned by the API on success.
pub type JobResponse = Map<String, Value>;

/// One encode job, serialized verbatim as the request body.
///
/// `input` is an opaque media source locator (its shape is not validated
/// here). An empty `notifications` list omits the key entirely — the API
/// expects absent notifications to mean "no key", not an empty array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    pub input: String,
    pub output: Vec<OutputOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<String>,
}

impl JobRequest {
    pub fn new(input: impl Into<String>, output: Vec<OutputOptions>) -> Self {
        Self {
            input: input.into(),
            output,
            notifications: Vec::new(),
        }
    }
}
