//! Typed request/response models for the API Gateway proxy contract.
//!
//! The gateway event and the Lambda response are both plain JSON mappings on
//! the wire. Modeling them as structs with named fields catches malformed
//! payloads at the boundary instead of deep inside a handler.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound API Gateway proxy event.
///
/// Only the query string parameters are read; every other event field is
/// ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiRequest {
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl ApiRequest {
    /// Looks up a single query string parameter by name.
    ///
    /// A missing parameter map and a missing key both yield `None`.
    #[must_use]
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

/// Outbound API Gateway proxy response.
///
/// Serializes to the `statusCode`/`body`/`headers` mapping the proxy
/// integration expects. The body is always a JSON-encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}
