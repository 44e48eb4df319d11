//! Common helper functions for API handlers.
//!
//! This module provides response builders shared by both handlers so the two
//! Lambdas shape their output identically.

use serde_json::json;
use std::collections::HashMap;
use tracing::error;

use crate::core::models::ApiResponse;
use crate::store::Item;

/// Returns a 200 OK response with the items serialized as a JSON array body.
///
/// Falls back to a 500 if the items cannot be serialized.
#[must_use]
pub fn ok_items(items: &[Item]) -> ApiResponse {
    match serde_json::to_string(items) {
        Ok(body) => ApiResponse {
            status_code: 200,
            body,
            headers: Some(json_headers()),
        },
        Err(e) => {
            error!("Failed to serialize items: {}", e);
            server_error()
        }
    }
}

/// Returns a 400 response with the given client-facing message.
#[must_use]
pub fn bad_request(message: &str) -> ApiResponse {
    ApiResponse {
        status_code: 400,
        body: json!({ "error": message }).to_string(),
        headers: None,
    }
}

/// Returns a 500 response with a generic body.
///
/// The underlying cause is logged by the caller, never sent to the client.
#[must_use]
pub fn server_error() -> ApiResponse {
    ApiResponse {
        status_code: 500,
        body: json!({ "error": "Internal server error" }).to_string(),
        headers: None,
    }
}

fn json_headers() -> HashMap<String, String> {
    HashMap::from([("Content-Type".to_string(), "application/json".to_string())])
}
