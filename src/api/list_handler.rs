//! List Lambda handler - unconditional full-table read.
//!
//! Scans the movies table through the shared accessor and returns every item
//! as a JSON array. The accessor drains DynamoDB's internal pagination, so
//! the response is always the complete set.

use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::{ApiRequest, ApiResponse};
use crate::store::{self, TableAccessor};

pub use self::function_handler as handler;

/// Lambda handler for the List entrypoint.
///
/// # Errors
///
/// Never returns `Err`: accessor failures are shaped into a 500 response so
/// the gateway still gets a well-formed payload.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<ApiRequest>) -> Result<ApiResponse, Error> {
    let config = AppConfig::from_env();
    info!(request_id = %event.context.request_id, "List Lambda received request");

    let accessor = store::shared_accessor().await;
    Ok(list_items(accessor, &config).await)
}

/// Returns every item in the configured table.
///
/// Split out from the Lambda wrapper so tests can drive it with any
/// [`TableAccessor`].
pub async fn list_items(accessor: &impl TableAccessor, config: &AppConfig) -> ApiResponse {
    match accessor.scan_all(&config.table_name).await {
        Ok(items) => {
            info!(count = items.len(), "Scan completed");
            helpers::ok_items(&items)
        }
        Err(e) => {
            error!("Scan failed: {}", e);
            helpers::server_error()
        }
    }
}
