//! Query Lambda handler - indexed lookup by release year.
//!
//! Validates the `year` query string parameter, then queries the
//! `ReleaseYearIndex` secondary index for an exact match. Missing or empty
//! `year` is rejected with a 400 before the store is touched.

use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::{ApiRequest, ApiResponse};
use crate::store::{self, TableAccessor, RELEASE_YEAR_ATTRIBUTE, RELEASE_YEAR_INDEX};

pub use self::function_handler as handler;

/// Lambda handler for the Query entrypoint.
///
/// # Errors
///
/// Never returns `Err`: validation failures become a 400 and accessor
/// failures a 500, so the gateway still gets a well-formed payload.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<ApiRequest>) -> Result<ApiResponse, Error> {
    let config = AppConfig::from_env();
    info!(request_id = %event.context.request_id, "Query Lambda received request");

    let accessor = store::shared_accessor().await;
    Ok(query_items(accessor, &config, &event.payload).await)
}

/// Returns the items whose release year equals the `year` query parameter.
///
/// Split out from the Lambda wrapper so tests can drive it with any
/// [`TableAccessor`].
pub async fn query_items(
    accessor: &impl TableAccessor,
    config: &AppConfig,
    request: &ApiRequest,
) -> ApiResponse {
    let Some(year) = request.query_parameter("year").filter(|y| !y.is_empty()) else {
        error!("Request missing year parameter");
        return helpers::bad_request("Year is required");
    };

    match accessor
        .query_by_index(
            &config.table_name,
            RELEASE_YEAR_INDEX,
            RELEASE_YEAR_ATTRIBUTE,
            year,
        )
        .await
    {
        Ok(items) => {
            info!(count = items.len(), year = %year, "Query completed");
            helpers::ok_items(&items)
        }
        Err(e) => {
            error!("Query failed: {}", e);
            helpers::server_error()
        }
    }
}
