/// Movies API - read-only Lambda handlers over the movies DynamoDB table.
///
/// This crate implements a two-Lambda architecture for the movies HTTP API:
/// 1. A List Lambda that scans the whole table and returns every movie
/// 2. A Query Lambda that looks movies up by release year through the
///    `ReleaseYearIndex` global secondary index
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - DynamoDB for storage (scan and indexed query only; no write path)
/// - Tokio for async runtime
///
/// Both handlers are stateless adapters: each invocation deserializes an API
/// Gateway proxy event, delegates the read to [`store::TableAccessor`], and
/// shapes the result into a `statusCode`/`body`/`headers` response. The
/// DynamoDB client behind the accessor is constructed once per process, on
/// first use, and reused across invocations.
///
/// # Example
///
/// ```no_run
/// use movies_api::core::config::AppConfig;
/// use movies_api::store::{self, TableAccessor};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     movies_api::setup_logging();
///
///     let config = AppConfig::from_env();
///     let accessor = store::shared_accessor().await;
///
///     let movies = accessor.scan_all(&config.table_name).await?;
///     println!("{} movies stored", movies.len());
///
///     let from_1999 = accessor
///         .query_by_index(
///             &config.table_name,
///             store::RELEASE_YEAR_INDEX,
///             store::RELEASE_YEAR_ATTRIBUTE,
///             "1999",
///         )
///         .await?;
///     println!("{} movies released in 1999", from_1999.len());
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod store;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// movies_api::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
