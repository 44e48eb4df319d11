//! DynamoDB access behind the [`TableAccessor`] seam.
//!
//! The handlers never talk to the AWS SDK directly: they go through
//! [`TableAccessor`], which exposes exactly the two read operations this API
//! needs. [`DynamoTableAccessor`] is the production implementation; tests
//! substitute an in-memory one.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tokio::sync::OnceCell;
use tracing::info;

use crate::errors::StoreError;

/// Global secondary index keyed on the release year attribute.
pub const RELEASE_YEAR_INDEX: &str = "ReleaseYearIndex";

/// Partition key attribute of [`RELEASE_YEAR_INDEX`].
pub const RELEASE_YEAR_ATTRIBUTE: &str = "releaseYear";

/// A single stored record, schema-flexible.
///
/// Items are passed through to the caller unmodified apart from the
/// AttributeValue-to-JSON conversion.
pub type Item = serde_json::Map<String, serde_json::Value>;

/// Read-only access to a movies table.
#[async_trait]
pub trait TableAccessor: Send + Sync {
    /// Returns every item in the table, in storage order.
    async fn scan_all(&self, table: &str) -> Result<Vec<Item>, StoreError>;

    /// Returns the items whose `key_attribute` equals `key_value`, looked up
    /// through the named secondary index. Exact equality only.
    async fn query_by_index(
        &self,
        table: &str,
        index: &str,
        key_attribute: &str,
        key_value: &str,
    ) -> Result<Vec<Item>, StoreError>;
}

/// [`TableAccessor`] backed by the AWS SDK DynamoDB client.
///
/// Internal DynamoDB pagination is drained here, so callers always see the
/// complete result set.
#[derive(Debug, Clone)]
pub struct DynamoTableAccessor {
    client: Client,
}

impl DynamoTableAccessor {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableAccessor for DynamoTableAccessor {
    async fn scan_all(&self, table: &str) -> Result<Vec<Item>, StoreError> {
        let mut paginator = self
            .client
            .scan()
            .table_name(table)
            .into_paginator()
            .send();

        let mut items = Vec::new();
        while let Some(page) = paginator.next().await {
            for item in page?.items.unwrap_or_default() {
                items.push(serde_dynamo::from_item(item)?);
            }
        }
        Ok(items)
    }

    async fn query_by_index(
        &self,
        table: &str,
        index: &str,
        key_attribute: &str,
        key_value: &str,
    ) -> Result<Vec<Item>, StoreError> {
        let mut paginator = self
            .client
            .query()
            .table_name(table)
            .index_name(index)
            .key_condition_expression("#key = :value")
            .expression_attribute_names("#key", key_attribute)
            .expression_attribute_values(":value", AttributeValue::S(key_value.to_string()))
            .into_paginator()
            .send();

        let mut items = Vec::new();
        while let Some(page) = paginator.next().await {
            for item in page?.items.unwrap_or_default() {
                items.push(serde_dynamo::from_item(item)?);
            }
        }
        Ok(items)
    }
}

static SHARED_ACCESSOR: OnceCell<DynamoTableAccessor> = OnceCell::const_new();

/// Returns the process-wide [`DynamoTableAccessor`], constructing it on first
/// use.
///
/// The underlying client is reused across invocations within a process; the
/// hosting runtime owns process lifetime, so there is no teardown.
pub async fn shared_accessor() -> &'static DynamoTableAccessor {
    SHARED_ACCESSOR
        .get_or_init(|| async {
            info!("Initializing shared DynamoDB client");
            let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
            DynamoTableAccessor::new(Client::new(&config))
        })
        .await
}
