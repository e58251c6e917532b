//! DynamoDB repository implementation.
//!
//! Implements `PostRepository` from `blogapi_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use blogapi_core::pagination::{Page, PageCursor};
use blogapi_core::posts::Post;
use blogapi_core::storage::{PostRepository, Result};

use super::conversions::{cursor_to_key, item_to_post, key_to_cursor, post_to_item, KEY_ATTRIBUTE};
use super::error::{map_get_item_error, map_put_item_error, map_scan_error};

/// Create a DynamoDB client.
///
/// With an `endpoint` (DynamoDB Local) the client uses dummy credentials,
/// since the local emulator does not verify them. Without one it uses the
/// default credential chain.
pub async fn create_client(endpoint: Option<&str>) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(endpoint_url) = endpoint {
        loader = loader
            .endpoint_url(endpoint_url)
            .credentials_provider(Credentials::new("local", "local", None, None, "local"));
    }

    Client::new(&loader.load().await)
}

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from configuration values.
    pub async fn connect(table_name: impl Into<String>, endpoint: Option<&str>) -> Self {
        let table_name = table_name.into();
        tracing::info!(table = %table_name, endpoint = ?endpoint, "Connecting to DynamoDB");
        Self::new(create_client(endpoint).await, table_name)
    }
}

#[async_trait]
impl PostRepository for DynamoDbRepository {
    async fn get_post(&self, id: &str) -> Result<Option<Post>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_post(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_post(&self, post: &Post) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(post_to_item(post)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn scan_posts(
        &self,
        limit: i32,
        exclusive_start: Option<&PageCursor>,
    ) -> Result<Page<Post>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(limit)
            .set_exclusive_start_key(exclusive_start.map(cursor_to_key))
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_post)
            .collect::<Result<Vec<_>>>()?;

        let next = match result.last_evaluated_key {
            Some(key) if !key.is_empty() => Some(key_to_cursor(&key)?),
            _ => None,
        };

        tracing::debug!(
            table = %self.table_name,
            count = items.len(),
            has_next = next.is_some(),
            "Scanned posts"
        );

        Ok(Page::new(items, next))
    }
}
