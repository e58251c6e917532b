//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use blogapi_core::pagination::PageCursor;
use blogapi_core::posts::Post;
use blogapi_core::storage::RepositoryError;

/// Partition key attribute of the posts table.
pub const KEY_ATTRIBUTE: &str = "id";

// ============================================================================
// Post conversions
// ============================================================================

/// Convert a Post to DynamoDB item.
pub fn post_to_item(post: &Post) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (KEY_ATTRIBUTE.to_string(), AttributeValue::S(post.id.clone())),
        ("title".to_string(), AttributeValue::S(post.title.clone())),
        ("content".to_string(), AttributeValue::S(post.content.clone())),
        ("date".to_string(), AttributeValue::S(post.date.clone())),
    ])
}

/// Convert a DynamoDB item to Post.
pub fn item_to_post(item: &HashMap<String, AttributeValue>) -> Result<Post, RepositoryError> {
    Ok(Post {
        id: get_string(item, KEY_ATTRIBUTE)?,
        title: get_string(item, "title")?,
        content: get_string(item, "content")?,
        date: get_string(item, "date")?,
    })
}

// ============================================================================
// Cursor conversions
// ============================================================================

/// Key map used as `ExclusiveStartKey` when resuming after `cursor`.
pub fn cursor_to_key(cursor: &PageCursor) -> HashMap<String, AttributeValue> {
    HashMap::from([(KEY_ATTRIBUTE.to_string(), AttributeValue::S(cursor.to_string()))])
}

/// Cursor for a `LastEvaluatedKey`.
pub fn key_to_cursor(key: &HashMap<String, AttributeValue>) -> Result<PageCursor, RepositoryError> {
    get_string(key, KEY_ATTRIBUTE).map(PageCursor::new)
}

// ============================================================================
// Helpers
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}
