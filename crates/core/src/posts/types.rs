use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post as stored in the posts table.
///
/// `id` is assigned once at creation time and never reused. `date` is
/// whatever text the author supplied; it is neither parsed nor validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: String,
}

impl Post {
    /// Creates a post with a freshly generated identifier.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self::with_id(generate_post_id(), title, content, date)
    }

    /// Creates a post with an explicit identifier.
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            date: date.into(),
        }
    }
}

/// Generate a new random post identifier (UUID v4, hyphenated).
pub fn generate_post_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_gets_generated_id() {
        let post = Post::new("Title", "Body", "2024-01-01");

        assert!(!post.id.is_empty());
        assert!(Uuid::parse_str(&post.id).is_ok());
        assert_eq!(post.title, "Title");
        assert_eq!(post.content, "Body");
        assert_eq!(post.date, "2024-01-01");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Post::new("A", "a", "d");
        let b = Post::new("A", "a", "d");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_post_serializes_with_flat_fields() {
        let post = Post::with_id("abc", "T", "C", "yesterday");
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "title": "T",
                "content": "C",
                "date": "yesterday",
            })
        );
    }
}
